use derive_more::Display;

/// Range a calculator input must fall into.
///
/// Every constraint also requires the value to be finite, so `NaN` and infinities never pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum Constraint {
    #[display("a positive number")]
    Positive,

    #[display("a non-negative number")]
    NonNegative,

    #[display("a factor within [0, 1]")]
    UnitInterval,

    #[display("an efficiency within (0, 1]")]
    Efficiency,

    #[display("a percentage within (0, 100]")]
    Percentage,

    #[display("a percentage within [0, 100)")]
    LossPercentage,

    #[display("a number of years within (0, 1000]")]
    Years,

    /// Guards derived figures against overflow.
    #[display("a finite number")]
    Finite,
}

/// Longest projection horizon, the yearly series gets one point per year.
pub const MAX_YEARS: f64 = 1000.0;

impl Constraint {
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        value.is_finite()
            && match self {
                Self::Positive => value > 0.0,
                Self::NonNegative => value >= 0.0,
                Self::UnitInterval => (0.0..=1.0).contains(&value),
                Self::Efficiency => value > 0.0 && value <= 1.0,
                Self::Percentage => value > 0.0 && value <= 100.0,
                Self::LossPercentage => (0.0..100.0).contains(&value),
                Self::Years => value > 0.0 && value <= MAX_YEARS,
                Self::Finite => true,
            }
    }

    pub fn check(self, field: &'static str, value: f64) -> Result<(), InvalidInput> {
        if self.holds(value) { Ok(()) } else { Err(InvalidInput { field, value, expected: self }) }
    }
}

/// The only way a calculation can fail.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[error("invalid {field}: {value}, expected {expected}")]
pub struct InvalidInput {
    /// Input field name as spelled in batch files, or the name of the derived figure that
    /// overflowed.
    pub field: &'static str,
    pub value: f64,
    pub expected: Constraint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        for constraint in [
            Constraint::Positive,
            Constraint::NonNegative,
            Constraint::UnitInterval,
            Constraint::Efficiency,
            Constraint::Percentage,
            Constraint::LossPercentage,
            Constraint::Years,
            Constraint::Finite,
        ] {
            assert!(!constraint.holds(f64::NAN), "{constraint} accepted NaN");
            assert!(!constraint.holds(f64::INFINITY), "{constraint} accepted +∞");
            assert!(!constraint.holds(f64::NEG_INFINITY), "{constraint} accepted -∞");
        }
    }

    #[test]
    fn boundaries() {
        assert!(!Constraint::Positive.holds(0.0));
        assert!(Constraint::NonNegative.holds(0.0));
        assert!(!Constraint::NonNegative.holds(-0.001));
        assert!(Constraint::UnitInterval.holds(0.0));
        assert!(Constraint::UnitInterval.holds(1.0));
        assert!(!Constraint::UnitInterval.holds(1.01));
        assert!(!Constraint::Efficiency.holds(0.0));
        assert!(Constraint::Efficiency.holds(1.0));
        assert!(!Constraint::Percentage.holds(0.0));
        assert!(Constraint::Percentage.holds(100.0));
        assert!(!Constraint::Percentage.holds(100.5));
        assert!(Constraint::LossPercentage.holds(0.0));
        assert!(!Constraint::LossPercentage.holds(100.0));
        assert!(Constraint::Years.holds(MAX_YEARS));
        assert!(!Constraint::Years.holds(MAX_YEARS + 1.0));
        assert!(Constraint::Finite.holds(-1.0));
        assert!(Constraint::Finite.holds(f64::MAX));
    }

    #[test]
    fn error_message() {
        let error = Constraint::Positive.check("years", -1.0).unwrap_err();
        assert_eq!(error.field, "years");
        assert_eq!(error.to_string(), "invalid years: -1, expected a positive number");
    }
}
