use ordered_float::OrderedFloat;

use crate::Quantity;

/// Dimensionless percentage, `100.0` being the whole.
pub type Percentage = Quantity<0, 0, 0, 0>;

unit!(Percentage, suffix: "%", precision: 2);

impl Percentage {
    pub const fn from_ratio(ratio: f64) -> Self {
        Self(OrderedFloat(ratio * 100.0))
    }

    /// Convert the percentage into `0.0..=1.0`.
    #[must_use]
    pub const fn to_ratio(self) -> f64 {
        self.0.0 / 100.0
    }
}
