use std::ops::Div;

use crate::{AmpereHours, Kilowatts, Quantity, Volts, time::Hours};

pub type KilowattHours = Quantity<1, 0, 1, 0>;

unit!(KilowattHours, suffix: "kWh", precision: 2);

impl Div<Hours> for KilowattHours {
    type Output = Kilowatts;

    fn div(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

/// Charge needed to store the energy at the given nominal voltage.
impl Div<Volts> for KilowattHours {
    type Output = AmpereHours;

    fn div(self, rhs: Volts) -> Self::Output {
        // kWh → Wh, then Wh / V = Ah.
        Quantity(self.0 * 1000.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn average_power() {
        assert_eq!(KilowattHours::from(10) / Hours::from(4), Kilowatts::from(2.5));
    }

    #[test]
    fn charge_at_voltage() {
        let charge = KilowattHours::from(4.8) / Volts::from(48);
        assert_abs_diff_eq!(charge.0.0, 100.0, epsilon = 1e-9);
    }
}
