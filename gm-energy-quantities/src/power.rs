use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;

use crate::{KilowattHours, PowerDensity, Quantity, SquareMeters, time::Hours};

pub type Kilowatts = Quantity<1, 0, 0, 0>;

unit!(Kilowatts, suffix: "kW", precision: 2);

impl Kilowatts {
    pub const fn from_watts(watts: f64) -> Self {
        Self(OrderedFloat(watts / 1000.0))
    }

    #[must_use]
    pub const fn to_watts(self) -> f64 {
        self.0.0 * 1000.0
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Div<PowerDensity> for Kilowatts {
    type Output = SquareMeters;

    fn div(self, rhs: PowerDensity) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}
