use std::ops::Mul;

use ordered_float::OrderedFloat;

use crate::{Kilowatts, Quantity};

pub type SquareMeters = Quantity<0, 1, 0, 0>;

unit!(SquareMeters, suffix: "m²", precision: 2);

/// [Surface power density][1] measured in **kilowatts per meter squared**.
///
/// [1]: https://en.wikipedia.org/wiki/Surface_power_density
pub type PowerDensity = Quantity<1, -1, 0, 0>;

unit!(PowerDensity, suffix: "kW/m²", precision: 3);

impl PowerDensity {
    /// Irradiance at standard test conditions, which is also what defines a peak sun hour.
    pub const STANDARD_TEST_CONDITIONS: Self = Self(OrderedFloat(1.0));
}

impl Mul<PowerDensity> for SquareMeters {
    type Output = Kilowatts;

    fn mul(self, rhs: PowerDensity) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
