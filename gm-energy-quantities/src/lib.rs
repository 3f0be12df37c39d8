//! Physical quantities with their dimensions tracked in the type system.
//!
//! A quantity carries the exponents of power (kW), area (m²), time (h) and voltage (V).
//! Mixing up, say, kilowatts and kilowatt-hours is a compile error, while the few
//! meaningful cross-dimension operations are implemented explicitly.

#[macro_use]
mod macros;

pub mod area;
pub mod electric;
pub mod energy;
pub mod percentage;
pub mod power;
pub mod time;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

pub use self::{
    area::{PowerDensity, SquareMeters},
    electric::{AmpereHours, Volts},
    energy::KilowattHours,
    percentage::Percentage,
    power::Kilowatts,
    time::Hours,
};

#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const POWER: isize, const AREA: isize, const TIME: isize, const VOLTAGE: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const AREA: isize, const TIME: isize, const VOLTAGE: isize>
    Quantity<POWER, AREA, TIME, VOLTAGE>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    /// Raw value in the base unit of the dimension.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0.0
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const VOLTAGE: isize> Mul<f64>
    for Quantity<POWER, AREA, TIME, VOLTAGE>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const VOLTAGE: isize> Div<f64>
    for Quantity<POWER, AREA, TIME, VOLTAGE>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const VOLTAGE: isize> Div<Self>
    for Quantity<POWER, AREA, TIME, VOLTAGE>
{
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
