//! Battery capacity fade projection.

use std::fmt::{Display, Formatter};

use bon::Builder;
use gm_energy_quantities::Percentage;
use serde::{Deserialize, Serialize};

use crate::{
    core::validation::{Constraint, InvalidInput},
    prelude::*,
};

/// How the accumulated fade is taken off the initial capacity.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DegradationModel {
    /// Subtract the fade, in percentage points, from the initial capacity.
    #[default]
    Linear,

    /// Scale the initial capacity down by the fade.
    Proportional,
}

impl DegradationModel {
    /// Capacity left after the given fade, within `0..=initial_capacity`.
    ///
    /// The initial capacity must be positive. `NaN` passes through the clamp.
    fn remaining(self, initial_capacity: f64, fade: Percentage) -> f64 {
        let remaining = match self {
            Self::Linear => initial_capacity - fade.value(),
            Self::Proportional => initial_capacity * (1.0 - fade.to_ratio()),
        };
        remaining.clamp(0.0, initial_capacity)
    }
}

impl Display for DegradationModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Proportional => write!(f, "proportional"),
        }
    }
}

/// Display unit of the capacity figures, it does not affect the calculation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum)]
pub enum CapacityUnit {
    #[default]
    #[serde(rename = "percent")]
    Percent,

    #[value(name = "kwh")]
    #[serde(rename = "kwh")]
    KilowattHours,
}

impl Display for CapacityUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent => write!(f, "%"),
            Self::KilowattHours => write!(f, "kWh"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DegradationInput {
    pub initial_capacity: f64,

    #[builder(default)]
    #[serde(default)]
    pub capacity_unit: CapacityUnit,

    /// Full equivalent cycles per year.
    pub cycles_per_year: f64,

    pub years: f64,

    /// Capacity fade per full cycle.
    #[serde(rename = "rate_per_cycle_percent")]
    pub rate_per_cycle: Percentage,

    /// Multiplier on the fade rate, `0..=1`.
    #[builder(default = 1.0)]
    #[serde(default = "neutral_factor")]
    pub temperature_factor: f64,

    /// Multiplier on the fade rate, `0..=1`.
    #[builder(default = 1.0)]
    #[serde(default = "neutral_factor", rename = "dod_factor")]
    pub depth_of_discharge_factor: f64,

    #[builder(default)]
    #[serde(default)]
    pub model: DegradationModel,
}

const fn neutral_factor() -> f64 {
    1.0
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct DegradationProjection {
    pub total_cycles: f64,

    /// Fade per cycle after applying the temperature and depth-of-discharge factors.
    #[serde(rename = "adjusted_rate_percent")]
    pub adjusted_rate: Percentage,

    #[serde(rename = "total_degradation_percent")]
    pub total_degradation: Percentage,

    pub final_capacity: f64,

    pub capacity_lost: f64,

    /// Capacity at year zero, at every whole year, and at the end of the horizon.
    pub yearly: Vec<YearlyCapacity>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct YearlyCapacity {
    pub year: f64,
    pub cycles: f64,
    pub capacity: f64,
}

impl DegradationInput {
    #[instrument(skip_all)]
    pub fn project(&self) -> Result<DegradationProjection, InvalidInput> {
        self.validate()?;

        let total_cycles = self.cycles_per_year * self.years;
        Constraint::Finite.check("total_cycles", total_cycles)?;
        let adjusted_rate =
            self.rate_per_cycle * self.temperature_factor * self.depth_of_discharge_factor;
        let total_degradation = adjusted_rate * total_cycles;
        Constraint::Finite.check("total_degradation_percent", total_degradation.value())?;
        let final_capacity = self.model.remaining(self.initial_capacity, total_degradation);
        debug!(total_cycles, ?adjusted_rate, ?total_degradation, final_capacity, "projected");

        let yearly = self
            .milestones()
            .map(|year| {
                let cycles = self.cycles_per_year * year;
                YearlyCapacity {
                    year,
                    cycles,
                    capacity: self.model.remaining(self.initial_capacity, adjusted_rate * cycles),
                }
            })
            .collect();

        Ok(DegradationProjection {
            total_cycles,
            adjusted_rate,
            total_degradation,
            final_capacity,
            capacity_lost: self.initial_capacity - final_capacity,
            yearly,
        })
    }

    fn validate(&self) -> Result<(), InvalidInput> {
        Constraint::Positive.check("initial_capacity", self.initial_capacity)?;
        Constraint::NonNegative.check("cycles_per_year", self.cycles_per_year)?;
        Constraint::Years.check("years", self.years)?;
        Constraint::NonNegative.check("rate_per_cycle_percent", self.rate_per_cycle.value())?;
        Constraint::UnitInterval.check("temperature_factor", self.temperature_factor)?;
        Constraint::UnitInterval.check("dod_factor", self.depth_of_discharge_factor)?;
        Ok(())
    }

    /// Year zero, every whole year, and the fractional end of the horizon if any.
    fn milestones(&self) -> impl Iterator<Item = f64> {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole_years = self.years.floor() as u32;
        let tail = (self.years.fract() > 0.0).then_some(self.years);
        (0..=whole_years).map(f64::from).chain(tail)
    }
}
