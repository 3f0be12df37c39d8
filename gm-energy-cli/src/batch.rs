//! Several calculations read from a single TOML file:
//!
//! ```toml
//! [[solar]]
//! sunlight_hours = 4.0
//! daily_energy_kwh = 10.0
//! panel_efficiency_percent = 20.0
//! system_losses_percent = 14.0
//!
//! [[bess]]
//! load_demand_kw = 10.0
//! duration_hours = 4.0
//! battery_type = "li-ion-nmc"
//! ```

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{
        bess::BessInput,
        degradation::DegradationInput,
        solar::SolarInput,
        validation::InvalidInput,
    },
    prelude::*,
    report::Report,
};

#[must_use]
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Batch {
    #[serde(default)]
    pub solar: Vec<SolarInput>,

    #[serde(default)]
    pub degradation: Vec<DegradationInput>,

    #[serde(default)]
    pub bess: Vec<BessInput>,
}

/// Batch entry that did not pass validation.
#[derive(Debug, thiserror::Error)]
#[error("{calculator} entry #{position}: {source}")]
pub struct Rejection {
    pub calculator: &'static str,

    /// One-based position of the entry within its calculator section.
    pub position: usize,

    pub source: InvalidInput,
}

impl Batch {
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.solar.len() + self.degradation.len() + self.bess.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every entry, in file section order: solar, degradation, BESS.
    #[instrument(skip_all, fields(n_entries = self.len()))]
    pub fn run(self) -> Vec<Result<Report, Rejection>> {
        let solar = label("solar", self.solar.into_iter().map(Report::try_solar));
        let degradation =
            label("degradation", self.degradation.into_iter().map(Report::try_degradation));
        let bess = label("bess", self.bess.into_iter().map(Report::try_bess));
        solar.chain(degradation).chain(bess).collect()
    }
}

fn label(
    calculator: &'static str,
    outcomes: impl Iterator<Item = Result<Report, InvalidInput>>,
) -> impl Iterator<Item = Result<Report, Rejection>> {
    outcomes.enumerate().map(move |(index, outcome)| {
        outcome.map_err(|source| Rejection { calculator, position: index + 1, source })
    })
}
