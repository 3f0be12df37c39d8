use comfy_table::Table;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    cli::OutputFormat,
    core::{
        bess::{BessInput, BessSizing},
        degradation::{DegradationInput, DegradationProjection},
        solar::{SolarInput, SolarSizing},
        validation::InvalidInput,
    },
    prelude::*,
    tables::{build_bess_table, build_degradation_table, build_solar_table, build_yearly_table},
};

/// Calculator inputs together with what has been derived from them.
#[must_use]
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum Report {
    Solar { input: SolarInput, sizing: SolarSizing },
    Degradation { input: DegradationInput, projection: DegradationProjection },
    Bess { input: BessInput, sizing: BessSizing },
}

impl Report {
    pub fn try_solar(input: SolarInput) -> Result<Self, InvalidInput> {
        Ok(Self::Solar { sizing: input.size()?, input })
    }

    pub fn try_degradation(input: DegradationInput) -> Result<Self, InvalidInput> {
        Ok(Self::Degradation { projection: input.project()?, input })
    }

    pub fn try_bess(input: BessInput) -> Result<Self, InvalidInput> {
        Ok(Self::Bess { sizing: input.size()?, input })
    }

    #[must_use]
    pub const fn calculator(&self) -> &'static str {
        match self {
            Self::Solar { .. } => "solar",
            Self::Degradation { .. } => "degradation",
            Self::Bess { .. } => "bess",
        }
    }

    #[must_use]
    pub fn tables(&self) -> Vec<Table> {
        match self {
            Self::Solar { input, sizing } => vec![build_solar_table(input, sizing)],
            Self::Degradation { input, projection } => vec![
                build_degradation_table(input, projection),
                build_yearly_table(input, projection),
            ],
            Self::Bess { input, sizing } => vec![build_bess_table(input, sizing)],
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.tables().iter().join("\n")),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize the report")
            }
        }
    }
}

/// Render several reports at once, JSON output becomes an array.
pub fn render_all(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(reports.iter().flat_map(Report::tables).join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("failed to serialize the reports")
        }
    }
}
