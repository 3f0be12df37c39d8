mod batch;
mod bess;
mod degradation;
mod solar;

use clap::{Parser, Subcommand};

use crate::{
    cli::{batch::BatchArgs, bess::BessArgs, degradation::DegradationArgs, solar::SolarArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// How to print the results.
    #[clap(long, global = true, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the roof area needed to produce the desired daily energy.
    #[clap(name = "solar")]
    Solar(Box<SolarArgs>),

    /// Project battery capacity fade over the years.
    #[clap(name = "degradation")]
    Degradation(Box<DegradationArgs>),

    /// Size a battery energy storage system for a backup load.
    #[clap(name = "bess")]
    Bess(Box<BessArgs>),

    /// Run every calculation listed in a TOML file.
    #[clap(name = "batch")]
    Batch(BatchArgs),
}

impl Command {
    pub fn run(self, format: OutputFormat) -> Result {
        match self {
            Self::Solar(args) => args.run(format),
            Self::Degradation(args) => args.run(format),
            Self::Bess(args) => args.run(format),
            Self::Batch(args) => args.run(format),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable result panels.
    #[default]
    Table,

    /// Inputs and results as pretty-printed JSON.
    Json,
}
