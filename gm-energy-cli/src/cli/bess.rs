use clap::Parser;
use gm_energy_quantities::{Hours, Kilowatts, Percentage, Volts};

use crate::{
    cli::OutputFormat,
    core::bess::{BatteryType, BessInput},
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct BessArgs {
    /// Load demand in kilowatts.
    #[clap(long = "load-demand-kw", default_value = "10", env = "LOAD_DEMAND_KW")]
    pub load_demand: Kilowatts,

    /// Duration of backup in hours.
    #[clap(long = "duration-hours", default_value = "4", env = "DURATION_HOURS")]
    pub duration: Hours,

    /// Battery system voltage.
    #[clap(long = "battery-voltage", default_value = "48", env = "BATTERY_VOLTAGE")]
    pub battery_voltage: Volts,

    /// Battery chemistry, defines the default round-trip efficiency.
    #[clap(long = "battery-type", default_value = "li-ion-lfp", env = "BATTERY_TYPE")]
    pub battery_type: BatteryType,

    /// Round-trip efficiency percent, overrides the battery type default.
    #[clap(long = "efficiency-percent", env = "EFFICIENCY_PERCENT")]
    pub efficiency_override: Option<Percentage>,

    /// Usable depth of discharge percent.
    #[clap(long = "usable-dod-percent", env = "USABLE_DOD_PERCENT")]
    pub usable_depth_of_discharge: Option<Percentage>,
}

impl From<&BessArgs> for BessInput {
    fn from(args: &BessArgs) -> Self {
        Self {
            load_demand: args.load_demand,
            duration: args.duration,
            battery_voltage: args.battery_voltage,
            battery_type: args.battery_type,
            efficiency_override: args.efficiency_override,
            usable_depth_of_discharge: args.usable_depth_of_discharge,
        }
    }
}

impl BessArgs {
    #[instrument(skip_all)]
    pub fn run(&self, format: OutputFormat) -> Result {
        let report = Report::try_bess(self.into()).context("cannot size the storage system")?;
        if let Report::Bess { sizing, .. } = &report {
            info!(
                required_capacity = %sizing.required_capacity,
                required_charge = %sizing.required_charge,
                "sized",
            );
        }
        println!("{}", report.render(format)?);
        Ok(())
    }
}
