use clap::Parser;
use gm_energy_quantities::{Hours, KilowattHours, Kilowatts, Percentage, SquareMeters};

use crate::{cli::OutputFormat, core::solar::SolarInput, prelude::*, report::Report};

#[derive(Parser)]
pub struct SolarArgs {
    /// Average daily peak sun hours.
    #[clap(long = "sunlight-hours", default_value = "4", env = "SUNLIGHT_HOURS")]
    pub sunlight_hours: Hours,

    /// Desired daily energy production in kilowatt-hours.
    #[clap(long = "daily-energy-kwh", default_value = "10", env = "DAILY_ENERGY_KWH")]
    pub daily_energy: KilowattHours,

    /// Solar panel efficiency percent.
    #[clap(
        long = "panel-efficiency-percent",
        default_value = "20",
        env = "PANEL_EFFICIENCY_PERCENT"
    )]
    pub panel_efficiency: Percentage,

    /// System losses percent: wiring, inverter, soiling, and so on.
    #[clap(long = "system-losses-percent", default_value = "14", env = "SYSTEM_LOSSES_PERCENT")]
    pub system_losses: Percentage,

    /// Rated power of a single panel in watts, enables the panel count.
    #[clap(long = "panel-watts", env = "PANEL_WATTS")]
    pub panel_watts: Option<f64>,

    /// Surface of a single panel in square meters, enables the total panel area.
    #[clap(long = "panel-area-sqm", env = "PANEL_AREA_SQM")]
    pub panel_area: Option<SquareMeters>,
}

impl From<&SolarArgs> for SolarInput {
    fn from(args: &SolarArgs) -> Self {
        Self {
            sunlight_hours: args.sunlight_hours,
            daily_energy: args.daily_energy,
            panel_efficiency: args.panel_efficiency,
            system_losses: args.system_losses,
            panel_rating: args.panel_watts.map(Kilowatts::from_watts),
            panel_area: args.panel_area,
        }
    }
}

impl SolarArgs {
    #[instrument(skip_all)]
    pub fn run(&self, format: OutputFormat) -> Result {
        let report = Report::try_solar(self.into()).context("cannot size the solar array")?;
        if let Report::Solar { sizing, .. } = &report {
            info!(
                required_area = %sizing.required_area,
                system_size = %sizing.system_size,
                "sized",
            );
        }
        println!("{}", report.render(format)?);
        Ok(())
    }
}
