use clap::Parser;
use gm_energy_quantities::Percentage;

use crate::{
    cli::OutputFormat,
    core::degradation::{CapacityUnit, DegradationInput, DegradationModel},
    prelude::*,
    report::Report,
};

const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Parser)]
pub struct DegradationArgs {
    /// Initial capacity, in percent or kilowatt-hours.
    #[clap(long = "initial-capacity", default_value = "100", env = "INITIAL_CAPACITY")]
    pub initial_capacity: f64,

    #[clap(long = "capacity-unit", default_value = "percent", env = "CAPACITY_UNIT")]
    pub capacity_unit: CapacityUnit,

    /// Average number of full cycles per year.
    #[clap(long = "cycles-per-year", default_value = "200", env = "CYCLES_PER_YEAR")]
    pub cycles_per_year: f64,

    /// Average number of full cycles per day, replaces `--cycles-per-year`.
    #[clap(long = "daily-cycles", env = "DAILY_CYCLES", conflicts_with = "cycles_per_year")]
    pub daily_cycles: Option<f64>,

    /// Projection horizon.
    #[clap(long, default_value = "5", env = "YEARS")]
    pub years: f64,

    /// Capacity fade per full cycle in percent.
    #[clap(
        long = "rate-per-cycle-percent",
        default_value = "0.01",
        env = "RATE_PER_CYCLE_PERCENT"
    )]
    pub rate_per_cycle: Percentage,

    /// Temperature stress factor, `0..=1`.
    #[clap(long = "temperature-factor", default_value = "1", env = "TEMPERATURE_FACTOR")]
    pub temperature_factor: f64,

    /// Depth-of-discharge stress factor, `0..=1`.
    #[clap(long = "dod-factor", default_value = "1", env = "DOD_FACTOR")]
    pub depth_of_discharge_factor: f64,

    #[clap(long, default_value = "linear", env = "DEGRADATION_MODEL")]
    pub model: DegradationModel,
}

impl DegradationArgs {
    #[must_use]
    pub fn cycles_per_year(&self) -> f64 {
        self.daily_cycles.map_or(self.cycles_per_year, |daily_cycles| daily_cycles * DAYS_PER_YEAR)
    }

    #[instrument(skip_all)]
    pub fn run(&self, format: OutputFormat) -> Result {
        let report =
            Report::try_degradation(self.into()).context("cannot project the degradation")?;
        if let Report::Degradation { projection, .. } = &report {
            info!(
                total_cycles = projection.total_cycles,
                final_capacity = projection.final_capacity,
                "projected",
            );
        }
        println!("{}", report.render(format)?);
        Ok(())
    }
}

impl From<&DegradationArgs> for DegradationInput {
    fn from(args: &DegradationArgs) -> Self {
        Self {
            initial_capacity: args.initial_capacity,
            capacity_unit: args.capacity_unit,
            cycles_per_year: args.cycles_per_year(),
            years: args.years,
            rate_per_cycle: args.rate_per_cycle,
            temperature_factor: args.temperature_factor,
            depth_of_discharge_factor: args.depth_of_discharge_factor,
            model: args.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cli::{Args, Command};

    fn parse(args: &[&str]) -> Result<DegradationArgs> {
        let args = Args::try_parse_from(
            ["gm-energy-cli", "degradation"].into_iter().chain(args.iter().copied()),
        )?;
        match args.command {
            Command::Degradation(args) => Ok(*args),
            _ => unreachable!(),
        }
    }

    #[test]
    fn defaults() {
        let input = DegradationInput::from(&parse(&[]).unwrap());
        assert_abs_diff_eq!(input.initial_capacity, 100.0);
        assert_abs_diff_eq!(input.cycles_per_year, 200.0);
        assert_abs_diff_eq!(input.years, 5.0);
        assert_abs_diff_eq!(input.rate_per_cycle.value(), 0.01);
        assert_eq!(input.capacity_unit, CapacityUnit::Percent);
        assert_eq!(input.model, DegradationModel::Linear);
    }

    #[test]
    fn daily_cycles() {
        let args = parse(&["--daily-cycles", "0.5"]).unwrap();
        assert_abs_diff_eq!(args.cycles_per_year(), 182.5);
    }

    #[test]
    fn daily_cycles_conflict() {
        assert!(parse(&["--daily-cycles", "0.5", "--cycles-per-year", "100"]).is_err());
    }

    #[test]
    fn model_and_unit() {
        let args = parse(&[
            "--model",
            "proportional",
            "--capacity-unit",
            "kwh",
            "--initial-capacity",
            "13.5",
        ])
        .unwrap();
        let input = DegradationInput::from(&args);
        assert_eq!(input.model, DegradationModel::Proportional);
        assert_eq!(input.capacity_unit, CapacityUnit::KilowattHours);
    }

    #[test]
    fn factor_out_of_range_is_rejected() {
        let input = DegradationInput::from(&parse(&["--temperature-factor", "2"]).unwrap());
        assert_eq!(input.project().unwrap_err().field, "temperature_factor");
    }
}
