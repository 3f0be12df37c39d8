//! Battery energy storage system sizing.

use std::fmt::{Display, Formatter};

use bon::Builder;
use gm_energy_quantities::{AmpereHours, Hours, KilowattHours, Kilowatts, Percentage, Volts};
use serde::{Deserialize, Serialize};

use crate::{
    core::validation::{Constraint, InvalidInput},
    prelude::*,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BatteryType {
    LeadAcid,

    /// Lithium nickel manganese cobalt oxide.
    LiIonNmc,

    /// Lithium iron phosphate.
    #[default]
    LiIonLfp,
}

impl Display for BatteryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadAcid => write!(f, "Lead-Acid"),
            Self::LiIonNmc => write!(f, "Li-ion NMC"),
            Self::LiIonLfp => write!(f, "Li-ion LFP"),
        }
    }
}

impl BatteryType {
    /// Typical round-trip efficiency of the chemistry, `0..=1`.
    #[must_use]
    pub const fn round_trip_efficiency(self) -> f64 {
        match self {
            Self::LeadAcid => 0.85,
            Self::LiIonNmc => 0.95,
            Self::LiIonLfp => 0.98,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EfficiencySource {
    Override,
    BatteryType(BatteryType),
}

impl Display for EfficiencySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::BatteryType(battery_type) => write!(f, "{battery_type}"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BessInput {
    /// Power the system has to deliver.
    #[serde(rename = "load_demand_kw")]
    pub load_demand: Kilowatts,

    /// For how long the load has to be carried.
    #[serde(rename = "duration_hours")]
    pub duration: Hours,

    /// Nominal system voltage.
    #[builder(default = BessInput::DEFAULT_VOLTAGE)]
    #[serde(default = "BessInput::default_voltage")]
    pub battery_voltage: Volts,

    #[builder(default)]
    #[serde(default)]
    pub battery_type: BatteryType,

    /// Round-trip efficiency to use instead of the battery type default.
    #[serde(default, rename = "efficiency_percent", skip_serializing_if = "Option::is_none")]
    pub efficiency_override: Option<Percentage>,

    /// Share of the nameplate capacity that may actually be discharged.
    #[serde(default, rename = "usable_dod_percent", skip_serializing_if = "Option::is_none")]
    pub usable_depth_of_discharge: Option<Percentage>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct BessSizing {
    /// Energy the load consumes over the backup duration.
    #[serde(rename = "delivered_energy_kwh")]
    pub delivered_energy: KilowattHours,

    #[serde(rename = "efficiency_percent")]
    pub efficiency: Percentage,

    pub efficiency_source: EfficiencySource,

    #[serde(rename = "required_capacity_kwh")]
    pub required_capacity: KilowattHours,

    #[serde(rename = "required_capacity_ah")]
    pub required_charge: AmpereHours,
}

impl BessInput {
    pub const DEFAULT_VOLTAGE: Volts = Volts::new(48.0);

    const fn default_voltage() -> Volts {
        Self::DEFAULT_VOLTAGE
    }

    #[instrument(skip_all)]
    pub fn size(&self) -> Result<BessSizing, InvalidInput> {
        Constraint::Positive.check("load_demand_kw", self.load_demand.value())?;
        Constraint::Positive.check("duration_hours", self.duration.value())?;
        Constraint::Positive.check("battery_voltage", self.battery_voltage.value())?;

        let (efficiency, efficiency_source) = match self.efficiency_override {
            Some(efficiency) => {
                Constraint::Percentage.check("efficiency_percent", efficiency.value())?;
                (efficiency.to_ratio(), EfficiencySource::Override)
            }
            None => {
                let efficiency = self.battery_type.round_trip_efficiency();
                // Guards the battery type table:
                Constraint::Efficiency.check("battery_type", efficiency)?;
                (efficiency, EfficiencySource::BatteryType(self.battery_type))
            }
        };
        debug!(efficiency, %efficiency_source, "selected the round-trip efficiency");

        let usable_ratio = match self.usable_depth_of_discharge {
            Some(usable) => {
                Constraint::Percentage.check("usable_dod_percent", usable.value())?;
                usable.to_ratio()
            }
            None => 1.0,
        };

        let delivered_energy = self.load_demand * self.duration;
        let required_capacity = delivered_energy / efficiency / usable_ratio;
        let required_charge = required_capacity / self.battery_voltage;
        Constraint::Finite.check("delivered_energy_kwh", delivered_energy.value())?;
        Constraint::Finite.check("required_capacity_kwh", required_capacity.value())?;
        Constraint::Finite.check("required_capacity_ah", required_charge.value())?;

        Ok(BessSizing {
            delivered_energy,
            efficiency: Percentage::from_ratio(efficiency),
            efficiency_source,
            required_capacity,
            required_charge,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn reference() -> BessInput {
        BessInput::builder()
            .load_demand(Kilowatts::from(10))
            .duration(Hours::from(4))
            .build()
    }

    #[test]
    fn efficiency_table() {
        assert_abs_diff_eq!(BatteryType::LeadAcid.round_trip_efficiency(), 0.85);
        assert_abs_diff_eq!(BatteryType::LiIonNmc.round_trip_efficiency(), 0.95);
        assert_abs_diff_eq!(BatteryType::LiIonLfp.round_trip_efficiency(), 0.98);
        assert_eq!(BatteryType::default(), BatteryType::LiIonLfp);
    }

    #[test]
    fn table_efficiencies_are_valid() {
        for battery_type in <BatteryType as clap::ValueEnum>::value_variants() {
            assert!(Constraint::Efficiency.holds(battery_type.round_trip_efficiency()));
            let input = BessInput { battery_type: *battery_type, ..reference() };
            assert_eq!(
                input.size().unwrap().efficiency_source,
                EfficiencySource::BatteryType(*battery_type),
            );
        }
    }

    #[test]
    fn reference_sizing() {
        let sizing = reference().size().unwrap();
        assert_abs_diff_eq!(sizing.delivered_energy.value(), 40.0);
        assert_abs_diff_eq!(sizing.required_capacity.value(), 40.816_326, epsilon = 1e-6);
        assert_abs_diff_eq!(sizing.required_charge.value(), 850.340_136, epsilon = 1e-6);
        assert_eq!(sizing.required_capacity.to_string(), "40.82 kWh");
        assert_eq!(sizing.efficiency_source, EfficiencySource::BatteryType(BatteryType::LiIonLfp));
    }

    #[test]
    fn efficiency_override() {
        let input = BessInput { efficiency_override: Some(Percentage::from(90)), ..reference() };
        let sizing = input.size().unwrap();
        assert_abs_diff_eq!(sizing.required_capacity.value(), 44.444_444, epsilon = 1e-6);
        assert_abs_diff_eq!(sizing.efficiency.value(), 90.0, epsilon = 1e-9);
        assert_eq!(sizing.efficiency_source, EfficiencySource::Override);
    }

    #[test]
    fn lead_acid() {
        let input = BessInput { battery_type: BatteryType::LeadAcid, ..reference() };
        let sizing = input.size().unwrap();
        assert_abs_diff_eq!(sizing.required_capacity.value(), 47.058_823, epsilon = 1e-6);
    }

    #[test]
    fn usable_depth_of_discharge() {
        let input = BessInput {
            load_demand: Kilowatts::from(50),
            efficiency_override: Some(Percentage::from(90)),
            usable_depth_of_discharge: Some(Percentage::from(80)),
            ..reference()
        };
        let sizing = input.size().unwrap();
        assert_abs_diff_eq!(sizing.delivered_energy.value(), 200.0);
        assert_abs_diff_eq!(sizing.required_capacity.value(), 277.777_777, epsilon = 1e-6);
    }

    #[test]
    fn voltage_scales_the_charge() {
        let input = BessInput { battery_voltage: Volts::from(400), ..reference() };
        let sizing = input.size().unwrap();
        assert_abs_diff_eq!(
            sizing.required_charge.value(),
            sizing.required_capacity.value() * 1000.0 / 400.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_overflowing_energy() {
        let input = BessInput {
            load_demand: Kilowatts::from(1e200),
            duration: Hours::from(1e200),
            ..reference()
        };
        let error = input.size().unwrap_err();
        assert_eq!(error.field, "delivered_energy_kwh");
        assert_eq!(error.expected, Constraint::Finite);
    }

    #[test]
    fn rejects_overflowing_charge() {
        let input = BessInput {
            load_demand: Kilowatts::from(1e300),
            duration: Hours::from(1),
            battery_voltage: Volts::from(1e-10),
            ..reference()
        };
        assert_eq!(input.size().unwrap_err().field, "required_capacity_ah");
    }

    #[test]
    fn positive_inputs_give_finite_results() {
        for load_demand in [0.001, 10.0, 1e150] {
            for duration in [0.25, 4.0, 1e100] {
                for battery_type in [BatteryType::LeadAcid, BatteryType::LiIonNmc] {
                    let input = BessInput {
                        load_demand: Kilowatts::from(load_demand),
                        duration: Hours::from(duration),
                        battery_type,
                        ..reference()
                    };
                    let sizing = input.size().unwrap();
                    assert!(sizing.required_capacity.value().is_finite());
                    assert!(sizing.required_capacity.value() > 0.0);
                    assert!(sizing.required_charge.value().is_finite());
                    assert!(sizing.required_charge.value() > 0.0);
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        let cases = [
            ("load_demand_kw", BessInput { load_demand: Kilowatts::from(-10), ..reference() }),
            ("duration_hours", BessInput { duration: Hours::ZERO, ..reference() }),
            (
                "battery_voltage",
                BessInput { battery_voltage: Volts::from(f64::NAN), ..reference() },
            ),
            (
                "efficiency_percent",
                BessInput { efficiency_override: Some(Percentage::ZERO), ..reference() },
            ),
            (
                "efficiency_percent",
                BessInput { efficiency_override: Some(Percentage::from(150)), ..reference() },
            ),
            (
                "usable_dod_percent",
                BessInput { usable_depth_of_discharge: Some(Percentage::from(-5)), ..reference() },
            ),
        ];
        for (field, input) in cases {
            assert_eq!(input.size().unwrap_err().field, field);
        }
    }

    #[test]
    fn deserialize() {
        let input: BessInput = toml::from_str(
            r"
                load_demand_kw = 5.0
                duration_hours = 2.0
                battery_type = 'lead-acid'
            ",
        )
        .unwrap();
        assert_eq!(input.battery_type, BatteryType::LeadAcid);
        assert_abs_diff_eq!(input.battery_voltage.value(), 48.0);
        assert!(input.efficiency_override.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = toml::from_str::<BessInput>(
            "load_demand_kw = 5.0\nduration_hours = 2.0\nvoltage = 12.0",
        );
        assert!(result.is_err());
    }
}
