//! Rooftop solar array sizing.

use bon::Builder;
use gm_energy_quantities::{
    Hours,
    KilowattHours,
    Kilowatts,
    Percentage,
    PowerDensity,
    SquareMeters,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::validation::{Constraint, InvalidInput},
    prelude::*,
};

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolarInput {
    /// Average daily peak sun hours.
    pub sunlight_hours: Hours,

    /// Energy the array should produce per day.
    #[serde(rename = "daily_energy_kwh")]
    pub daily_energy: KilowattHours,

    #[serde(rename = "panel_efficiency_percent")]
    pub panel_efficiency: Percentage,

    /// Wiring, inverter, soiling and temperature losses combined.
    #[serde(rename = "system_losses_percent")]
    pub system_losses: Percentage,

    /// Rated power of a single panel.
    #[serde(default, rename = "panel_rating_kw", skip_serializing_if = "Option::is_none")]
    pub panel_rating: Option<Kilowatts>,

    /// Surface of a single panel.
    #[serde(default, rename = "panel_area_sqm", skip_serializing_if = "Option::is_none")]
    pub panel_area: Option<SquareMeters>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SolarSizing {
    #[serde(rename = "required_area_sqm")]
    pub required_area: SquareMeters,

    /// Power the required area receives at standard test conditions.
    #[serde(rename = "system_size_kw")]
    pub system_size: Kilowatts,

    /// Only available when the panel rating is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<PanelLayout>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct PanelLayout {
    pub count: u64,

    /// Only available when the panel area is known.
    #[serde(rename = "total_area_sqm", skip_serializing_if = "Option::is_none")]
    pub total_area: Option<SquareMeters>,
}

impl SolarInput {
    #[instrument(skip_all)]
    pub fn size(&self) -> Result<SolarSizing, InvalidInput> {
        self.validate()?;

        // Daily energy yield of one square meter is `sunlight_hours × yield_density`:
        let yield_density = PowerDensity::STANDARD_TEST_CONDITIONS
            * self.panel_efficiency.to_ratio()
            * (1.0 - self.system_losses.to_ratio());
        let required_area = self.daily_energy / self.sunlight_hours / yield_density;
        Constraint::Finite.check("required_area_sqm", required_area.value())?;
        let system_size = required_area * PowerDensity::STANDARD_TEST_CONDITIONS;
        Constraint::Finite.check("system_size_kw", system_size.value())?;
        debug!(?yield_density, ?required_area, "sized");

        let panels = self
            .panel_rating
            .map(|panel_rating| self.lay_out(system_size, panel_rating))
            .transpose()?;

        Ok(SolarSizing { required_area, system_size, panels })
    }

    fn lay_out(
        &self,
        system_size: Kilowatts,
        panel_rating: Kilowatts,
    ) -> Result<PanelLayout, InvalidInput> {
        Constraint::Finite.check("panel_count", (system_size / panel_rating).into_inner())?;
        let count = panel_count(system_size, panel_rating);
        let total_area = self
            .panel_area
            .map(|panel_area| {
                #[expect(clippy::cast_precision_loss)]
                let total_area = panel_area * count as f64;
                Constraint::Finite.check("total_area_sqm", total_area.value()).map(|()| total_area)
            })
            .transpose()?;
        Ok(PanelLayout { count, total_area })
    }

    fn validate(&self) -> Result<(), InvalidInput> {
        Constraint::Positive.check("sunlight_hours", self.sunlight_hours.value())?;
        Constraint::Positive.check("daily_energy_kwh", self.daily_energy.value())?;
        Constraint::Percentage.check("panel_efficiency_percent", self.panel_efficiency.value())?;
        Constraint::LossPercentage.check("system_losses_percent", self.system_losses.value())?;
        if let Some(panel_rating) = self.panel_rating {
            Constraint::Positive.check("panel_rating_kw", panel_rating.value())?;
        }
        if let Some(panel_area) = self.panel_area {
            Constraint::Positive.check("panel_area_sqm", panel_area.value())?;
        }
        Ok(())
    }
}

/// Smallest number of panels whose combined rating covers the system size.
fn panel_count(system_size: Kilowatts, panel_rating: Kilowatts) -> u64 {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (system_size / panel_rating).ceil() as u64;
    count
}
