use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    bess::{BessInput, BessSizing},
    degradation::{DegradationInput, DegradationProjection},
    solar::{SolarInput, SolarSizing},
};

/// Share of the initial capacity below which a battery is usually considered worn out.
const END_OF_LIFE_RATIO: f64 = 0.8;

fn new_table(title: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![Cell::new(title).add_attribute(Attribute::Bold), Cell::new("")]);
    table
}

fn add_input(table: &mut Table, name: &str, value: impl ToString) {
    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Dim),
        Cell::new(value.to_string())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
}

fn add_output(table: &mut Table, name: &str, value: impl ToString, color: Color) {
    table.add_row(vec![
        Cell::new(name),
        Cell::new(value.to_string())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(color),
    ]);
}

pub fn build_solar_table(input: &SolarInput, sizing: &SolarSizing) -> Table {
    let mut table = new_table("Rooftop solar");
    add_input(&mut table, "Peak sun hours", input.sunlight_hours);
    add_input(&mut table, "Daily energy", input.daily_energy);
    add_input(&mut table, "Panel efficiency", input.panel_efficiency);
    add_input(&mut table, "System losses", input.system_losses);
    if let Some(panel_rating) = input.panel_rating {
        add_input(&mut table, "Panel rating", format!("{:.0} W", panel_rating.to_watts()));
    }
    if let Some(panel_area) = input.panel_area {
        add_input(&mut table, "Panel area", panel_area);
    }
    add_output(&mut table, "Required area", sizing.required_area, Color::Green);
    add_output(&mut table, "System size", sizing.system_size, Color::Reset);
    if let Some(panels) = sizing.panels {
        add_output(&mut table, "Panels", panels.count, Color::Reset);
        if let Some(total_area) = panels.total_area {
            add_output(&mut table, "Total panel area", total_area, Color::Reset);
        }
    }
    table
}

pub fn build_degradation_table(
    input: &DegradationInput,
    projection: &DegradationProjection,
) -> Table {
    let unit = input.capacity_unit;
    let mut table = new_table("Battery degradation");
    add_input(&mut table, "Initial capacity", format!("{:.2} {unit}", input.initial_capacity));
    add_input(&mut table, "Cycles per year", format!("{:.1}", input.cycles_per_year));
    add_input(&mut table, "Years", input.years);
    add_input(&mut table, "Fade per cycle", format!("{:.4}", input.rate_per_cycle));
    add_input(&mut table, "Temperature factor", format!("{:.2}", input.temperature_factor));
    add_input(&mut table, "DoD factor", format!("{:.2}", input.depth_of_discharge_factor));
    add_input(&mut table, "Model", input.model);
    add_output(&mut table, "Total cycles", format!("{:.0}", projection.total_cycles), Color::Reset);
    add_output(
        &mut table,
        "Adjusted fade per cycle",
        format!("{:.4}", projection.adjusted_rate),
        Color::Reset,
    );
    add_output(&mut table, "Total degradation", projection.total_degradation, Color::Reset);
    add_output(
        &mut table,
        "Final capacity",
        format!("{:.2} {unit}", projection.final_capacity),
        capacity_color(input.initial_capacity, projection.final_capacity),
    );
    add_output(
        &mut table,
        "Capacity lost",
        format!("{:.2} {unit}", projection.capacity_lost),
        Color::Reset,
    );
    table
}

/// Year-by-year capacity, the terminal stand-in for a chart.
pub fn build_yearly_table(input: &DegradationInput, projection: &DegradationProjection) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["Year", "Cycles", "Capacity", ""]);
    for point in &projection.yearly {
        table.add_row(vec![
            Cell::new(point.year).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", point.cycles))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{:.2} {}", point.capacity, input.capacity_unit))
                .set_alignment(CellAlignment::Right)
                .fg(capacity_color(input.initial_capacity, point.capacity)),
            Cell::new(bar(point.capacity / input.initial_capacity)),
        ]);
    }
    table
}

pub fn build_bess_table(input: &BessInput, sizing: &BessSizing) -> Table {
    let mut table = new_table("BESS sizing");
    add_input(&mut table, "Load demand", input.load_demand);
    add_input(&mut table, "Duration", input.duration);
    add_input(&mut table, "Battery voltage", input.battery_voltage);
    add_input(&mut table, "Battery type", input.battery_type);
    if let Some(usable) = input.usable_depth_of_discharge {
        add_input(&mut table, "Usable DoD", usable);
    }
    add_output(&mut table, "Delivered energy", sizing.delivered_energy, Color::Reset);
    add_output(
        &mut table,
        "Round-trip efficiency",
        format!("{} ({})", sizing.efficiency, sizing.efficiency_source),
        Color::Reset,
    );
    add_output(&mut table, "Required capacity", sizing.required_capacity, Color::Green);
    add_output(&mut table, "Required charge", sizing.required_charge, Color::Green);
    table
}

fn capacity_color(initial: f64, remaining: f64) -> Color {
    if remaining <= 0.0 {
        Color::Red
    } else if remaining < initial * END_OF_LIFE_RATIO {
        Color::DarkYellow
    } else {
        Color::Green
    }
}

/// Horizontal bar of the remaining capacity share.
fn bar(ratio: f64) -> String {
    const WIDTH: f64 = 20.0;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (ratio.clamp(0.0, 1.0) * WIDTH).round() as usize;
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use gm_energy_quantities::Percentage;

    use super::*;

    #[test]
    fn bar_width() {
        assert_eq!(bar(1.0).chars().count(), 20);
        assert_eq!(bar(0.5).chars().count(), 10);
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(-1.0), "");
    }

    #[test]
    fn capacity_colors() {
        assert_eq!(capacity_color(100.0, 90.0), Color::Green);
        assert_eq!(capacity_color(100.0, 70.0), Color::DarkYellow);
        assert_eq!(capacity_color(100.0, 0.0), Color::Red);
    }

    #[test]
    fn yearly_rows() {
        let input = DegradationInput::builder()
            .initial_capacity(100.0)
            .cycles_per_year(200.0)
            .years(5.0)
            .rate_per_cycle(Percentage::from(0.01))
            .build();
        let projection = input.project().unwrap();
        let table = build_yearly_table(&input, &projection);
        assert_eq!(table.row_count(), 6);
    }
}
