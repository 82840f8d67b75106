use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::goe::Status,
    core::estimate::ChargeEstimate,
    quantity::ratios::Percentage,
    settings::{ConnectionStatus, Settings},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn value_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

pub fn build_estimate_table(estimate: &ChargeEstimate) -> Table {
    let soc_increase = estimate.soc_increase();

    let mut table = new_table();
    table.set_header(vec!["Charge", "Value"]);
    table.add_row(vec![
        Cell::new("Current"),
        value_cell(estimate.from).fg(Color::DarkYellow),
    ]);
    table.add_row(vec![Cell::new("Target"), value_cell(estimate.to).fg(Color::Green)]);
    table.add_row(vec![
        Cell::new("Energy needed").add_attribute(Attribute::Bold),
        value_cell(estimate.required_energy).fg(Color::Blue).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("SOC increase"),
        value_cell(soc_increase).fg(if soc_increase >= Percentage::ZERO {
            Color::Green
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![
        Cell::new("Without losses").add_attribute(Attribute::Dim),
        value_cell(estimate.base_energy).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Effective capacity").add_attribute(Attribute::Dim),
        value_cell(format!("{:.1}", estimate.effective_capacity)).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Usable capacity (10–90%)").add_attribute(Attribute::Dim),
        value_cell(format!("{:.1}", estimate.usable_capacity)).add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_settings_table(settings: &Settings) -> Table {
    let battery = settings.battery();

    let mut table = new_table();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        Cell::new("Battery capacity"),
        value_cell(format!("{:.1}", settings.battery_capacity)),
    ]);
    table.add_row(vec![
        Cell::new("State of health"),
        value_cell(format!("{:.1}", settings.state_of_health))
            .fg(state_of_health_color(settings.state_of_health)),
    ]);
    table.add_row(vec![
        Cell::new("Charge losses"),
        value_cell(format!("{:.1}", settings.charge_losses)),
    ]);
    table.add_row(vec![Cell::new("Current charge"), value_cell(settings.current_soc)]);
    table.add_row(vec![Cell::new("Target charge"), value_cell(settings.target_soc)]);
    table.add_row(vec![
        Cell::new("Effective capacity").add_attribute(Attribute::Dim),
        value_cell(format!("{:.1}", battery.effective_capacity())).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Usable capacity (10–90%)").add_attribute(Attribute::Dim),
        value_cell(format!("{:.1}", battery.usable_capacity())).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("go-eCharger"),
        if settings.charger.enabled {
            value_cell("enabled").fg(Color::Green)
        } else {
            value_cell("disabled").add_attribute(Attribute::Dim)
        },
    ]);
    table.add_row(vec![Cell::new("Charger address"), value_cell(&settings.charger.address)]);
    table.add_row(vec![
        Cell::new("Connection status"),
        connection_status_cell(&settings.charger.status),
    ]);
    table
}

pub fn build_charger_status_table(status: &Status) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Charger", "Value"]);
    table.add_row(vec![Cell::new("Car"), value_cell(status.car_state_description())]);
    table.add_row(vec![
        Cell::new("Charging allowed"),
        match status.is_charging_allowed {
            Some(true) => value_cell("yes").fg(Color::Green),
            Some(false) => value_cell("no").fg(Color::Red),
            None => value_cell("?").add_attribute(Attribute::Dim),
        },
    ]);
    table.add_row(vec![Cell::new("Requested current"), amperes_cell(status.requested_current)]);
    table.add_row(vec![Cell::new("Actual current"), amperes_cell(status.actual_current)]);
    table.add_row(vec![
        Cell::new("Energy limit"),
        status.energy_limit().map_or_else(
            || value_cell("none").add_attribute(Attribute::Dim),
            |limit| value_cell(format!("{limit:.3}")),
        ),
    ]);
    table
}

fn amperes_cell(current: Option<u32>) -> Cell {
    current.map_or_else(
        || value_cell("?").add_attribute(Attribute::Dim),
        |current| value_cell(format!("{current} A")),
    )
}

fn connection_status_cell(status: &ConnectionStatus) -> Cell {
    let cell = value_cell(status);
    match status {
        ConnectionStatus::Connected(_) => cell.fg(Color::Green),
        ConnectionStatus::Failed(_) => cell.fg(Color::Red),
        ConnectionStatus::NotTested => cell.add_attribute(Attribute::Dim),
    }
}

fn state_of_health_color(state_of_health: Percentage) -> Color {
    if state_of_health > Percentage(90.0) {
        Color::Green
    } else if state_of_health > Percentage(80.0) {
        Color::DarkYellow
    } else {
        Color::Red
    }
}
