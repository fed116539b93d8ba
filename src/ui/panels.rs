use std::collections::BTreeSet;

use eframe::egui::{self, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;
use crate::ui::charts;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and chart toggles
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let bounds = state.dataset.bounds.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Numeric ranges ----
            range_sliders(
                ui,
                "Model year",
                &mut state.filters.year_min,
                &mut state.filters.year_max,
                bounds.model_year,
            );
            range_sliders(
                ui,
                "Price ($)",
                &mut state.filters.price_min,
                &mut state.filters.price_max,
                bounds.price,
            );
            range_sliders(
                ui,
                "Odometer",
                &mut state.filters.odometer_min,
                &mut state.filters.odometer_max,
                bounds.odometer,
            );
            ui.separator();

            // ---- Categorical multi-selects ----
            category_filter(ui, state, "Condition", &bounds.conditions, Column::Condition);
            category_filter(
                ui,
                state,
                "Vehicle type",
                &bounds.vehicle_types,
                Column::VehicleType,
            );

            ui.separator();
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }

            // ---- Chart toggles ----
            ui.separator();
            ui.heading("Charts");
            ui.checkbox(&mut state.show_histogram, "Odometer histogram");
            ui.checkbox(&mut state.show_scatter_odometer, "Price vs odometer");
            ui.checkbox(&mut state.show_scatter_year, "Price vs model year");
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

/// Min/max slider pair over an inclusive integer range, clamped so the pair
/// never crosses.
fn range_sliders(ui: &mut Ui, label: &str, min: &mut i64, max: &mut i64, bounds: (i64, i64)) {
    ui.strong(label);
    ui.add(Slider::new(min, bounds.0..=bounds.1).text("min"));
    ui.add(Slider::new(max, bounds.0..=bounds.1).text("max"));
    if *min > *max {
        *max = *min;
    }
    ui.add_space(4.0);
}

enum Column {
    Condition,
    VehicleType,
}

/// Collapsible checkbox list for a categorical column. Nothing checked means
/// no constraint; the header makes that explicit.
fn category_filter(
    ui: &mut Ui,
    state: &mut AppState,
    label: &str,
    values: &BTreeSet<String>,
    column: Column,
) {
    let selected = match column {
        Column::Condition => &state.filters.conditions,
        Column::VehicleType => &state.filters.vehicle_types,
    };
    let header = if selected.is_empty() {
        format!("{label}  (all)")
    } else {
        format!("{label}  ({}/{})", selected.len(), values.len())
    };

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                match column {
                    Column::Condition => state.filters.conditions.clear(),
                    Column::VehicleType => state.filters.vehicle_types.clear(),
                }
                state.refilter();
            }

            for value in values {
                let is_selected = match column {
                    Column::Condition => state.filters.conditions.contains(value),
                    Column::VehicleType => state.filters.vehicle_types.contains(value),
                };
                let mut checked = is_selected;
                if ui.checkbox(&mut checked, value).changed() {
                    match column {
                        Column::Condition => state.toggle_condition(value),
                        Column::VehicleType => state.toggle_vehicle_type(value),
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar with the filter summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Vehicle Sale Listings");
        ui.separator();
        ui.label(format!(
            "Showing {} of {} listings after filtering",
            state.visible_indices.len(),
            state.dataset.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Central panel – active charts
// ---------------------------------------------------------------------------

/// Render the charts whose toggles are active; any subset may be on.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if !state.show_histogram && !state.show_scatter_odometer && !state.show_scatter_year {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick one or more charts in the side panel");
        });
        return;
    }

    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        if state.show_histogram {
            ui.strong("Odometer distribution");
            charts::odometer_histogram(ui, state);
            ui.add_space(8.0);
        }
        if state.show_scatter_odometer {
            ui.strong("Price vs odometer");
            charts::price_vs_odometer(ui, state);
            ui.add_space(8.0);
        }
        if state.show_scatter_year {
            ui.strong("Price vs model year");
            charts::price_vs_model_year(ui, state);
        }
    });
}
