use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::Config;
use crate::data::filter::TransmissionClass;
use crate::data::provider::{self, DataSource};
use crate::state::{AppState, DRIVE_OPTIONS};

// ---------------------------------------------------------------------------
// Left side panel – search and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Find a car");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("Loading listings…");
        return;
    };

    // Clone what we need so we can mutate state inside the panel.
    let makes: Vec<String> = catalog.makes.iter().cloned().collect();
    let years: Vec<String> = catalog.years.iter().rev().map(|y| y.to_string()).collect();
    let fuels: Vec<String> = catalog.fuels.iter().cloned().collect();
    let drives: Vec<String> = DRIVE_OPTIONS.iter().map(|d| d.to_string()).collect();
    let transmissions: Vec<String> = TransmissionClass::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Search box ----
            ui.strong("Search");
            ui.horizontal(|ui: &mut Ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.search_input)
                        .hint_text("Make or model")
                        .desired_width(ui.available_width() - 60.0),
                );
                let entered =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Search").clicked() || entered {
                    state.submit_search();
                }
            });
            ui.separator();

            // ---- Facet dropdowns ----
            changed |= facet_combo(ui, "Make", &mut state.make, &makes);
            changed |= facet_combo(ui, "Year", &mut state.year, &years);
            changed |= facet_combo(ui, "Drive", &mut state.drive, &drives);
            changed |= facet_combo(ui, "Transmission", &mut state.transmission, &transmissions);
            changed |= facet_combo(ui, "Fuel", &mut state.fuel, &fuels);

            ui.add_space(6.0);
            if ui.button("Clear filters").clicked() {
                state.clear_filters();
            }
            ui.separator();

            // ---- Fuel legend ----
            ui.strong("Fuel");
            for (label, color) in state.fuel_colors.legend_entries() {
                ui.label(RichText::new(format!("● {label}")).color(color));
            }
        });

    // A dropdown change re-reads the search box, like pressing Search.
    if changed {
        state.submit_search();
    }
}

/// Labelled combo box with an "Any" entry mapped to the empty string.
/// Returns true when the selection changed.
fn facet_combo(ui: &mut Ui, label: &str, selected: &mut String, options: &[String]) -> bool {
    let before = selected.clone();
    ui.label(label);
    let shown = if selected.is_empty() { "Any" } else { selected.as_str() }.to_string();
    egui::ComboBox::from_id_salt(label)
        .selected_text(shown)
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(selected, String::new(), "Any");
            for option in options {
                ui.selectable_value(selected, option.clone(), option.as_str());
            }
        });
    *selected != before
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &Config) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload reference catalog").clicked() {
                state.start_load(DataSource::Reference, config.latency());
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading() {
            ui.spinner();
            ui.label("Fetching listings…");
        } else if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} cars loaded, {} shown",
                catalog.len(),
                state.results.len()
            ));
            if let Some(source) = &state.source {
                ui.label(RichText::new(format!("({source})")).weak());
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open car listings")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        // A picked file is local, so skip the artificial delay.
        state.finish_load(provider::load_now(DataSource::File(path)));
    }
}
