use std::collections::BTreeMap;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::VehicleRecord;
use crate::state::AppState;

const CARD_WIDTH: f32 = 260.0;

// ---------------------------------------------------------------------------
// Card grid (central panel)
// ---------------------------------------------------------------------------

/// Render the result grid in the central panel.
pub fn card_grid(ui: &mut Ui, state: &mut AppState) {
    let Some(catalog) = &state.catalog else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.spinner();
        });
        return;
    };

    if state.results.is_empty() {
        let hint = if catalog.is_empty() {
            "No listings were loaded."
        } else {
            "Try adjusting your filters."
        };
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(40.0);
            ui.heading("No cars found");
            ui.label(hint);
        });
        return;
    }

    let columns = ((ui.available_width() / (CARD_WIDTH + 12.0)) as usize).max(1);
    let mut open_detail = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("card_grid")
                .spacing([12.0, 12.0])
                .show(ui, |ui: &mut Ui| {
                    for (n, record) in state.results.iter().enumerate() {
                        let badge = state.fuel_colors.color_for(&record.basic.recommended_fuel);
                        if car_card(ui, record, badge) {
                            open_detail = Some(record.clone());
                        }
                        if (n + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if open_detail.is_some() {
        state.detail = open_detail;
    }
}

/// One card. Returns true when "Details" was clicked.
fn car_card(ui: &mut Ui, record: &VehicleRecord, badge: Color32) -> bool {
    let basic = &record.basic;
    let mut clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        ui.label(RichText::new(record.title()).strong().size(16.0));
        if !basic.trim.is_empty() {
            ui.label(RichText::new(&basic.trim).weak());
        }
        ui.add_space(4.0);

        ui.horizontal(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!(" {} ", basic.recommended_fuel))
                    .color(Color32::WHITE)
                    .background_color(badge),
            );
            ui.label(&basic.drive_type);
        });
        ui.label(&basic.transmission);

        ui.horizontal(|ui: &mut Ui| {
            if let Some(hp) = record.horsepower() {
                ui.label(hp);
            }
            if let Some(seats) = record.seating() {
                ui.label(format!("{seats} seats"));
            }
        });

        ui.add_space(4.0);
        clicked = ui.button("Details").clicked();
    });

    clicked
}

// ---------------------------------------------------------------------------
// Detail window
// ---------------------------------------------------------------------------

/// Floating window with every attribute group of the selected record.
pub fn detail_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(record) = &state.detail else {
        return;
    };

    let mut open = true;
    egui::Window::new(record.to_string())
        .id(egui::Id::new("car_detail"))
        .open(&mut open)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                attribute_table(ui, "Specs & dimensions", &record.specs_and_dimension);
                attribute_table(ui, "Powertrain", &record.powertrain);
                attribute_table(ui, "Off-road capability", &record.offroad_capability);

                for (group, items) in record.top_features.groups() {
                    ui.add_space(6.0);
                    ui.strong(group);
                    for item in items {
                        ui.label(format!("• {item}"));
                    }
                }
            });
        });

    if !open {
        state.detail = None;
    }
}

fn attribute_table(ui: &mut Ui, title: &str, values: &BTreeMap<String, String>) {
    if values.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.strong(title);
    ui.push_id(title, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .body(|mut body| {
                for (key, value) in values {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(key);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(value);
                        });
                    });
                }
            });
    });
}
