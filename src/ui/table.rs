use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Vehicle details table (paged)
// ---------------------------------------------------------------------------

/// Render the paged vehicle table with its navigation controls.
pub fn vehicle_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Vehicle Details");

    if dataset.is_empty() {
        ui.label("No vehicles in the loaded file.");
        return;
    }

    let detail_columns = dataset.detail_columns.clone();
    let page_rows = state.page_records().to_vec();
    let first_serial = (state.current_page - 1) * state.page_size + 1;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::auto().resizable(true), 4 + detail_columns.len())
        .header(20.0, |mut header| {
            for title in ["#", "Make", "Year", "Electric Range (miles)", "Type"]
                .into_iter()
                .chain(detail_columns.iter().map(String::as_str))
            {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for (i, rec) in page_rows.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label((first_serial + i).to_string());
                    });
                    row.col(|ui| {
                        ui.label(&rec.manufacturer);
                    });
                    row.col(|ui| {
                        ui.label(rec.model_year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(rec.electric_range_miles.to_string());
                    });
                    row.col(|ui| {
                        ui.label(rec.vehicle_type.as_deref().unwrap_or(""));
                    });
                    for col in &detail_columns {
                        row.col(|ui| {
                            ui.label(rec.detail(col));
                        });
                    }
                });
            }
        });

    // ---- Navigation: clamped at both ends, disabled at the boundaries ----
    let total = state.total_pages();
    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(state.current_page > 1, egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.prev_page();
        }
        ui.label(format!("Page {} of {}", state.current_page, total));
        if ui
            .add_enabled(state.current_page < total, egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_page();
        }
    });
}
