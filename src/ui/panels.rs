use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::VehicleDataset;
use crate::data::normalize::normalize;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let loaded = state.dataset.is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} vehicles · page {} of {}",
                ds.len(),
                state.current_page,
                state.total_pages()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Summary cards
// ---------------------------------------------------------------------------

/// Render the row of summary-statistic cards.
pub fn summary_cards(ui: &mut Ui, state: &AppState) {
    let s = &state.summary;
    let cards = [
        ("Total Vehicles", s.total_vehicles.to_string()),
        (
            "Average Electric Range",
            format!("{:.2} miles", s.average_electric_range),
        ),
        (
            "Total Electric Range",
            format!("{:.2} miles", s.total_electric_range),
        ),
        (
            "Average Vehicle Age",
            format!("{:.0} years", s.average_vehicle_age),
        ),
        ("Most Common Make", s.most_common_manufacturer.clone()),
    ];

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (title, value) in cards {
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(title).small().strong());
                    ui.label(RichText::new(value).heading());
                });
            });
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open vehicle population data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match loader::load_file(&path) {
            Ok(rows) => {
                let dataset = VehicleDataset::from_records(normalize(&rows));
                log::info!(
                    "Loaded {} raw rows, {} after normalization",
                    rows.len(),
                    dataset.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}

/// Save the derived dashboard products (summary + distributions) as JSON.
pub fn export_summary_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export dashboard summary")
        .set_file_name("vehicle_summary.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        let payload = serde_json::json!({
            "summary": state.summary,
            "topMakes": state.make_distribution,
            "vehicleTypes": state.type_distribution,
        });
        match serde_json::to_string_pretty(&payload)
            .map_err(anyhow::Error::from)
            .and_then(|text| std::fs::write(&path, text).map_err(anyhow::Error::from))
        {
            Ok(()) => {
                log::info!("Exported summary to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export summary: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
