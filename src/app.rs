use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EvDashboardApp {
    pub state: AppState,
}

impl Default for EvDashboardApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for EvDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a vehicle population file  (File → Open…)");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading("Electric Vehicle Dashboard");
                    ui.add_space(8.0);

                    panels::summary_cards(ui, &self.state);
                    ui.add_space(12.0);

                    ui.columns(2, |cols: &mut [egui::Ui]| {
                        charts::top_makes_chart(&mut cols[0], &self.state);
                        charts::type_distribution_chart(&mut cols[1], &self.state);
                    });
                    ui.add_space(12.0);

                    table::vehicle_table(ui, &mut self.state);
                });
        });
    }
}
