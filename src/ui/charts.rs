use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top manufacturers (ranked bar chart)
// ---------------------------------------------------------------------------

/// Render the top-manufacturers bar chart, one coloured series per make so
/// the legend lists them in rank order.
pub fn top_makes_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top 10 Vehicle Makes");

    Plot::new("top_makes")
        .legend(Legend::default())
        .y_axis_label("Vehicles")
        .show_axes([false, true])
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .height(300.0)
        .show(ui, |plot_ui| {
            for (i, entry) in state.make_distribution.iter().enumerate() {
                let bar = Bar::new(i as f64, entry.count as f64)
                    .name(&entry.category)
                    .width(0.7);
                let chart = BarChart::new(vec![bar])
                    .name(&entry.category)
                    .color(state.make_colors.color_for(&entry.category));
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Vehicle type distribution
// ---------------------------------------------------------------------------

/// Render the vehicle-type breakdown. Legend entries carry the percentage
/// of the full population; vehicles with no recorded type are counted in
/// that denominator, so the shares need not add up to 100%.
pub fn type_distribution_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Vehicle Type Distribution");

    Plot::new("vehicle_types")
        .legend(Legend::default())
        .y_axis_label("Vehicles")
        .show_axes([false, true])
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .height(300.0)
        .show(ui, |plot_ui| {
            for (i, entry) in state.type_distribution.iter().enumerate() {
                let label = match entry.percentage {
                    Some(pct) => format!("{} {pct:.1}%", entry.category),
                    None => entry.category.clone(),
                };
                let bar = Bar::new(i as f64, entry.count as f64)
                    .name(&label)
                    .width(0.7);
                let chart = BarChart::new(vec![bar])
                    .name(&label)
                    .color(state.type_colors.color_for(&entry.category));
                plot_ui.bar_chart(chart);
            }
        });
}
