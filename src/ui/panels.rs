use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – series toggles
// ---------------------------------------------------------------------------

/// Render the left panel listing every series with its colour.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Series");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for idx in 0..state.series.len() {
                let text = RichText::new(state.label(idx)).color(state.color_map.color_for(idx));
                let mut checked = state.visible[idx];
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle(idx);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary bar: title, counts, extrema and scaling toggle.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(&state.plot.title);

        ui.separator();

        ui.label(format!(
            "{} series, {} visible",
            state.series.len(),
            state.visible_indices().len()
        ));

        ui.separator();

        ui.label(format!(
            "min y = {:.3}, max y = {:.3}",
            state.extrema.min, state.extrema.max
        ));

        ui.separator();

        if ui
            .selectable_label(state.minmax_scaling, "Min-Max Scaling")
            .clicked()
        {
            state.minmax_scaling = !state.minmax_scaling;
        }
    });
}
