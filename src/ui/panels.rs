use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{value_label, FilterColumn};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    let dataset = match &state.session {
        Some(s) => s.dataset.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in FilterColumn::ALL {
                let all_values = column.values(&dataset);

                // Show count of selected / total in the header
                let n_selected = state.filters.get(column).len();
                let n_total = all_values.len();
                let header_text = format!("{}  ({n_selected}/{n_total})", column.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(column.label())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(column);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(column);
                            }
                        });

                        for value in all_values {
                            let mut checked = state.filters.get(column).contains(value);
                            if ui.checkbox(&mut checked, value_label(value)).changed() {
                                state.toggle_filter_value(column, value);
                            }
                        }
                    });
            }
        });
}

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
            if ui
                .add_enabled(state.session.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                // Errors are already recorded in `status_message`.
                let _ = state.reload();
                ui.close_menu();
            }
            if ui
                .add_enabled(state.view.is_some(), egui::Button::new("Export summary…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(s), Some(view)) = (&state.session, &state.view) {
            ui.label(format!(
                "{} records loaded, {} match filters",
                s.dataset.len(),
                view.indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open intern performance data")
        .add_filter("Supported files", &["csv", "tsv", "txt"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("TSV", &["tsv"])
        .pick_file();

    if let Some(path) = file {
        // Errors are already recorded in `status_message`.
        let _ = state.load(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export dashboard summary")
        .add_filter("JSON", &["json"])
        .set_file_name("dashboard_summary.json")
        .save_file();

    if let Some(path) = file {
        match state.export_summary(&path) {
            Ok(()) => {
                state.status_message = Some(format!("Summary written to {}", path.display()));
            }
            Err(e) => {
                log::warn!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
