use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::ChartKind;
use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct InternDashboardApp {
    pub state: AppState,
}

impl InternDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for InternDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let (Some(session), Some(view)) = (&state.session, &state.view) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view intern performance  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Intern Performance Evaluation Dashboard");
            if view.is_empty() {
                ui.label(RichText::new("No records match the current filters.").weak());
            }
            ui.add_space(8.0);

            charts::metric_cards(ui, &view.metrics);
            ui.add_space(12.0);

            charts::completion_histogram(ui, view.completion_histogram.as_ref());
            ui.add_space(12.0);

            charts::department_bars(
                ui,
                "quality_by_department",
                "Average Project Quality by Department",
                "Project_Quality_Score",
                ChartKind::QualityByDepartment,
                &view.quality_by_department,
            );
            ui.add_space(12.0);

            charts::department_bars(
                ui,
                "feedback_by_department",
                "Average Mentor Feedback by Department",
                "Mentor_Feedback_Score",
                ChartKind::FeedbackByDepartment,
                &view.feedback_by_department,
            );
            ui.add_space(12.0);

            table::filtered_rows(ui, &session.dataset, &view.indices);
        });
}
