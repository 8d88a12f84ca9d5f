use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{
    InternDataset, InternRecord, COMPLETION_STATUS, DATE_OF_ASSIGNMENT, DATE_OF_COMPLETION,
    DEPARTMENT, MENTOR_FEEDBACK_SCORE, PROJECT_QUALITY_SCORE, TASK_COMPLETION_DAYS,
};

const ROW_HEIGHT: f32 = 18.0;

const HEADERS: [&str; 7] = [
    DEPARTMENT,
    COMPLETION_STATUS,
    TASK_COMPLETION_DAYS,
    PROJECT_QUALITY_SCORE,
    MENTOR_FEEDBACK_SCORE,
    DATE_OF_ASSIGNMENT,
    DATE_OF_COMPLETION,
];

// ---------------------------------------------------------------------------
// Filtered rows preview
// ---------------------------------------------------------------------------

/// Scrollable table of the rows that passed the filters.
pub fn filtered_rows(ui: &mut Ui, dataset: &InternDataset, indices: &[usize]) {
    egui::CollapsingHeader::new(format!("Filtered records ({})", indices.len()))
        .id_salt("filtered_records")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(320.0)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().at_least(80.0), HEADERS.len())
                .header(ROW_HEIGHT + 4.0, |mut header| {
                    for name in HEADERS {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                        let record = &dataset.records[indices[row.index()]];
                        for cell in row_cells(record) {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}

/// Display text for each column of a record; missing values are blank.
fn row_cells(record: &InternRecord) -> [String; 7] {
    let num = |v: Option<f64>| v.map(|v| format!("{v}")).unwrap_or_default();
    let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
    [
        record.department.clone(),
        record.completion_status.clone(),
        num(record.task_completion_days),
        num(record.project_quality_score),
        num(record.mentor_feedback_score),
        date(record.date_of_assignment),
        date(record.date_of_completion),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;

    #[test]
    fn cells_follow_header_order() {
        let mut r = record("DeptA", "Done", None, 8.5, 9.0);
        r.date_of_completion = None;
        let cells = row_cells(&r);
        assert_eq!(cells.len(), HEADERS.len());
        assert_eq!(
            cells,
            [
                "DeptA".to_string(),
                "Done".to_string(),
                String::new(),
                "8.5".to_string(),
                "9".to_string(),
                "2024-01-01".to_string(),
                String::new(),
            ]
        );
    }
}
