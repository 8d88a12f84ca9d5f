use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::{filtered_indices, FilterSelection};
use super::histogram::Histogram;
use super::model::{InternDataset, InternRecord, NumericColumn};

// ---------------------------------------------------------------------------
// Aggregates over the filtered subset
// ---------------------------------------------------------------------------

/// The three headline averages. `None` means no non-null value was left
/// after filtering, which is not the same thing as an average of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScalarMetrics {
    pub avg_completion_days: Option<f64>,
    pub avg_quality_score: Option<f64>,
    pub avg_feedback_score: Option<f64>,
}

/// Department → mean of one column within that department.
pub type GroupedMetric = BTreeMap<String, f64>;

/// Everything the dashboard renders for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Indices into `InternDataset::records` that passed the filters.
    pub indices: Vec<usize>,
    pub metrics: ScalarMetrics,
    pub quality_by_department: GroupedMetric,
    pub feedback_by_department: GroupedMetric,
    pub completion_histogram: Option<Histogram>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Filter the dataset and derive every metric and chart series from the
/// surviving rows. Pure: the dataset is only read.
pub fn compute(dataset: &InternDataset, selection: &FilterSelection, bins: usize) -> DashboardView {
    let indices = filtered_indices(dataset, selection);
    let rows: Vec<&InternRecord> = indices.iter().map(|&i| &dataset.records[i]).collect();

    let metrics = ScalarMetrics {
        avg_completion_days: column_mean(&rows, NumericColumn::TaskCompletionDays),
        avg_quality_score: column_mean(&rows, NumericColumn::ProjectQualityScore),
        avg_feedback_score: column_mean(&rows, NumericColumn::MentorFeedbackScore),
    };

    let days: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.task_completion_days)
        .collect();

    DashboardView {
        metrics,
        quality_by_department: mean_by_department(&rows, NumericColumn::ProjectQualityScore),
        feedback_by_department: mean_by_department(&rows, NumericColumn::MentorFeedbackScore),
        completion_histogram: Histogram::from_values(&days, bins),
        indices,
    }
}

/// Arithmetic mean of the non-null values, `None` if there are none.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

fn column_mean(rows: &[&InternRecord], column: NumericColumn) -> Option<f64> {
    mean(rows.iter().filter_map(|r| column.value(r)))
}

/// Per-department mean. Rows with a blank department and departments with
/// only null values for the column are left out, mirroring a group-by that
/// skips missing keys and values.
fn mean_by_department(rows: &[&InternRecord], column: NumericColumn) -> GroupedMetric {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in rows {
        if let (Some(dept), Some(v)) = (r.department_group(), column.value(r)) {
            let entry = sums.entry(dept).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(dept, (sum, count))| (dept.to_string(), sum / count as f64))
        .collect()
}

/// Two-decimal rendering for a metric card; undefined shows as "No data".
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "No data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::histogram::DEFAULT_BINS;
    use crate::data::loader::load_delimited;
    use crate::data::model::fixtures::{record, sample};

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn grouped(pairs: &[(&str, f64)]) -> GroupedMetric {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn done_only_example() {
        let ds = sample();
        let selection = FilterSelection {
            departments: ds.departments.clone(),
            statuses: set(&["Done"]),
        };
        let view = compute(&ds, &selection, DEFAULT_BINS);

        assert_eq!(view.indices, vec![0, 2]);
        assert_eq!(view.metrics.avg_completion_days, Some(7.5));
        assert_eq!(view.metrics.avg_quality_score, Some(7.0));
        assert_eq!(view.metrics.avg_feedback_score, Some(8.0));
        assert_eq!(
            view.quality_by_department,
            grouped(&[("DeptA", 8.0), ("DeptB", 6.0)])
        );
        assert_eq!(
            view.feedback_by_department,
            grouped(&[("DeptA", 9.0), ("DeptB", 7.0)])
        );
        assert_eq!(view.completion_histogram.map(|h| h.total()), Some(2));
    }

    #[test]
    fn full_selection_covers_whole_table() {
        let ds = sample();
        let view = compute(&ds, &FilterSelection::all(&ds), DEFAULT_BINS);
        assert_eq!(view.indices.len(), ds.len());
        assert_eq!(view.metrics.avg_completion_days, Some(6.0));
        assert_eq!(
            view.quality_by_department,
            grouped(&[("DeptA", 7.5), ("DeptB", 6.0)])
        );
    }

    #[test]
    fn empty_subset_has_undefined_metrics() {
        let ds = sample();
        let selection = FilterSelection {
            departments: set(&["Nowhere"]),
            statuses: ds.statuses.clone(),
        };
        let view = compute(&ds, &selection, DEFAULT_BINS);

        assert!(view.is_empty());
        assert_eq!(view.metrics, ScalarMetrics::default());
        assert!(view.metrics.avg_completion_days.is_none());
        assert!(view.quality_by_department.is_empty());
        assert!(view.feedback_by_department.is_empty());
        assert_eq!(view.completion_histogram, None);
    }

    #[test]
    fn nulls_are_skipped_per_column() {
        let ds = InternDataset::from_records(vec![
            record("DeptA", "Done", None, 8.0, 9.0),
            record("DeptA", "Done", Some(4.0), 6.0, 5.0),
            record("DeptB", "Done", None, 3.0, 4.0),
        ]);
        let view = compute(&ds, &FilterSelection::all(&ds), DEFAULT_BINS);

        // Only one non-null completion value, but all three scores count.
        assert_eq!(view.metrics.avg_completion_days, Some(4.0));
        assert_eq!(view.metrics.avg_quality_score, Some(17.0 / 3.0));
        assert_eq!(view.completion_histogram.map(|h| h.total()), Some(1));
    }

    #[test]
    fn all_null_column_is_undefined_not_zero() {
        let ds = InternDataset::from_records(vec![
            record("DeptA", "Done", None, 8.0, 9.0),
            record("DeptB", "Done", None, 6.0, 7.0),
        ]);
        let view = compute(&ds, &FilterSelection::all(&ds), DEFAULT_BINS);
        assert_eq!(view.metrics.avg_completion_days, None);
        assert_eq!(view.completion_histogram, None);
        assert_eq!(view.metrics.avg_quality_score, Some(7.0));
    }

    #[test]
    fn department_with_only_nulls_is_omitted() {
        let mut missing = record("DeptB", "Done", Some(1.0), 0.0, 0.0);
        missing.project_quality_score = None;
        let ds = InternDataset::from_records(vec![
            record("DeptA", "Done", Some(1.0), 8.0, 9.0),
            missing,
        ]);
        let view = compute(&ds, &FilterSelection::all(&ds), DEFAULT_BINS);
        assert_eq!(view.quality_by_department, grouped(&[("DeptA", 8.0)]));
        assert_eq!(
            view.feedback_by_department,
            grouped(&[("DeptA", 9.0), ("DeptB", 0.0)])
        );
    }

    #[test]
    fn blank_department_counts_in_means_but_forms_no_group() {
        let text = "Department,Completion_Status,Task_Completion_Days,Project_Quality_Score,\
Mentor_Feedback_Score,Date of Assignment,Date of Completion\n\
DeptA,Done,5,8,9,2024-01-01,2024-01-06\n\
,Done,3,2,2,2024-01-02,2024-01-05\n";
        let ds = load_delimited(text.as_bytes(), b',', Path::new("blank.csv")).unwrap();
        assert_eq!(ds.departments, set(&["", "DeptA"]));

        let view = compute(&ds, &FilterSelection::all(&ds), DEFAULT_BINS);
        assert_eq!(view.indices, vec![0, 1]);
        assert_eq!(view.metrics.avg_completion_days, Some(4.0));
        assert_eq!(view.metrics.avg_quality_score, Some(5.0));
        assert_eq!(view.quality_by_department, grouped(&[("DeptA", 8.0)]));
        assert_eq!(view.feedback_by_department, grouped(&[("DeptA", 9.0)]));

        let mut only_blank = FilterSelection::all(&ds);
        only_blank.departments = set(&[""]);
        let view = compute(&ds, &only_blank, DEFAULT_BINS);
        assert_eq!(view.indices, vec![1]);
        assert_eq!(view.metrics.avg_feedback_score, Some(2.0));
        assert!(view.quality_by_department.is_empty());
    }

    #[test]
    fn compute_leaves_dataset_untouched() {
        let ds = sample();
        let before = ds.records.clone();
        let _ = compute(&ds, &FilterSelection::none(), DEFAULT_BINS);
        assert_eq!(ds.records, before);
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty::<f64>()), None);
        assert_eq!(mean([1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn metrics_format_to_two_decimals() {
        assert_eq!(format_metric(Some(7.5)), "7.50");
        assert_eq!(format_metric(Some(2.0 / 3.0)), "0.67");
        assert_eq!(format_metric(None), "No data");
    }
}
