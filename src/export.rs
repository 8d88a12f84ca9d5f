use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::filter::FilterSelection;
use crate::data::metrics::{DashboardView, GroupedMetric, ScalarMetrics};
use crate::data::model::InternDataset;

// ---------------------------------------------------------------------------
// Summary export
// ---------------------------------------------------------------------------

/// Snapshot of what the dashboard currently shows. Undefined metrics
/// serialise as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary<'a> {
    pub total_records: usize,
    pub matching_records: usize,
    pub selection: &'a FilterSelection,
    pub metrics: ScalarMetrics,
    pub quality_by_department: &'a GroupedMetric,
    pub feedback_by_department: &'a GroupedMetric,
}

impl<'a> DashboardSummary<'a> {
    pub fn new(
        dataset: &InternDataset,
        selection: &'a FilterSelection,
        view: &'a DashboardView,
    ) -> Self {
        DashboardSummary {
            total_records: dataset.len(),
            matching_records: view.indices.len(),
            selection,
            metrics: view.metrics,
            quality_by_department: &view.quality_by_department,
            feedback_by_department: &view.feedback_by_department,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialising dashboard summary")
    }
}

/// Write the summary as pretty JSON.
pub fn write_summary(path: &Path, summary: &DashboardSummary<'_>) -> Result<()> {
    let json = summary.to_json()?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
