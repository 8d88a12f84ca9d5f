use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::data::filter::{FilterColumn, FilterSelection};
use crate::data::loader::{load_file, LoadError};
use crate::data::metrics::{compute, DashboardView};
use crate::data::model::InternDataset;
use crate::export::{write_summary, DashboardSummary};

// ---------------------------------------------------------------------------
// Session: the loaded table for this window
// ---------------------------------------------------------------------------

/// A dataset together with the file it came from. The table is shared
/// read-only; nothing ever mutates it after loading.
#[derive(Debug, Clone)]
pub struct Session {
    pub path: PathBuf,
    pub dataset: Arc<InternDataset>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub session: Option<Session>,

    /// Accepted values per filter column.
    pub filters: FilterSelection,

    /// Result of the last `compute` (cached until the filters change).
    pub view: Option<DashboardView>,

    /// Histogram bucket count.
    pub bins: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(bins: usize) -> Self {
        Self {
            session: None,
            filters: FilterSelection::none(),
            view: None,
            bins,
            status_message: None,
        }
    }

    /// Load `path`, replacing the current session on success. On failure
    /// the previous session is dropped and the error is kept for display.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} ({} departments, {} statuses)",
                    dataset.len(),
                    path.display(),
                    dataset.departments.len(),
                    dataset.statuses.len()
                );
                if dataset.is_empty() {
                    log::warn!("{} has a header but no records", path.display());
                }
                self.set_dataset(path.to_path_buf(), dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.session = None;
                self.view = None;
                self.filters = FilterSelection::none();
                self.status_message = Some(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// Re-read the current file.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        match self.session.as_ref().map(|s| s.path.clone()) {
            Some(path) => self.load(&path),
            None => Ok(()),
        }
    }

    /// Ingest a newly loaded dataset and select everything.
    pub fn set_dataset(&mut self, path: PathBuf, dataset: InternDataset) {
        self.filters = FilterSelection::all(&dataset);
        self.session = Some(Session {
            path,
            dataset: Arc::new(dataset),
        });
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the view after a filter change.
    pub fn refilter(&mut self) {
        self.view = self.session.as_ref().map(|s| {
            let view = compute(&s.dataset, &self.filters, self.bins);
            log::debug!(
                "{} of {} records match the filters",
                view.indices.len(),
                s.dataset.len()
            );
            view
        });
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &str) {
        let selected = self.filters.get_mut(column);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        if let Some(s) = &self.session {
            *self.filters.get_mut(column) = column.values(&s.dataset).clone();
            self.refilter();
        }
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        self.filters.get_mut(column).clear();
        self.refilter();
    }

    /// Write the current summary to `path`.
    pub fn export_summary(&self, path: &Path) -> Result<()> {
        let (Some(session), Some(view)) = (&self.session, &self.view) else {
            anyhow::bail!("no dataset loaded");
        };
        let summary = DashboardSummary::new(&session.dataset, &self.filters, view);
        write_summary(path, &summary)?;
        log::info!("Exported summary to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::histogram::DEFAULT_BINS;
    use crate::data::model::fixtures::sample;

    fn loaded() -> AppState {
        let mut state = AppState::new(DEFAULT_BINS);
        state.set_dataset(PathBuf::from("sample.csv"), sample());
        state
    }

    fn matching(state: &AppState) -> usize {
        state.view.as_ref().map_or(0, |v| v.indices.len())
    }

    #[test]
    fn new_dataset_selects_everything() {
        let state = loaded();
        assert_eq!(matching(&state), 3);
        assert_eq!(state.filters.departments.len(), 2);
        assert_eq!(state.filters.statuses.len(), 2);
    }

    #[test]
    fn toggling_a_value_refilters() {
        let mut state = loaded();
        state.toggle_filter_value(FilterColumn::Status, "Pending");
        assert_eq!(matching(&state), 2);
        state.toggle_filter_value(FilterColumn::Status, "Pending");
        assert_eq!(matching(&state), 3);
    }

    #[test]
    fn none_then_all_restores_rows() {
        let mut state = loaded();
        state.select_none(FilterColumn::Department);
        assert_eq!(matching(&state), 0);
        assert!(state.view.as_ref().unwrap().metrics.avg_quality_score.is_none());
        state.select_all(FilterColumn::Department);
        assert_eq!(matching(&state), 3);
    }

    #[test]
    fn failed_load_clears_session_and_reports() {
        let mut state = loaded();
        let dir = tempfile::tempdir().unwrap();
        let err = state.load(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(state.session.is_none());
        assert!(state.view.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn reload_picks_up_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interns.csv");
        let header = "Department,Completion_Status,Task_Completion_Days,Project_Quality_Score,\
Mentor_Feedback_Score,Date of Assignment,Date of Completion";
        std::fs::write(&path, format!("{header}\nA,Done,1,2,3,2024-01-01,2024-01-02\n")).unwrap();

        let mut state = AppState::new(DEFAULT_BINS);
        state.load(&path).unwrap();
        assert_eq!(matching(&state), 1);

        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "B,Late,4,5,6,2024-01-03,2024-01-09").unwrap();
        drop(file);

        state.reload().unwrap();
        assert_eq!(matching(&state), 2);
        assert_eq!(state.filters.departments.len(), 2);
    }

    #[test]
    fn export_requires_a_dataset() {
        let state = AppState::new(DEFAULT_BINS);
        let dir = tempfile::tempdir().unwrap();
        assert!(state.export_summary(&dir.path().join("s.json")).is_err());

        let state = loaded();
        let path = dir.path().join("s.json");
        state.export_summary(&path).unwrap();
        assert!(path.exists());
    }
}
