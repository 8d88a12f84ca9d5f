use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{InternDataset, InternRecord};

// ---------------------------------------------------------------------------
// Filter predicate: which categorical values are accepted per column
// ---------------------------------------------------------------------------

/// Which filter column a widget or action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Department,
    Status,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 2] = [FilterColumn::Department, FilterColumn::Status];

    /// Label shown in the side panel.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Department => "Department",
            FilterColumn::Status => "Status",
        }
    }

    /// Distinct values of this column in the dataset.
    pub fn values(self, dataset: &InternDataset) -> &BTreeSet<String> {
        match self {
            FilterColumn::Department => &dataset.departments,
            FilterColumn::Status => &dataset.statuses,
        }
    }
}

/// Accepted values for both filter columns.
///
/// An empty set accepts nothing: deselecting every department hides every
/// row, it does not switch the filter off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub departments: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
}

impl FilterSelection {
    /// Nothing selected: every row is filtered out.
    pub fn none() -> Self {
        FilterSelection {
            departments: BTreeSet::new(),
            statuses: BTreeSet::new(),
        }
    }

    /// Every distinct value selected (i.e., show everything).
    pub fn all(dataset: &InternDataset) -> Self {
        FilterSelection {
            departments: dataset.departments.clone(),
            statuses: dataset.statuses.clone(),
        }
    }

    pub fn get(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::Department => &self.departments,
            FilterColumn::Status => &self.statuses,
        }
    }

    pub fn get_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Department => &mut self.departments,
            FilterColumn::Status => &mut self.statuses,
        }
    }

    /// Both predicates must hold.
    pub fn accepts(&self, record: &InternRecord) -> bool {
        self.departments.contains(&record.department)
            && self.statuses.contains(&record.completion_status)
    }
}

/// Checkbox label for a filter value; a blank cell gets a visible name.
pub fn value_label(value: &str) -> &str {
    if value.is_empty() {
        "(blank)"
    } else {
        value
    }
}

/// Return indices (in file order) of records passing the selection.
pub fn filtered_indices(dataset: &InternDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.accepts(r))
        .map(|(i, _)| i)
        .collect()
}
