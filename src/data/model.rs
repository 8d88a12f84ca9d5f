use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Column names as they appear in the CSV header
// ---------------------------------------------------------------------------

pub const DEPARTMENT: &str = "Department";
pub const COMPLETION_STATUS: &str = "Completion_Status";
pub const TASK_COMPLETION_DAYS: &str = "Task_Completion_Days";
pub const PROJECT_QUALITY_SCORE: &str = "Project_Quality_Score";
pub const MENTOR_FEEDBACK_SCORE: &str = "Mentor_Feedback_Score";
pub const DATE_OF_ASSIGNMENT: &str = "Date of Assignment";
pub const DATE_OF_COMPLETION: &str = "Date of Completion";

/// Every column the loader insists on.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    DEPARTMENT,
    COMPLETION_STATUS,
    TASK_COMPLETION_DAYS,
    PROJECT_QUALITY_SCORE,
    MENTOR_FEEDBACK_SCORE,
    DATE_OF_ASSIGNMENT,
    DATE_OF_COMPLETION,
];

// ---------------------------------------------------------------------------
// InternRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single intern performance record.
///
/// Numeric columns are optional: an empty cell (or a literal `NaN`/`inf`) is
/// a missing value and is skipped by every mean computed over that column.
/// An empty `department` is missing too: the row still passes the filters
/// (the empty string is a filter value of its own) but joins no department
/// group.
#[derive(Debug, Clone, PartialEq)]
pub struct InternRecord {
    pub department: String,
    pub completion_status: String,
    pub task_completion_days: Option<f64>,
    pub project_quality_score: Option<f64>,
    pub mentor_feedback_score: Option<f64>,
    pub date_of_assignment: Option<NaiveDate>,
    pub date_of_completion: Option<NaiveDate>,
}

impl InternRecord {
    /// The department this row is grouped under, `None` when the cell was
    /// blank.
    pub fn department_group(&self) -> Option<&str> {
        (!self.department.is_empty()).then_some(self.department.as_str())
    }
}

/// Numeric columns that can be averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    TaskCompletionDays,
    ProjectQualityScore,
    MentorFeedbackScore,
}

impl NumericColumn {
    pub fn value(self, record: &InternRecord) -> Option<f64> {
        match self {
            NumericColumn::TaskCompletionDays => record.task_completion_days,
            NumericColumn::ProjectQualityScore => record.project_quality_score,
            NumericColumn::MentorFeedbackScore => record.mentor_feedback_score,
        }
    }
}

// ---------------------------------------------------------------------------
// InternDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values of both filter columns.
#[derive(Debug, Clone, Default)]
pub struct InternDataset {
    /// All records, in file order.
    pub records: Vec<InternRecord>,
    /// Sorted distinct `Department` values.
    pub departments: BTreeSet<String>,
    /// Sorted distinct `Completion_Status` values.
    pub statuses: BTreeSet<String>,
}

impl InternDataset {
    /// Build the filter-column indices from the loaded records.
    pub fn from_records(records: Vec<InternRecord>) -> Self {
        let departments = records.iter().map(|r| r.department.clone()).collect();
        let statuses = records
            .iter()
            .map(|r| r.completion_status.clone())
            .collect();
        InternDataset {
            records,
            departments,
            statuses,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
