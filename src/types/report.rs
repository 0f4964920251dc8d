use crate::engine::completion::{Completion, Progress};
use crate::types::methodology::MethodologyKind;
use serde::Serialize;

/// A structural problem found in a methodology document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: String,
    pub message: String,
    pub blocking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Issue {
    pub fn blocking(id: &str, message: impl Into<String>, location: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            message: message.into(),
            blocking: true,
            location,
        }
    }

    pub fn warning(id: &str, message: impl Into<String>, location: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            message: message.into(),
            blocking: false,
            location,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub path: String,
    pub title: String,
    pub kind: MethodologyKind,
    pub score: f64,
    pub completion: Completion,
    pub progress: Progress,
    pub passed: bool,
    pub issues: Vec<Issue>,
    pub generated_at: String,
}

impl EvaluationReport {
    pub fn has_blocking(&self) -> bool {
        self.issues.iter().any(|issue| issue.blocking)
    }

    /// Incomplete evaluations and non-blocking issues both warrant a warning.
    pub fn has_warnings(&self) -> bool {
        self.completion.blocks_submission() || !self.issues.is_empty()
    }
}
