//! Pure scoring, completion and validation over methodology snapshots.
//!
//! Every operation borrows a snapshot and returns a new value; callers
//! replace their stored copy with the result. Criteria, levels and items are
//! identified by position, so reordering them invalidates stored selections.

pub mod completion;
pub mod scoring;
pub mod selection;
pub mod validation;

pub use completion::{is_complete, progress, Completion, Progress};
pub use scoring::{compute_auto_evaluation_score, compute_checklist_score, compute_rubric_score};
pub use selection::{
    clear_selections, select_auto_evaluation_level, select_rubric_level, toggle_checklist_item,
};
pub use validation::{
    structure_issues, validate_auto_evaluation, validate_checklist, validate_rubric,
    ValidationPolicy,
};
