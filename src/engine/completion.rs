use crate::types::methodology::{
    AutoEvaluationCriterion, AutoEvaluationMethodology, Methodology, RubricCriterion,
    RubricMethodology,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    Complete,
    Incomplete,
    /// Checklists leave submission gating to the caller.
    NotTracked,
}

impl Completion {
    fn from_flag(complete: bool) -> Self {
        if complete {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }

    /// Whether this state should keep a submit action disabled.
    pub fn blocks_submission(self) -> bool {
        matches!(self, Self::Incomplete)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::NotTracked => "not tracked",
        };
        f.write_str(label)
    }
}

/// Evaluated vs. total units: criteria for rubrics and auto-evaluations,
/// checked items for checklists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub evaluated: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (100.0 * self.evaluated as f64 / self.total as f64).round() as u32
    }
}

// Criteria without levels cannot be evaluated, so they are left out of
// completion and progress. Validation reports them as blocking instead.
fn evaluable_rubric_criteria(
    methodology: &RubricMethodology,
) -> impl Iterator<Item = &RubricCriterion> {
    methodology
        .criteria
        .iter()
        .filter(|criterion| !criterion.levels.is_empty())
}

fn evaluable_auto_evaluation_criteria(
    methodology: &AutoEvaluationMethodology,
) -> impl Iterator<Item = &AutoEvaluationCriterion> {
    methodology
        .dimensions
        .iter()
        .flat_map(|dimension| dimension.criteria.iter())
        .filter(|criterion| !criterion.levels.is_empty())
}

pub fn is_rubric_complete(methodology: &RubricMethodology) -> bool {
    evaluable_rubric_criteria(methodology).all(|criterion| criterion.selected_level().is_some())
}

pub fn is_auto_evaluation_complete(methodology: &AutoEvaluationMethodology) -> bool {
    evaluable_auto_evaluation_criteria(methodology)
        .all(|criterion| criterion.selected_level().is_some())
}

pub fn is_complete(methodology: &Methodology) -> Completion {
    match methodology {
        Methodology::Rubric(rubric) => Completion::from_flag(is_rubric_complete(rubric)),
        Methodology::Checklist(_) => Completion::NotTracked,
        Methodology::AutoEvaluation(auto) => {
            Completion::from_flag(is_auto_evaluation_complete(auto))
        }
    }
}

pub fn progress(methodology: &Methodology) -> Progress {
    match methodology {
        Methodology::Rubric(rubric) => Progress {
            evaluated: evaluable_rubric_criteria(rubric)
                .filter(|criterion| criterion.selected_level().is_some())
                .count(),
            total: evaluable_rubric_criteria(rubric).count(),
        },
        Methodology::Checklist(checklist) => Progress {
            evaluated: checklist.items.iter().filter(|item| item.checked).count(),
            total: checklist.items.len(),
        },
        Methodology::AutoEvaluation(auto) => Progress {
            evaluated: evaluable_auto_evaluation_criteria(auto)
                .filter(|criterion| criterion.selected_level().is_some())
                .count(),
            total: evaluable_auto_evaluation_criteria(auto).count(),
        },
    }
}

impl Methodology {
    pub fn completion(&self) -> Completion {
        is_complete(self)
    }
}
