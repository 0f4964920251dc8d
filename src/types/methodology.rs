use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Backend fields this crate does not model. They are carried through
/// untouched so a rewritten document only differs in its selections.
pub type Extra = Map<String, Value>;

/// One performance tier of a rubric criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricLevel {
    #[serde(default)]
    pub description: String,
    pub score: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricCriterion {
    pub name: String,
    /// Percentage contribution. Normalized against the sum of all weights,
    /// so the weights of a rubric need not add up to 100.
    pub weight: f64,
    #[serde(default)]
    pub levels: Vec<RubricLevel>,
    /// Index into `levels`; `None` until the criterion has been evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl RubricCriterion {
    /// The selected level, if the selection points at an existing level.
    pub fn selected_level(&self) -> Option<&RubricLevel> {
        self.selected.and_then(|index| self.levels.get(index))
    }

    /// Full-credit value of the criterion.
    pub fn max_score(&self) -> f64 {
        self.levels
            .iter()
            .map(|level| level.score)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricMethodology {
    pub title: String,
    #[serde(default)]
    pub criteria: Vec<RubricCriterion>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl RubricMethodology {
    /// Sum of criterion weights; the denominator scores are normalized by.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|criterion| criterion.weight).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub description: String,
    /// Informational only; does not affect scoring.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistMethodology {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoEvaluationLevel {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub selected: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoEvaluationCriterion {
    pub description: String,
    #[serde(default)]
    pub levels: Vec<AutoEvaluationLevel>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl AutoEvaluationCriterion {
    /// First selected level. At most one is selected when the document was
    /// produced through `select_auto_evaluation_level`.
    pub fn selected_level(&self) -> Option<&AutoEvaluationLevel> {
        self.levels.iter().find(|level| level.selected)
    }

    pub fn max_value(&self) -> f64 {
        self.levels
            .iter()
            .map(|level| level.value)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoEvaluationDimension {
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<AutoEvaluationCriterion>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoEvaluationMethodology {
    pub title: String,
    #[serde(default)]
    pub dimensions: Vec<AutoEvaluationDimension>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A methodology document as exchanged with the backend, discriminated by
/// its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Methodology {
    #[serde(rename = "rubric")]
    Rubric(RubricMethodology),
    #[serde(rename = "checklist")]
    Checklist(ChecklistMethodology),
    #[serde(
        rename = "autoevaluation",
        alias = "auto_evaluation",
        alias = "autoEvaluation"
    )]
    AutoEvaluation(AutoEvaluationMethodology),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodologyKind {
    Rubric,
    Checklist,
    AutoEvaluation,
}

impl fmt::Display for MethodologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rubric => "rubric",
            Self::Checklist => "checklist",
            Self::AutoEvaluation => "autoevaluation",
        };
        f.write_str(name)
    }
}

impl Methodology {
    pub fn kind(&self) -> MethodologyKind {
        match self {
            Self::Rubric(_) => MethodologyKind::Rubric,
            Self::Checklist(_) => MethodologyKind::Checklist,
            Self::AutoEvaluation(_) => MethodologyKind::AutoEvaluation,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Rubric(rubric) => &rubric.title,
            Self::Checklist(checklist) => &checklist.title,
            Self::AutoEvaluation(auto) => &auto.title,
        }
    }
}
