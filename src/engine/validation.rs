//! Authoring-time structural checks. Selections are never validated here,
//! apart from warnings about overlays that no longer fit the structure.

use crate::types::methodology::{
    AutoEvaluationMethodology, ChecklistMethodology, Methodology, RubricMethodology,
};
use crate::types::report::Issue;

pub const EXPECTED_WEIGHT_SUM: f64 = 100.0;
pub const MAX_CRITERION_WEIGHT: f64 = 100.0;
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Treat rubric weights that do not add up to 100 as blocking.
    pub strict_weight_sum: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn rubric_issues(methodology: &RubricMethodology, policy: &ValidationPolicy) -> Vec<Issue> {
    let mut issues = Vec::new();
    if is_blank(&methodology.title) {
        issues.push(Issue::blocking("rubric.missing_title", "Rubric has no title", None));
    }
    if methodology.criteria.is_empty() {
        issues.push(Issue::blocking(
            "rubric.no_criteria",
            "Rubric needs at least one criterion",
            None,
        ));
        return issues;
    }

    for (index, criterion) in methodology.criteria.iter().enumerate() {
        let location = || Some(format!("criteria[{index}]"));
        if is_blank(&criterion.name) {
            issues.push(Issue::blocking(
                "rubric.criterion.missing_name",
                "Criterion has no name",
                location(),
            ));
        }
        if criterion.weight.is_nan() || criterion.weight <= 0.0 {
            issues.push(Issue::blocking(
                "rubric.criterion.non_positive_weight",
                format!("Criterion weight must be positive (found {})", criterion.weight),
                location(),
            ));
        } else if criterion.weight > MAX_CRITERION_WEIGHT {
            issues.push(Issue::warning(
                "rubric.criterion.weight_above_max",
                format!(
                    "Criterion weight {} exceeds {MAX_CRITERION_WEIGHT}",
                    criterion.weight
                ),
                location(),
            ));
        }
        if criterion.levels.is_empty() {
            issues.push(Issue::blocking(
                "rubric.criterion.no_levels",
                "Criterion needs at least one level",
                location(),
            ));
        }
        for (level_index, level) in criterion.levels.iter().enumerate() {
            if level.score < 0.0 {
                issues.push(Issue::warning(
                    "rubric.level.negative_score",
                    format!("Level score {} is negative", level.score),
                    Some(format!("criteria[{index}].levels[{level_index}]")),
                ));
            }
        }
        if let Some(selected) = criterion.selected {
            if selected >= criterion.levels.len() {
                issues.push(Issue::warning(
                    "rubric.criterion.dangling_selection",
                    format!(
                        "Selected level {selected} does not exist ({} levels)",
                        criterion.levels.len()
                    ),
                    location(),
                ));
            }
        }
    }

    let total_weight = methodology.total_weight();
    if (total_weight - EXPECTED_WEIGHT_SUM).abs() > WEIGHT_SUM_TOLERANCE {
        let message = format!(
            "Criterion weights sum to {total_weight}; scores are normalized against that total"
        );
        issues.push(if policy.strict_weight_sum {
            Issue::blocking("rubric.weight_sum", message, None)
        } else {
            Issue::warning("rubric.weight_sum", message, None)
        });
    }

    issues
}

pub fn checklist_issues(methodology: &ChecklistMethodology) -> Vec<Issue> {
    let mut issues = Vec::new();
    if is_blank(&methodology.title) {
        issues.push(Issue::blocking(
            "checklist.missing_title",
            "Checklist has no title",
            None,
        ));
    }
    if methodology.items.is_empty() {
        issues.push(Issue::blocking(
            "checklist.no_items",
            "Checklist needs at least one item",
            None,
        ));
    }
    for (index, item) in methodology.items.iter().enumerate() {
        if is_blank(&item.description) {
            issues.push(Issue::blocking(
                "checklist.item.missing_description",
                "Checklist item has no description",
                Some(format!("items[{index}]")),
            ));
        }
    }
    issues
}

pub fn auto_evaluation_issues(methodology: &AutoEvaluationMethodology) -> Vec<Issue> {
    let mut issues = Vec::new();
    if is_blank(&methodology.title) {
        issues.push(Issue::blocking(
            "autoevaluation.missing_title",
            "Auto-evaluation has no title",
            None,
        ));
    }
    if methodology.dimensions.is_empty() {
        issues.push(Issue::blocking(
            "autoevaluation.no_dimensions",
            "Auto-evaluation needs at least one dimension",
            None,
        ));
    }

    for (d, dimension) in methodology.dimensions.iter().enumerate() {
        if is_blank(&dimension.name) {
            issues.push(Issue::blocking(
                "autoevaluation.dimension.missing_name",
                "Dimension has no name",
                Some(format!("dimensions[{d}]")),
            ));
        }
        if dimension.criteria.is_empty() {
            issues.push(Issue::blocking(
                "autoevaluation.dimension.no_criteria",
                "Dimension needs at least one criterion",
                Some(format!("dimensions[{d}]")),
            ));
        }
        for (c, criterion) in dimension.criteria.iter().enumerate() {
            let location = || Some(format!("dimensions[{d}].criteria[{c}]"));
            if is_blank(&criterion.description) {
                issues.push(Issue::blocking(
                    "autoevaluation.criterion.missing_description",
                    "Criterion has no description",
                    location(),
                ));
            }
            if criterion.levels.is_empty() {
                issues.push(Issue::blocking(
                    "autoevaluation.criterion.no_levels",
                    "Criterion needs at least one level",
                    location(),
                ));
            }
            if criterion.levels.iter().any(|level| level.value < 0.0) {
                issues.push(Issue::warning(
                    "autoevaluation.level.negative_value",
                    "Criterion has a level with a negative value",
                    location(),
                ));
            }
            let selected = criterion.levels.iter().filter(|level| level.selected).count();
            if selected > 1 {
                issues.push(Issue::warning(
                    "autoevaluation.criterion.multiple_selected",
                    format!("{selected} levels are selected; only the first is scored"),
                    location(),
                ));
            }
        }
    }
    issues
}

pub fn structure_issues(methodology: &Methodology, policy: &ValidationPolicy) -> Vec<Issue> {
    match methodology {
        Methodology::Rubric(rubric) => rubric_issues(rubric, policy),
        Methodology::Checklist(checklist) => checklist_issues(checklist),
        Methodology::AutoEvaluation(auto) => auto_evaluation_issues(auto),
    }
}

fn none_blocking(issues: &[Issue]) -> bool {
    issues.iter().all(|issue| !issue.blocking)
}

/// Valid when titled, with at least one criterion, each named, positively
/// weighted and carrying at least one level.
pub fn validate_rubric(methodology: &RubricMethodology) -> bool {
    none_blocking(&rubric_issues(methodology, &ValidationPolicy::default()))
}

pub fn validate_checklist(methodology: &ChecklistMethodology) -> bool {
    none_blocking(&checklist_issues(methodology))
}

pub fn validate_auto_evaluation(methodology: &AutoEvaluationMethodology) -> bool {
    none_blocking(&auto_evaluation_issues(methodology))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{auto_evaluation, checklist, rubric};

    fn ids(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|issue| issue.id.as_str()).collect()
    }

    #[test]
    fn well_formed_rubric_is_valid() {
        let methodology = rubric(&[60.0, 40.0], &[1.0, 3.0, 5.0]);
        assert!(validate_rubric(&methodology));
        assert!(rubric_issues(&methodology, &ValidationPolicy::default()).is_empty());
    }

    #[test]
    fn rubric_requires_title_and_criteria() {
        let mut methodology = rubric(&[], &[]);
        methodology.title = "   ".to_string();

        let issues = rubric_issues(&methodology, &ValidationPolicy::default());
        assert_eq!(ids(&issues), vec!["rubric.missing_title", "rubric.no_criteria"]);
        assert!(!validate_rubric(&methodology));
    }

    #[test]
    fn rubric_rejects_unnamed_zero_weight_levelless_criterion() {
        let mut methodology = rubric(&[0.0, 100.0], &[]);
        methodology.criteria[0].name = String::new();

        let issues = rubric_issues(&methodology, &ValidationPolicy::default());
        let found = ids(&issues);
        assert!(found.contains(&"rubric.criterion.missing_name"));
        assert!(found.contains(&"rubric.criterion.non_positive_weight"));
        assert!(found.contains(&"rubric.criterion.no_levels"));
        assert!(!validate_rubric(&methodology));
    }

    #[test]
    fn weight_sum_mismatch_is_a_warning_unless_strict() {
        let methodology = rubric(&[30.0, 30.0], &[1.0]);
        assert!(validate_rubric(&methodology));

        let lenient = rubric_issues(&methodology, &ValidationPolicy::default());
        assert_eq!(ids(&lenient), vec!["rubric.weight_sum"]);
        assert!(!lenient[0].blocking);

        let strict = rubric_issues(
            &methodology,
            &ValidationPolicy {
                strict_weight_sum: true,
            },
        );
        assert!(strict[0].blocking);
    }

    #[test]
    fn rubric_warns_about_overweight_and_dangling_selection() {
        let mut methodology = rubric(&[150.0], &[1.0, -2.0]);
        methodology.criteria[0].selected = Some(5);

        let issues = rubric_issues(&methodology, &ValidationPolicy::default());
        let found = ids(&issues);
        assert!(found.contains(&"rubric.criterion.weight_above_max"));
        assert!(found.contains(&"rubric.level.negative_score"));
        assert!(found.contains(&"rubric.criterion.dangling_selection"));
        assert!(validate_rubric(&methodology));
    }

    #[test]
    fn checklist_validation() {
        assert!(validate_checklist(&checklist(&[false, true])));
        assert!(!validate_checklist(&checklist(&[])));

        let mut blank_item = checklist(&[false]);
        blank_item.items[0].description = " ".to_string();
        assert_eq!(
            ids(&checklist_issues(&blank_item)),
            vec!["checklist.item.missing_description"]
        );

        let mut untitled = checklist(&[false]);
        untitled.title.clear();
        assert!(!validate_checklist(&untitled));
    }

    #[test]
    fn auto_evaluation_validation() {
        assert!(validate_auto_evaluation(&auto_evaluation(&[2, 2], &[0.0, 5.0])));
        assert!(!validate_auto_evaluation(&auto_evaluation(&[], &[])));
        assert!(!validate_auto_evaluation(&auto_evaluation(&[1, 0], &[1.0])));
        assert!(!validate_auto_evaluation(&auto_evaluation(&[1], &[])));
    }

    #[test]
    fn auto_evaluation_warns_about_multiple_selections() {
        let mut methodology = auto_evaluation(&[1], &[1.0, 2.0]);
        for level in &mut methodology.dimensions[0].criteria[0].levels {
            level.selected = true;
        }
        let issues = auto_evaluation_issues(&methodology);
        assert_eq!(ids(&issues), vec!["autoevaluation.criterion.multiple_selected"]);
        assert!(validate_auto_evaluation(&methodology));
    }
}
