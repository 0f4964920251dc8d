use crate::types::methodology::{
    AutoEvaluationMethodology, ChecklistMethodology, Methodology, RubricMethodology,
};

pub const MAX_SCORE: f64 = 100.0;

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted rubric score in 0..=100, rounded to two decimals.
///
/// Each evaluated criterion contributes its share of the total weight scaled
/// by `selected score / best score`. Unevaluated criteria, criteria whose
/// levels are all worth zero, and rubrics without weight contribute nothing.
pub fn compute_rubric_score(methodology: &RubricMethodology) -> f64 {
    let total_weight = methodology.total_weight();
    if total_weight == 0.0 {
        if !methodology.criteria.is_empty() {
            tracing::warn!(title = %methodology.title, "rubric has zero total weight");
        }
        return 0.0;
    }

    let raw: f64 = methodology
        .criteria
        .iter()
        .filter_map(|criterion| {
            let level = criterion.selected_level()?;
            let max_score = criterion.max_score();
            if max_score == 0.0 {
                return Some(0.0);
            }
            Some((criterion.weight / total_weight) * MAX_SCORE * (level.score / max_score))
        })
        .sum();

    let score = round_to_hundredths(raw);
    tracing::debug!(score, total_weight, "rubric score computed");
    score
}

pub fn compute_checklist_score(methodology: &ChecklistMethodology) -> u32 {
    if methodology.items.is_empty() {
        return 0;
    }
    let checked = methodology.items.iter().filter(|item| item.checked).count();
    (MAX_SCORE * checked as f64 / methodology.items.len() as f64).round() as u32
}

/// Auto-evaluation score in 0..=100, rounded to an integer. Every dimension
/// carries an equal share of the total, split evenly across its criteria.
pub fn compute_auto_evaluation_score(methodology: &AutoEvaluationMethodology) -> u32 {
    if methodology.dimensions.is_empty() {
        return 0;
    }
    let dimension_share = MAX_SCORE / methodology.dimensions.len() as f64;

    let total: f64 = methodology
        .dimensions
        .iter()
        .filter(|dimension| !dimension.criteria.is_empty())
        .map(|dimension| {
            let criterion_share = dimension_share / dimension.criteria.len() as f64;
            dimension
                .criteria
                .iter()
                .filter_map(|criterion| {
                    let level = criterion.selected_level()?;
                    let max_value = criterion.max_value();
                    if max_value == 0.0 {
                        return Some(0.0);
                    }
                    Some(criterion_share * (level.value / max_value))
                })
                .sum::<f64>()
        })
        .sum();

    let score = total.round() as u32;
    tracing::debug!(score, "auto-evaluation score computed");
    score
}

impl Methodology {
    /// Score on the 0..=100 scale of whichever variant this is.
    pub fn score(&self) -> f64 {
        match self {
            Self::Rubric(rubric) => compute_rubric_score(rubric),
            Self::Checklist(checklist) => f64::from(compute_checklist_score(checklist)),
            Self::AutoEvaluation(auto) => f64::from(compute_auto_evaluation_score(auto)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{auto_evaluation, checklist, rubric};
    use crate::engine::selection::{
        select_auto_evaluation_level, select_rubric_level, toggle_checklist_item,
    };

    #[test]
    fn rubric_with_zero_weights_scores_zero() {
        let mut methodology = rubric(&[0.0, 0.0], &[1.0, 5.0]);
        methodology.criteria[0].selected = Some(1);
        methodology.criteria[1].selected = Some(1);

        let score = compute_rubric_score(&methodology);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn rubric_full_credit_reaches_one_hundred() {
        for weights in [
            &[60.0, 40.0][..],
            &[33.0, 33.0, 33.0][..],
            &[10.0, 250.0, 7.5][..],
        ] {
            let mut methodology = rubric(weights, &[1.0, 3.0, 5.0]);
            for criterion in &mut methodology.criteria {
                criterion.selected = Some(2);
            }
            assert_eq!(compute_rubric_score(&methodology), 100.0);
        }
    }

    #[test]
    fn rubric_sixty_forty_scenario_scores_sixty_eight() {
        let methodology = rubric(&[60.0, 40.0], &[1.0, 3.0, 5.0]);
        let methodology = select_rubric_level(&methodology, 0, 2).expect("valid");
        let methodology = select_rubric_level(&methodology, 1, 0).expect("valid");

        assert_eq!(compute_rubric_score(&methodology), 68.0);
    }

    #[test]
    fn rubric_normalizes_weights_that_do_not_sum_to_one_hundred() {
        let methodology = rubric(&[30.0, 30.0], &[0.0, 4.0]);
        let methodology = select_rubric_level(&methodology, 0, 1).expect("valid");

        assert_eq!(compute_rubric_score(&methodology), 50.0);
    }

    #[test]
    fn rubric_rounds_to_two_decimals() {
        let methodology = rubric(&[1.0, 1.0, 1.0], &[0.0, 1.0]);
        let methodology = select_rubric_level(&methodology, 0, 1).expect("valid");

        assert_eq!(compute_rubric_score(&methodology), 33.33);
    }

    #[test]
    fn rubric_criterion_with_zero_valued_levels_contributes_nothing() {
        let mut methodology = rubric(&[50.0, 50.0], &[0.0, 0.0]);
        methodology.criteria[0].selected = Some(1);

        assert_eq!(compute_rubric_score(&methodology), 0.0);
    }

    #[test]
    fn rubric_ignores_dangling_selection() {
        let mut methodology = rubric(&[100.0], &[1.0, 2.0]);
        methodology.criteria[0].selected = Some(7);

        assert_eq!(compute_rubric_score(&methodology), 0.0);
    }

    #[test]
    fn checklist_all_or_nothing() {
        assert_eq!(compute_checklist_score(&checklist(&[true, true, true])), 100);
        assert_eq!(compute_checklist_score(&checklist(&[false, false])), 0);
        assert_eq!(compute_checklist_score(&checklist(&[])), 0);
    }

    #[test]
    fn checklist_rounds_to_nearest_integer() {
        assert_eq!(compute_checklist_score(&checklist(&[true, false, false])), 33);
        assert_eq!(compute_checklist_score(&checklist(&[true, true, false])), 67);
    }

    #[test]
    fn checklist_toggling_moves_score_monotonically() {
        let mut current = checklist(&[false, true, false, false, true]);
        for index in 0..current.items.len() {
            let before = compute_checklist_score(&current);
            let was_checked = current.items[index].checked;
            let next = toggle_checklist_item(&current, index).expect("valid");
            let after = compute_checklist_score(&next);
            if was_checked {
                assert!(after <= before);
            } else {
                assert!(after >= before);
            }
            current = next;
        }
    }

    #[test]
    fn auto_evaluation_half_credit_scenario() {
        let methodology = auto_evaluation(&[2, 2], &[0.0, 5.0, 10.0]);
        let methodology = select_auto_evaluation_level(&methodology, 0, 0, 2).expect("valid");
        let methodology = select_auto_evaluation_level(&methodology, 0, 1, 2).expect("valid");

        assert_eq!(compute_auto_evaluation_score(&methodology), 50);
    }

    #[test]
    fn auto_evaluation_partial_levels_scale_by_max_value() {
        let methodology = auto_evaluation(&[1, 1], &[0.0, 5.0, 10.0]);
        let methodology = select_auto_evaluation_level(&methodology, 0, 0, 1).expect("valid");
        let methodology = select_auto_evaluation_level(&methodology, 1, 0, 2).expect("valid");

        assert_eq!(compute_auto_evaluation_score(&methodology), 75);
    }

    #[test]
    fn auto_evaluation_share_follows_dimension_count() {
        let methodology = auto_evaluation(&[1, 1, 1], &[0.0, 1.0]);
        let methodology = select_auto_evaluation_level(&methodology, 2, 0, 1).expect("valid");

        assert_eq!(compute_auto_evaluation_score(&methodology), 33);
    }

    #[test]
    fn auto_evaluation_empty_dimensions_contribute_zero() {
        let methodology = auto_evaluation(&[0, 1], &[0.0, 4.0]);
        let methodology = select_auto_evaluation_level(&methodology, 1, 0, 1).expect("valid");

        assert_eq!(compute_auto_evaluation_score(&methodology), 50);
        assert_eq!(compute_auto_evaluation_score(&auto_evaluation(&[], &[])), 0);
    }

    #[test]
    fn methodology_score_dispatches_per_variant() {
        let methodology = Methodology::Checklist(checklist(&[true, false]));
        assert_eq!(methodology.score(), 50.0);
    }
}
