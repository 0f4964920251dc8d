use crate::error::{check_index, IndexTarget, Result};
use crate::types::methodology::{
    AutoEvaluationMethodology, ChecklistMethodology, Methodology, RubricMethodology,
};

/// Returns a copy of `methodology` with `criterion` evaluated at `level`.
/// Other criteria are left as they were.
pub fn select_rubric_level(
    methodology: &RubricMethodology,
    criterion: usize,
    level: usize,
) -> Result<RubricMethodology> {
    check_index(
        IndexTarget::Criterion,
        criterion,
        methodology.criteria.len(),
    )?;
    check_index(
        IndexTarget::Level,
        level,
        methodology.criteria[criterion].levels.len(),
    )?;

    let mut next = methodology.clone();
    next.criteria[criterion].selected = Some(level);
    tracing::debug!(criterion, level, "rubric level selected");
    Ok(next)
}

pub fn toggle_checklist_item(
    methodology: &ChecklistMethodology,
    item: usize,
) -> Result<ChecklistMethodology> {
    check_index(IndexTarget::Item, item, methodology.items.len())?;

    let mut next = methodology.clone();
    let entry = &mut next.items[item];
    entry.checked = !entry.checked;
    tracing::debug!(item, checked = entry.checked, "checklist item toggled");
    Ok(next)
}

/// Selects `level` within one auto-evaluation criterion and clears every
/// sibling level, so the criterion ends with exactly one selection.
pub fn select_auto_evaluation_level(
    methodology: &AutoEvaluationMethodology,
    dimension: usize,
    criterion: usize,
    level: usize,
) -> Result<AutoEvaluationMethodology> {
    check_index(
        IndexTarget::Dimension,
        dimension,
        methodology.dimensions.len(),
    )?;
    let criteria = &methodology.dimensions[dimension].criteria;
    check_index(IndexTarget::Criterion, criterion, criteria.len())?;
    check_index(IndexTarget::Level, level, criteria[criterion].levels.len())?;

    let mut next = methodology.clone();
    for (index, entry) in next.dimensions[dimension].criteria[criterion]
        .levels
        .iter_mut()
        .enumerate()
    {
        entry.selected = index == level;
    }
    tracing::debug!(dimension, criterion, level, "auto-evaluation level selected");
    Ok(next)
}

/// Strips the selection overlay, leaving the authored structure.
pub fn clear_selections(methodology: &Methodology) -> Methodology {
    match methodology {
        Methodology::Rubric(rubric) => {
            let mut next = rubric.clone();
            for criterion in &mut next.criteria {
                criterion.selected = None;
            }
            Methodology::Rubric(next)
        }
        Methodology::Checklist(checklist) => {
            let mut next = checklist.clone();
            for item in &mut next.items {
                item.checked = false;
            }
            Methodology::Checklist(next)
        }
        Methodology::AutoEvaluation(auto) => {
            let mut next = auto.clone();
            for level in next
                .dimensions
                .iter_mut()
                .flat_map(|dimension| dimension.criteria.iter_mut())
                .flat_map(|criterion| criterion.levels.iter_mut())
            {
                level.selected = false;
            }
            Methodology::AutoEvaluation(next)
        }
    }
}
