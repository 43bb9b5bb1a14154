//! Selection/special grade, promotions and scale revisions
//!
//! The award events that move pay without a commission change. Selection
//! and special grade are stagnation awards worth one increment, or two with
//! the fixation benefit (under the 5th commission the benefit is a move to
//! the notified higher scale instead). A promotion takes a notional
//! increment in the present structure and re-fixes the result in the
//! structure of the promotion post.

use super::FixationError;
use crate::core::time::format_dmy;
use crate::format::format_inr;
use crate::models::input::{Promotion, PromotionTarget};
use crate::models::pay::{Commission, PayStructure};
use crate::models::result::AppliedRevision;
use crate::models::state::SimulationState;
use crate::pay::operators::{fit_into_level, increment_in_band, increment_in_matrix};
use crate::pay::scale::ParsedScale;
use crate::tables::{ReferenceTables, ScaleRevision};
use chrono::NaiveDate;

/// Which stagnation award is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardKind {
    Selection,
    Special,
}

impl AwardKind {
    fn label(self) -> &'static str {
        match self {
            AwardKind::Selection => "Selection Grade",
            AwardKind::Special => "Special Grade",
        }
    }
}

/// Apply a selection/special-grade award effective `date`.
///
/// Sets the award flag so the annual increment cannot also fire in the same
/// month, and counts the notional increments granted under the award's
/// category.
pub fn apply_grade_award(
    state: &mut SimulationState,
    kind: AwardKind,
    with_fixation: bool,
    date: NaiveDate,
    tables: &ReferenceTables,
) -> Result<(), FixationError> {
    let order_ref = match kind {
        AwardKind::Selection => tables.orders.selection_grade.clone(),
        AwardKind::Special => tables.orders.special_grade.clone(),
    };

    let steps: u32 = match &mut state.structure {
        PayStructure::Scale {
            scale_id,
            scale,
            ordinary_scale_id,
            basic_pay,
        } => {
            let mapping = tables.grade_mapping(ordinary_scale_id);
            let mapped = match (state.commission, with_fixation, mapping) {
                (Commission::Fifth, true, Some(mapping)) => Some(match kind {
                    AwardKind::Selection => {
                        (mapping.selection_id.clone(), mapping.selection_scale.clone())
                    }
                    AwardKind::Special => {
                        (mapping.special_id.clone(), mapping.special_scale.clone())
                    }
                }),
                _ => None,
            };

            match mapped {
                Some((new_id, new_scale)) => {
                    let parsed: ParsedScale = new_scale.parse()?;
                    *basic_pay = parsed.fit_next_higher(*basic_pay);
                    *scale_id = new_id;
                    *scale = new_scale;
                    2
                }
                None => {
                    let parsed: ParsedScale = scale.parse()?;
                    *basic_pay = parsed.increment(*basic_pay, 1);
                    1
                }
            }
        }

        PayStructure::Band { pipb, grade_pay } => {
            let steps = if with_fixation { 2 } else { 1 };
            let band = tables.band_for_grade_pay(*grade_pay);
            *pipb = increment_in_band(*pipb, *grade_pay, band, steps as usize);
            steps
        }

        PayStructure::Matrix { level, basic_pay } => {
            let steps = if with_fixation { 2 } else { 1 };
            let matrix = tables
                .matrix_level(*level)
                .ok_or(FixationError::MissingMatrixLevel(*level))?;
            *basic_pay = increment_in_matrix(*basic_pay, matrix, steps as usize);
            steps
        }
    };

    match kind {
        AwardKind::Selection => state.increments.selection_grade += steps,
        AwardKind::Special => state.increments.special_grade += steps,
    }
    state.increments.total += steps;
    state.award_fired_this_month = true;

    state.remark(format!(
        "{} awarded with effect from {}: pay {} ({})",
        kind.label(),
        format_dmy(date),
        format_inr(state.basic_pay()),
        order_ref
    ));
    Ok(())
}

/// Apply a promotion: a notional increment in the present structure, then
/// re-fixation in the structure of the promotion post.
pub fn apply_promotion(
    state: &mut SimulationState,
    promotion: &Promotion,
    tables: &ReferenceTables,
) -> Result<(), FixationError> {
    let mut scale_retained = false;

    match (&mut state.structure, promotion.target) {
        (PayStructure::Matrix { level, basic_pay }, PromotionTarget::Level { level: new_level }) => {
            let current = tables
                .matrix_level(*level)
                .ok_or(FixationError::MissingMatrixLevel(*level))?;
            let notional = increment_in_matrix(*basic_pay, current, 1);
            let target = tables
                .matrix_level(new_level)
                .ok_or(FixationError::MissingMatrixLevel(new_level))?;
            *basic_pay = fit_into_level(notional, target);
            *level = new_level;
        }

        (PayStructure::Band { pipb, grade_pay }, PromotionTarget::GradePay { grade_pay: new_gp }) => {
            let band = tables.band_for_grade_pay(*grade_pay);
            let notional = increment_in_band(*pipb, *grade_pay, band, 1);
            // The promotion post must be a catalogued 6th-commission scale.
            tables
                .sixth_scale_for_grade_pay(new_gp)
                .ok_or(FixationError::MissingPayBand(new_gp))?;
            let new_band = tables
                .band_for_grade_pay(new_gp)
                .ok_or(FixationError::MissingPayBand(new_gp))?;
            *pipb = notional.max(new_band.min).min(new_band.max);
            *grade_pay = new_gp;
        }

        (PayStructure::Scale { scale, basic_pay, .. }, _) => {
            // Pre-band commissions: the input carries no target scale, so
            // only the notional increment applies and the scale is
            // retained.
            let parsed: ParsedScale = scale.parse()?;
            *basic_pay = parsed.increment(*basic_pay, 1);
            scale_retained = true;
        }

        // A level target under the 6th commission (or a grade-pay target
        // under the 7th) means the input was built for the wrong era.
        (PayStructure::Band { .. }, PromotionTarget::Level { level }) => {
            return Err(FixationError::MissingMatrixLevel(level));
        }
        (PayStructure::Matrix { .. }, PromotionTarget::GradePay { grade_pay }) => {
            return Err(FixationError::MissingPayBand(grade_pay));
        }
    }

    state.current_post = promotion.post_name.clone();
    state.increments.promotion += 1;
    state.increments.total += 1;

    let mut remark = format!(
        "Promoted as {} with effect from {}: pay {}",
        promotion.post_name,
        format_dmy(promotion.date),
        format_inr(state.basic_pay())
    );
    if scale_retained {
        remark.push_str(" (existing scale retained)");
    }
    state.remark(remark);
    Ok(())
}

/// Apply a scale revision when the employee is drawing on the revised
/// scale. Returns the applied-revision record for the result, or `None`
/// when the revision does not concern this employee.
pub fn apply_scale_revision(
    state: &mut SimulationState,
    revision: &ScaleRevision,
) -> Result<Option<AppliedRevision>, FixationError> {
    let PayStructure::Scale {
        scale_id,
        scale,
        ordinary_scale_id,
        basic_pay,
    } = &mut state.structure
    else {
        return Ok(None);
    };
    if *scale_id != revision.scale_id {
        return Ok(None);
    }

    let parsed: ParsedScale = revision.revised_scale.parse()?;
    let old_scale = scale.clone();
    *basic_pay = parsed.fit_next_higher(*basic_pay);
    if *ordinary_scale_id == revision.scale_id {
        *ordinary_scale_id = revision.revised_id.clone();
    }
    *scale_id = revision.revised_id.clone();
    *scale = revision.revised_scale.clone();

    let applied = AppliedRevision {
        effective_date: format_dmy(revision.effective),
        old_scale,
        new_scale: revision.revised_scale.clone(),
        order_ref: revision.order_ref.clone(),
    };
    state.remark(format!(
        "Scale revised from {} to {} with effect from {}: pay {} ({})",
        applied.old_scale,
        applied.new_scale,
        format_dmy(revision.effective),
        format_inr(state.basic_pay()),
        revision.order_ref
    ));
    Ok(Some(applied))
}
