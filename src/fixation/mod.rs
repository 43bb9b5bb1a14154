//! Pay fixation across commission transitions
//!
//! Translating an employee's pay from one commission into the next is the
//! most consequential arithmetic in the engine: an error here distorts
//! every subsequent month. Each transition requires the previous commission
//! to be in force and follows its own statutory formula:
//!
//! | Transition | Formula |
//! |---|---|
//! | 3rd → 4th (1986) | next higher stage of the mapped scale |
//! | 4th → 5th (1996) | basic + ₹958 DA portion + ₹100 interim relief, fitted |
//! | 5th → 6th (2006) | PIPB = basic × 1.86 rounded, grade pay from the mapped scale |
//! | 6th → 7th (2016) | basic × 2.57 rounded, fitted into the level for the grade pay |
//!
//! Cross-commission scale mapping uses the explicit `legacy_ids` links of
//! the tables; a scale with no successor, or with more than one, aborts the
//! simulation rather than guessing.

pub mod awards;

use crate::core::time::format_dmy;
use crate::format::format_inr;
use crate::models::pay::{Commission, PayStructure};
use crate::models::result::FixationSnapshot;
use crate::models::state::SimulationState;
use crate::pay::operators::{fit_into_level, round_rupees};
use crate::pay::scale::{ParsedScale, ScaleParseError};
use crate::tables::{ReferenceTables, ScaleEntry};
use chrono::NaiveDate;
use thiserror::Error;

pub use awards::{apply_grade_award, apply_promotion, apply_scale_revision, AwardKind};

/// DA portion merged into basic pay at the 1996 fixation.
const FIFTH_PC_DA_PORTION: i64 = 958;

/// Interim relief merged at the 1996 fixation.
const FIFTH_PC_INTERIM_RELIEF: i64 = 100;

/// 5th → 6th commission fitment multiplier.
const SIXTH_PC_FITMENT: f64 = 1.86;

/// 6th → 7th commission fitment multiplier.
const SEVENTH_PC_FITMENT: f64 = 2.57;

/// Fixation failure. Always fatal: guessing a neighbouring scale or level
/// would silently distort years of subsequent pay.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixationError {
    #[error("cannot fix into the {to} while the {from} is in force")]
    OutOfOrder { from: Commission, to: Commission },

    #[error("pay structure does not match the {commission} at fixation")]
    StructureMismatch { commission: Commission },

    #[error("scale {scale_id} has no successor under the {commission}")]
    UnmappedScale {
        scale_id: String,
        commission: Commission,
    },

    #[error("scale {scale_id} maps to {count} successors under the {commission}")]
    AmbiguousMapping {
        scale_id: String,
        commission: Commission,
        count: usize,
    },

    #[error("no pay-matrix level is defined for grade pay {0}")]
    UnknownGradePayLevel(i64),

    #[error("pay-matrix level {0} is missing from the tables")]
    MissingMatrixLevel(u8),

    #[error("scale entry {0} carries no grade pay")]
    MissingGradePay(String),

    #[error("no pay band is defined for grade pay {0}")]
    MissingPayBand(i64),

    #[error(transparent)]
    Scale(#[from] ScaleParseError),
}

/// Resolve the single successor of `scale_id` under `commission`.
fn successor<'t>(
    tables: &'t ReferenceTables,
    scale_id: &str,
    commission: Commission,
) -> Result<&'t ScaleEntry, FixationError> {
    let successors = tables.successor_scales(scale_id, commission);
    match successors.len() {
        0 => Err(FixationError::UnmappedScale {
            scale_id: scale_id.to_string(),
            commission,
        }),
        1 => Ok(successors[0]),
        count => Err(FixationError::AmbiguousMapping {
            scale_id: scale_id.to_string(),
            commission,
            count,
        }),
    }
}

/// Fix the employee into commission `to` with effect from `date`.
///
/// Mutates the state's structure and commission, emits the fixation remark,
/// and returns the snapshot for the result.
pub fn apply_transition(
    state: &mut SimulationState,
    to: Commission,
    date: NaiveDate,
    tables: &ReferenceTables,
) -> Result<FixationSnapshot, FixationError> {
    if state.commission.next() != Some(to) {
        return Err(FixationError::OutOfOrder {
            from: state.commission,
            to,
        });
    }

    let previous_basic = state.basic_pay();

    let snapshot = match to {
        Commission::Fourth | Commission::Fifth => {
            let PayStructure::Scale { scale_id, .. } = &state.structure else {
                return Err(FixationError::StructureMismatch { commission: to });
            };
            let entry = successor(tables, scale_id, to)?;
            let parsed: ParsedScale = entry.scale.parse()?;

            // 1986: the accumulated DA is already merged into the stage
            // tables, so the emoluments are the bare basic. 1996 adds the
            // notified DA portion and interim relief before fitment.
            let emoluments = match to {
                Commission::Fifth => {
                    previous_basic + FIFTH_PC_DA_PORTION + FIFTH_PC_INTERIM_RELIEF
                }
                _ => previous_basic,
            };
            let revised = parsed.fit_next_higher(emoluments);

            let order_ref = match to {
                Commission::Fifth => tables.orders.fixation_fifth.clone(),
                _ => tables.orders.fixation_fourth.clone(),
            };
            let remark = format!(
                "Pay fixed in the {} scale {} at {} with effect from {} ({})",
                to,
                entry.scale,
                format_inr(revised),
                format_dmy(date),
                order_ref
            );

            state.structure = PayStructure::Scale {
                scale_id: entry.id.clone(),
                scale: entry.scale.clone(),
                ordinary_scale_id: entry.id.clone(),
                basic_pay: revised,
            };

            FixationSnapshot {
                commission: to,
                effective_date: format_dmy(date),
                previous_basic_pay: previous_basic,
                emoluments,
                initial_revised_pay: revised,
                revised_structure: format!("Scale {} ({})", entry.scale, entry.id),
                order_ref,
                remark,
            }
        }

        Commission::Sixth => {
            let PayStructure::Scale { scale_id, .. } = &state.structure else {
                return Err(FixationError::StructureMismatch { commission: to });
            };
            let entry = successor(tables, scale_id, to)?;
            let grade_pay = entry
                .grade_pay
                .ok_or_else(|| FixationError::MissingGradePay(entry.id.clone()))?;
            let band = tables
                .band_for_grade_pay(grade_pay)
                .ok_or(FixationError::MissingPayBand(grade_pay))?;

            let emoluments = round_rupees(previous_basic as f64 * SIXTH_PC_FITMENT);
            let pipb = emoluments.clamp(band.min, band.max);
            let revised = pipb + grade_pay;

            let order_ref = tables.orders.fixation_sixth.clone();
            let remark = format!(
                "Pay fixed in {} ({}) with grade pay {}: pay in pay band {} with effect from {} ({})",
                band.name,
                entry.scale,
                format_inr(grade_pay),
                format_inr(pipb),
                format_dmy(date),
                order_ref
            );

            state.structure = PayStructure::Band { pipb, grade_pay };

            FixationSnapshot {
                commission: to,
                effective_date: format_dmy(date),
                previous_basic_pay: previous_basic,
                emoluments,
                initial_revised_pay: revised,
                revised_structure: format!(
                    "{} {} + GP {}",
                    band.name, entry.scale, grade_pay
                ),
                order_ref,
                remark,
            }
        }

        Commission::Seventh => {
            let PayStructure::Band { grade_pay, .. } = &state.structure else {
                return Err(FixationError::StructureMismatch { commission: to });
            };
            let grade_pay = *grade_pay;
            let level_no = tables
                .level_for_grade_pay(grade_pay)
                .ok_or(FixationError::UnknownGradePayLevel(grade_pay))?;
            let level = tables
                .matrix_level(level_no)
                .ok_or(FixationError::MissingMatrixLevel(level_no))?;

            let emoluments = round_rupees(previous_basic as f64 * SEVENTH_PC_FITMENT);
            let revised = fit_into_level(emoluments, level);

            let order_ref = tables.orders.fixation_seventh.clone();
            let remark = format!(
                "Pay fixed at {} in Level {} of the pay matrix with effect from {} ({})",
                format_inr(revised),
                level_no,
                format_dmy(date),
                order_ref
            );

            state.structure = PayStructure::Matrix {
                level: level_no,
                basic_pay: revised,
            };

            FixationSnapshot {
                commission: to,
                effective_date: format_dmy(date),
                previous_basic_pay: previous_basic,
                emoluments,
                initial_revised_pay: revised,
                revised_structure: format!("Level {}", level_no),
                order_ref,
                remark,
            }
        }

        Commission::Third => unreachable!("no transition fixes into the 3rd commission"),
    };

    state.commission = to;
    state.remark(snapshot.remark.clone());
    Ok(snapshot)
}
