//! Career event types
//!
//! Everything that can change pay-structure state during the simulation is
//! a dated event. Events carry all data needed for application and are
//! ordered by `(date, priority)`:
//!
//! 1. DA rate changes
//! 2. Commission-transition fixations
//! 3. Everything else (revisions, awards, promotions, test passes)
//!
//! The ordering is part of the engine contract; two events on the same date
//! keep their build order (the sort is stable).

use crate::models::input::Promotion;
use crate::models::pay::Commission;
use crate::tables::{DaSeries, ScaleRevision};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated career event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CareerEvent {
    /// A dearness-allowance instalment takes effect.
    DaChange {
        date: NaiveDate,
        series: DaSeries,
        percent: f64,
    },

    /// Fixation into the next commission.
    CommissionTransition { date: NaiveDate, to: Commission },

    /// A notified revision of a pay scale.
    ScaleRevision { revision: ScaleRevision },

    /// Selection-grade award.
    SelectionGrade {
        date: NaiveDate,
        with_fixation: bool,
    },

    /// Special-grade award.
    SpecialGrade {
        date: NaiveDate,
        with_fixation: bool,
    },

    /// Promotion to a higher post.
    Promotion { promotion: Promotion },

    /// Departmental account-test pass; worth one extra increment on the
    /// next scheduled increment date.
    AccountTestPass { date: NaiveDate, description: String },
}

impl CareerEvent {
    /// Date the event takes effect.
    pub fn date(&self) -> NaiveDate {
        match self {
            CareerEvent::DaChange { date, .. } => *date,
            CareerEvent::CommissionTransition { date, .. } => *date,
            CareerEvent::ScaleRevision { revision } => revision.effective,
            CareerEvent::SelectionGrade { date, .. } => *date,
            CareerEvent::SpecialGrade { date, .. } => *date,
            CareerEvent::Promotion { promotion } => promotion.date,
            CareerEvent::AccountTestPass { date, .. } => *date,
        }
    }

    /// Application priority within a month; lower applies first.
    pub fn priority(&self) -> u8 {
        match self {
            CareerEvent::DaChange { .. } => 1,
            CareerEvent::CommissionTransition { .. } => 2,
            _ => 3,
        }
    }
}
