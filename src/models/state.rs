//! Simulation state
//!
//! The single mutable value threaded through the monthly loop. Seeded from
//! the employee's joining details, mutated only by event application and
//! increment grants.
//!
//! # Critical Invariants
//!
//! 1. `commission` never decreases.
//! 2. `structure` always matches `commission` (scale under 3rd-5th, band
//!    under 6th, matrix under 7th).
//! 3. `next_increment_date` advances by one year per granted increment.

use crate::models::pay::{Commission, PayStructure};
use crate::models::result::IncrementAnalysis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mutable simulation state for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Date the loop is currently processing.
    pub current_date: NaiveDate,

    /// Commission currently in force for this employee.
    pub commission: Commission,

    /// Active pay representation.
    pub structure: PayStructure,

    /// Display name of the post currently held.
    pub current_post: String,

    /// DA percentage currently in force (or the override).
    pub da_rate: f64,

    /// Next date an annual increment falls due. Always day 1 of a scheduled
    /// month except when shifted by break-in-service days.
    pub next_increment_date: NaiveDate,

    /// Description of an account-test pass whose bonus increment has not
    /// yet been granted.
    pub account_test_pending: Option<String>,

    /// Set when a selection/special-grade award fired in the month being
    /// processed; suppresses the annual increment for that month.
    pub award_fired_this_month: bool,

    /// Remarks accumulated for the month being processed.
    month_remarks: Vec<String>,

    /// Running increment counters by category.
    pub increments: IncrementAnalysis,
}

impl SimulationState {
    pub fn new(
        start_date: NaiveDate,
        commission: Commission,
        structure: PayStructure,
        post: String,
        da_rate: f64,
        next_increment_date: NaiveDate,
    ) -> Self {
        SimulationState {
            current_date: start_date,
            commission,
            structure,
            current_post: post,
            da_rate,
            next_increment_date,
            account_test_pending: None,
            award_fired_this_month: false,
            month_remarks: Vec::new(),
            increments: IncrementAnalysis::default(),
        }
    }

    /// Basic pay of the active structure.
    pub fn basic_pay(&self) -> i64 {
        self.structure.basic_pay()
    }

    /// Record a remark for the month in progress.
    pub fn remark(&mut self, text: impl Into<String>) {
        self.month_remarks.push(text.into());
    }

    /// Drain the remarks collected for the month.
    pub fn take_remarks(&mut self) -> Vec<String> {
        std::mem::take(&mut self.month_remarks)
    }

    /// Reset per-month scratch before processing a new month.
    pub fn begin_month(&mut self) {
        self.award_fired_this_month = false;
        self.month_remarks.clear();
    }
}
