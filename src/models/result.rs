//! Payroll result types
//!
//! The simulator's output: one `PayrollPeriod` per month inside the
//! calculation window, grouped by year, plus the fixation snapshots taken at
//! each commission transition, the applied scale revisions, the increment
//! counters and formatted employee metadata.
//!
//! All dates in this module are pre-formatted `DD/MM/YYYY` strings; raw
//! chronology stays internal to the simulator.

use crate::models::pay::Commission;
use serde::{Deserialize, Serialize};

/// One monthly pay record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub month_name: String,
    pub commission: Commission,
    pub basic_pay: i64,
    /// Matrix level, 7th commission only.
    pub level: Option<u8>,
    /// Grade pay, 6th commission only.
    pub grade_pay: Option<i64>,
    /// Pay in pay band, 6th commission only.
    pub pay_in_band: Option<i64>,
    /// Scale stage string, 3rd-5th commissions only.
    pub scale: Option<String>,
    pub da_rate: f64,
    pub da_amount: i64,
    pub hra: i64,
    pub cca: i64,
    pub medical_allowance: i64,
    pub gross_pay: i64,
    pub deductions: Vec<DeductionLine>,
    pub total_deductions: i64,
    pub net_pay: i64,
    pub remarks: Vec<String>,
}

/// One named deduction in a monthly record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub name: String,
    pub amount: i64,
}

/// Monthly records of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyCalculation {
    pub year: i32,
    pub periods: Vec<PayrollPeriod>,
}

/// Snapshot of a commission-transition fixation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixationSnapshot {
    /// Commission fixed into.
    pub commission: Commission,
    /// DD/MM/YYYY.
    pub effective_date: String,
    /// Basic pay drawn immediately before the transition.
    pub previous_basic_pay: i64,
    /// The emoluments figure the fixation arithmetic started from.
    pub emoluments: i64,
    /// Basic pay in the new commission; equals the first in-commission
    /// period's basic pay.
    pub initial_revised_pay: i64,
    /// Human-readable description of the revised scale, band or level.
    pub revised_structure: String,
    /// Government order authorising the fixation.
    pub order_ref: String,
    pub remark: String,
}

/// A scale revision applied during simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedRevision {
    /// DD/MM/YYYY.
    pub effective_date: String,
    pub old_scale: String,
    pub new_scale: String,
    pub order_ref: String,
}

/// Increment counters by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementAnalysis {
    pub regular: u32,
    pub selection_grade: u32,
    pub special_grade: u32,
    pub promotion: u32,
    pub account_test: u32,
    pub total: u32,
}

/// Formatted employee metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub name: String,
    pub post: String,
    /// DD/MM/YYYY.
    pub date_of_birth: String,
    /// Last day of the month in which retirement age is reached, DD/MM/YYYY.
    pub retirement_date: String,
    pub date_of_joining_service: String,
    pub date_of_joining_office: String,
    pub date_of_relief: Option<String>,
    pub city_class: String,
    pub probation_summary: String,
    pub lpc_advances: Vec<LpcAdvanceLine>,
}

/// One advance reported from the last pay certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpcAdvanceLine {
    pub name: String,
    pub outstanding: i64,
}

/// The complete simulation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub employee: EmployeeDetails,
    pub fixation_fourth: Option<FixationSnapshot>,
    pub fixation_fifth: Option<FixationSnapshot>,
    pub fixation_sixth: Option<FixationSnapshot>,
    pub fixation_seventh: Option<FixationSnapshot>,
    pub yearly_calculations: Vec<YearlyCalculation>,
    pub applied_revisions: Vec<AppliedRevision>,
    pub increment_analysis: IncrementAnalysis,
}

impl PayrollResult {
    /// Iterate all periods across the yearly grouping, in order.
    pub fn periods(&self) -> impl Iterator<Item = &PayrollPeriod> {
        self.yearly_calculations.iter().flat_map(|y| y.periods.iter())
    }

    /// Fixation snapshot for a commission, if that transition fired.
    pub fn fixation(&self, commission: Commission) -> Option<&FixationSnapshot> {
        match commission {
            Commission::Fourth => self.fixation_fourth.as_ref(),
            Commission::Fifth => self.fixation_fifth.as_ref(),
            Commission::Sixth => self.fixation_sixth.as_ref(),
            Commission::Seventh => self.fixation_seventh.as_ref(),
            Commission::Third => None,
        }
    }
}
