//! Employee career record — the engine's input
//!
//! One `EmployeeInput` is the complete compact record of a career: joining
//! details, pay at joining expressed in the commission representation of the
//! joining era, career events (promotions, selection/special grade,
//! departmental tests, breaks), standing allowances and deductions, and the
//! calculation window. The record is immutable; the simulator never writes
//! back into it.

use crate::core::time::MIN_SUPPORTED_DATE;
use crate::models::pay::Commission;
use crate::tables::ReferenceTables;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation failure. All validation errors are fatal; the engine
/// produces no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: dates before 01/01/1980 are not supported (got {date})")]
    DateBeforeFloor { field: &'static str, date: NaiveDate },

    #[error("calculation window is empty: start {start} is after end {end}")]
    EmptyWindow { start: NaiveDate, end: NaiveDate },

    #[error("unknown scale id in joining pay: {0}")]
    UnknownScale(String),

    #[error("unknown post id: {0}")]
    UnknownPost(String),

    #[error("joining pay does not match the {commission} in force on {date}")]
    JoiningPayEraMismatch {
        commission: Commission,
        date: NaiveDate,
    },

    #[error("unknown pay-matrix level {0} in joining pay")]
    UnknownLevel(u8),

    #[error("promotion dated {date}: {reason}")]
    InvalidPromotion { date: NaiveDate, reason: String },

    #[error("increment schedule is empty; at least the initial schedule is required")]
    EmptySchedule,

    #[error("service break starting {start} ends before it begins ({end})")]
    InvalidBreak { start: NaiveDate, end: NaiveDate },
}

/// Retirement age options for Tamil Nadu government service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetirementAge {
    FiftyEight,
    Sixty,
}

impl RetirementAge {
    pub fn years(self) -> u32 {
        match self {
            RetirementAge::FiftyEight => 58,
            RetirementAge::Sixty => 60,
        }
    }
}

/// City classification for HRA/CCA purposes.
///
/// Class A maps to HRA Grade I(a), B to Grade I(b), C to Grade II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityClass {
    A,
    B,
    C,
}

/// Joining post: either a catalogued post id or a free-text name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JoiningPost {
    Catalogued { id: String },
    Custom { name: String },
}

/// Joining pay in the representation of the commission in force at the date
/// of joining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JoiningPay {
    /// 3rd-5th commissions: a scale id and the basic pay drawn on it.
    PreBand { scale_id: String, basic_pay: i64 },

    /// 6th commission: a band scale id and the pay in pay band. Grade pay
    /// comes from the scale entry.
    Band { scale_id: String, pipb: i64 },

    /// 7th commission: a matrix level; pay starts at the level's first cell.
    Matrix { level: u8 },
}

/// A selection-grade or special-grade award.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeAward {
    pub effective_date: NaiveDate,
    /// `true`: fixation benefit (two increments, or a scale change under the
    /// 5th commission). `false`: a single increment.
    pub with_fixation: bool,
}

/// Target of a promotion, era-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionTarget {
    /// 6th-commission era: the grade pay of the promotion post.
    GradePay { grade_pay: i64 },

    /// 7th-commission era: the matrix level of the promotion post.
    Level { level: u8 },
}

/// A promotion event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub date: NaiveDate,
    pub post_name: String,
    pub target: PromotionTarget,
}

/// A change of the annual increment month, effective from a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncrementScheduleChange {
    pub effective_date: NaiveDate,
    /// One of January, April, July, October.
    pub month: IncrementMonth,
}

/// Permitted annual-increment months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncrementMonth {
    January,
    April,
    July,
    October,
}

impl IncrementMonth {
    pub fn number(self) -> u32 {
        match self {
            IncrementMonth::January => 1,
            IncrementMonth::April => 4,
            IncrementMonth::July => 7,
            IncrementMonth::October => 10,
        }
    }
}

/// A break in service. Both endpoints are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceBreak {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ServiceBreak {
    /// Calendar days of the break, endpoints inclusive.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A departmental account-test pass. Grants one extra increment on the next
/// scheduled increment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTestPass {
    pub date: NaiveDate,
    pub description: String,
}

/// Standing monthly allowances and deduction rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAllowances {
    /// Monthly medical allowance, rupees.
    pub medical: i64,
    /// CPS or GPF contribution as a percentage of basic + DA.
    pub cps_gpf_percent: f64,
    /// Monthly professional tax, rupees.
    pub professional_tax: i64,
    /// Monthly group insurance scheme subscription, rupees.
    pub gis: i64,
}

/// Probation length options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbationKind {
    OneYear,
    TwoYears,
    /// Custom length in months; 18 or fewer behaves as one year, otherwise
    /// as two.
    Custom { months: u32 },
}

impl ProbationKind {
    /// Effective probation length in years for the increment rules.
    pub fn effective_years(self) -> u32 {
        match self {
            ProbationKind::OneYear => 1,
            ProbationKind::TwoYears => 2,
            ProbationKind::Custom { months } => {
                if months <= 18 {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Status of the required departmental test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    NotPassed,
    Exempted,
}

/// The departmental test tied to probation declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestInfo {
    pub name: String,
    pub status: TestStatus,
    pub passed_on: Option<NaiveDate>,
}

/// Probation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbationTerms {
    pub kind: ProbationKind,
    pub start: NaiveDate,
    pub test_required: bool,
    pub test: Option<TestInfo>,
}

/// An advance outstanding on the last pay certificate. Reported in the
/// employee details; does not enter the monthly deduction set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpcAdvance {
    pub name: String,
    pub outstanding: i64,
}

/// The complete career record for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub post: JoiningPost,
    pub date_of_birth: NaiveDate,
    pub retirement_age: RetirementAge,
    pub date_of_joining_service: NaiveDate,
    pub date_of_joining_office: NaiveDate,
    pub date_of_relief: Option<NaiveDate>,
    pub joining_pay: JoiningPay,
    pub selection_grade: Option<GradeAward>,
    pub special_grade: Option<GradeAward>,
    pub promotions: Vec<Promotion>,
    /// Increment schedule history; the entry in force at joining comes
    /// first. Must not be empty.
    pub increment_schedule: Vec<IncrementScheduleChange>,
    pub service_breaks: Vec<ServiceBreak>,
    pub account_tests: Vec<AccountTestPass>,
    pub allowances: FixedAllowances,
    pub probation: ProbationTerms,
    pub city_class: CityClass,
    /// Replaces every looked-up DA rate when set.
    pub da_override: Option<f64>,
    pub calculation_start: NaiveDate,
    pub calculation_end: NaiveDate,
    /// Months of service before the first increment is due. Default 6.
    pub increment_eligibility_months: Option<u32>,
    pub lpc_advances: Vec<LpcAdvance>,
}

impl EmployeeInput {
    /// The commission in force on a given date.
    pub fn commission_on(date: NaiveDate) -> Commission {
        use crate::core::time::ymd;
        if date < ymd(1986, 1, 1) {
            Commission::Third
        } else if date < ymd(1996, 1, 1) {
            Commission::Fourth
        } else if date < ymd(2006, 1, 1) {
            Commission::Fifth
        } else if date < ymd(2016, 1, 1) {
            Commission::Sixth
        } else {
            Commission::Seventh
        }
    }

    /// Months of service required before the first increment (default 6).
    pub fn eligibility_months(&self) -> u32 {
        self.increment_eligibility_months.unwrap_or(6)
    }

    /// Total postponement from breaks in service, calendar days.
    pub fn total_break_days(&self) -> i64 {
        self.service_breaks.iter().map(ServiceBreak::days).sum()
    }

    /// The effective end of simulation: the relief date caps the requested
    /// window when it comes first.
    pub fn effective_end(&self) -> NaiveDate {
        match self.date_of_relief {
            Some(relief) if relief < self.calculation_end => relief,
            _ => self.calculation_end,
        }
    }

    /// Validate the record against the reference tables.
    ///
    /// Checks the 1980 floor, window ordering, era consistency of the
    /// joining pay, scale/post/level resolvability, and promotion targets.
    pub fn validate(&self, tables: &ReferenceTables) -> Result<(), InputError> {
        for (field, date) in [
            ("date_of_birth", self.date_of_birth),
            ("date_of_joining_service", self.date_of_joining_service),
            ("date_of_joining_office", self.date_of_joining_office),
            ("calculation_start", self.calculation_start),
            ("calculation_end", self.calculation_end),
        ] {
            if date < MIN_SUPPORTED_DATE {
                return Err(InputError::DateBeforeFloor { field, date });
            }
        }

        if self.calculation_start > self.calculation_end {
            return Err(InputError::EmptyWindow {
                start: self.calculation_start,
                end: self.calculation_end,
            });
        }

        if self.increment_schedule.is_empty() {
            return Err(InputError::EmptySchedule);
        }

        for brk in &self.service_breaks {
            if brk.end < brk.start {
                return Err(InputError::InvalidBreak {
                    start: brk.start,
                    end: brk.end,
                });
            }
        }

        if let JoiningPost::Catalogued { id } = &self.post {
            if tables.post(id).is_none() {
                return Err(InputError::UnknownPost(id.clone()));
            }
        }

        let joining_commission = Self::commission_on(self.date_of_joining_service);
        match &self.joining_pay {
            JoiningPay::PreBand { scale_id, .. } => {
                let entry = tables
                    .scale(scale_id)
                    .ok_or_else(|| InputError::UnknownScale(scale_id.clone()))?;
                if entry.commission != joining_commission
                    || joining_commission >= Commission::Sixth
                {
                    return Err(InputError::JoiningPayEraMismatch {
                        commission: joining_commission,
                        date: self.date_of_joining_service,
                    });
                }
            }
            JoiningPay::Band { scale_id, .. } => {
                let entry = tables
                    .scale(scale_id)
                    .ok_or_else(|| InputError::UnknownScale(scale_id.clone()))?;
                if entry.commission != Commission::Sixth
                    || joining_commission != Commission::Sixth
                {
                    return Err(InputError::JoiningPayEraMismatch {
                        commission: joining_commission,
                        date: self.date_of_joining_service,
                    });
                }
            }
            JoiningPay::Matrix { level } => {
                if joining_commission != Commission::Seventh {
                    return Err(InputError::JoiningPayEraMismatch {
                        commission: joining_commission,
                        date: self.date_of_joining_service,
                    });
                }
                if tables.matrix_level(*level).is_none() {
                    return Err(InputError::UnknownLevel(*level));
                }
            }
        }

        for promotion in &self.promotions {
            match promotion.target {
                PromotionTarget::Level { level } => {
                    if tables.matrix_level(level).is_none() {
                        return Err(InputError::InvalidPromotion {
                            date: promotion.date,
                            reason: format!("unknown pay-matrix level {}", level),
                        });
                    }
                }
                PromotionTarget::GradePay { grade_pay } => {
                    if tables.sixth_scale_for_grade_pay(grade_pay).is_none() {
                        return Err(InputError::InvalidPromotion {
                            date: promotion.date,
                            reason: format!("no pay scale carries grade pay {}", grade_pay),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
