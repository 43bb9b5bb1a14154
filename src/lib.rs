//! Tamil Nadu Payroll Engine
//!
//! Deterministic month-by-month salary history for a single Tamil Nadu
//! government employee, honouring the succession of pay commissions (3rd to
//! 7th), statutory increments, promotions, selection/special grade awards,
//! probation-linked withholding, departmental tests and breaks in service.
//!
//! # Architecture
//!
//! - **core**: calendar time primitives
//! - **tables**: read-only reference data (scales, matrix, DA/HRA/CCA, orders)
//! - **models**: domain types (input record, pay structure, state, results)
//! - **pay**: scale/matrix/band operators and allowance lookup
//! - **policy**: probation and departmental-test increment rules
//! - **fixation**: cross-commission fixation, awards, promotions
//! - **orchestrator**: the monthly simulation loop
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupees)
//! 2. The simulation is purely computational: no I/O, no randomness, no
//!    global state; identical input and tables give bit-identical output
//! 3. Failures are fatal and synchronous; remarks are the only narrative
//!    channel
//!
//! # Example
//!
//! ```rust
//! use tn_payroll_engine::{run_payroll, ReferenceTables};
//! # use tn_payroll_engine::models::input::*;
//! # use chrono::NaiveDate;
//! # fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
//! #     NaiveDate::from_ymd_opt(y, m, d).unwrap()
//! # }
//!
//! let input = EmployeeInput {
//!     name: "R. Kumar".to_string(),
//!     post: JoiningPost::Custom { name: "Junior Assistant".to_string() },
//!     date_of_birth: ymd(1990, 6, 15),
//!     retirement_age: RetirementAge::Sixty,
//!     date_of_joining_service: ymd(2018, 7, 1),
//!     date_of_joining_office: ymd(2018, 7, 1),
//!     date_of_relief: None,
//!     joining_pay: JoiningPay::Matrix { level: 7 },
//!     selection_grade: None,
//!     special_grade: None,
//!     promotions: Vec::new(),
//!     increment_schedule: vec![IncrementScheduleChange {
//!         effective_date: ymd(2018, 7, 1),
//!         month: IncrementMonth::July,
//!     }],
//!     service_breaks: Vec::new(),
//!     account_tests: Vec::new(),
//!     allowances: FixedAllowances {
//!         medical: 300,
//!         cps_gpf_percent: 10.0,
//!         professional_tax: 200,
//!         gis: 180,
//!     },
//!     probation: ProbationTerms {
//!         kind: ProbationKind::TwoYears,
//!         start: ymd(2018, 7, 1),
//!         test_required: false,
//!         test: None,
//!     },
//!     city_class: CityClass::B,
//!     da_override: None,
//!     calculation_start: ymd(2018, 7, 1),
//!     calculation_end: ymd(2019, 12, 31),
//!     increment_eligibility_months: None,
//!     lpc_advances: Vec::new(),
//! };
//!
//! let result = run_payroll(&input, &ReferenceTables::builtin()).unwrap();
//! assert_eq!(result.periods().count(), 18);
//! ```

// Module declarations
pub mod core;
pub mod events;
pub mod fixation;
pub mod format;
pub mod models;
pub mod orchestrator;
pub mod pay;
pub mod policy;
pub mod tables;

// Re-exports for convenience
pub use models::{
    input::{EmployeeInput, InputError},
    pay::{Commission, PayStructure},
    result::{IncrementAnalysis, PayrollPeriod, PayrollResult},
    state::SimulationState,
};
pub use orchestrator::{run_payroll, SimulationError, Simulator};
pub use tables::ReferenceTables;
