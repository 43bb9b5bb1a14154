//! End-to-end: breaks in service postpone the first increment
//!
//! The total break days are added, once, to the first scheduled increment
//! date. A 60-day break turns a 2021-07-01 due date into 2021-08-30, so the
//! grant lands in September.

use chrono::NaiveDate;
use tn_payroll_engine::models::input::{
    CityClass, EmployeeInput, FixedAllowances, IncrementMonth, IncrementScheduleChange,
    JoiningPay, JoiningPost, ProbationKind, ProbationTerms, RetirementAge, ServiceBreak,
};
use tn_payroll_engine::{run_payroll, ReferenceTables};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn input_with_breaks(breaks: Vec<ServiceBreak>) -> EmployeeInput {
    EmployeeInput {
        name: "V. Anand".to_string(),
        post: JoiningPost::Custom {
            name: "Record Assistant".to_string(),
        },
        date_of_birth: ymd(1996, 4, 2),
        retirement_age: RetirementAge::Sixty,
        date_of_joining_service: ymd(2020, 7, 1),
        date_of_joining_office: ymd(2020, 7, 1),
        date_of_relief: None,
        joining_pay: JoiningPay::Matrix { level: 7 },
        selection_grade: None,
        special_grade: None,
        promotions: Vec::new(),
        increment_schedule: vec![IncrementScheduleChange {
            effective_date: ymd(2020, 7, 1),
            month: IncrementMonth::July,
        }],
        service_breaks: breaks,
        account_tests: Vec::new(),
        allowances: FixedAllowances {
            medical: 300,
            cps_gpf_percent: 10.0,
            professional_tax: 200,
            gis: 180,
        },
        probation: ProbationTerms {
            kind: ProbationKind::TwoYears,
            start: ymd(2020, 7, 1),
            test_required: false,
            test: None,
        },
        city_class: CityClass::C,
        da_override: None,
        calculation_start: ymd(2020, 7, 1),
        calculation_end: ymd(2021, 12, 31),
        increment_eligibility_months: None,
        lpc_advances: Vec::new(),
    }
}

#[test]
fn test_unbroken_service_increments_in_july() {
    let tables = ReferenceTables::builtin();
    let result = run_payroll(&input_with_breaks(Vec::new()), &tables).unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2021, 7))
        .unwrap();
    assert_eq!(july.basic_pay, cells[1]);
}

#[test]
fn test_sixty_day_break_defers_grant_to_september() {
    let tables = ReferenceTables::builtin();
    // 2021-01-01 .. 2021-03-01 inclusive is 60 calendar days.
    let result = run_payroll(
        &input_with_breaks(vec![ServiceBreak {
            start: ymd(2021, 1, 1),
            end: ymd(2021, 3, 1),
        }]),
        &tables,
    )
    .unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;

    // The shifted due date 2021-08-30 has not arrived on 1 July or 1 Aug.
    for (month, expected) in [(7, cells[0]), (8, cells[0]), (9, cells[1])] {
        let period = result
            .periods()
            .find(|p| (p.year, p.month) == (2021, month))
            .unwrap();
        assert_eq!(period.basic_pay, expected, "month {}", month);
    }
    assert_eq!(result.increment_analysis.regular, 1);
}

#[test]
fn test_multiple_breaks_accumulate() {
    let tables = ReferenceTables::builtin();
    // 31 + 30 = 61 days pushes the due date to 2021-08-31.
    let result = run_payroll(
        &input_with_breaks(vec![
            ServiceBreak {
                start: ymd(2021, 1, 1),
                end: ymd(2021, 1, 31),
            },
            ServiceBreak {
                start: ymd(2021, 4, 1),
                end: ymd(2021, 4, 30),
            },
        ]),
        &tables,
    )
    .unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;
    let august = result
        .periods()
        .find(|p| (p.year, p.month) == (2021, 8))
        .unwrap();
    assert_eq!(august.basic_pay, cells[0]);
    let september = result
        .periods()
        .find(|p| (p.year, p.month) == (2021, 9))
        .unwrap();
    assert_eq!(september.basic_pay, cells[1]);
}
