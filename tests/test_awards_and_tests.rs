//! End-to-end: selection grade, account-test increments, promotions
//!
//! Stagnation awards move pay by one or two notional increments (and set a
//! flag so the annual increment cannot fire in the same month); an
//! account-test pass rides one extra increment on the next scheduled grant;
//! a promotion re-fixes the notionally incremented pay in the new level.

use chrono::NaiveDate;
use tn_payroll_engine::models::input::{
    AccountTestPass, CityClass, EmployeeInput, FixedAllowances, GradeAward, IncrementMonth,
    IncrementScheduleChange, JoiningPay, JoiningPost, ProbationKind, ProbationTerms, Promotion,
    PromotionTarget, RetirementAge,
};
use tn_payroll_engine::{run_payroll, ReferenceTables};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seventh_pc_clerk() -> EmployeeInput {
    EmployeeInput {
        name: "P. Selvam".to_string(),
        post: JoiningPost::Custom {
            name: "Junior Assistant".to_string(),
        },
        date_of_birth: ymd(1992, 12, 1),
        retirement_age: RetirementAge::FiftyEight,
        date_of_joining_service: ymd(2018, 7, 1),
        date_of_joining_office: ymd(2018, 7, 1),
        date_of_relief: None,
        joining_pay: JoiningPay::Matrix { level: 7 },
        selection_grade: None,
        special_grade: None,
        promotions: Vec::new(),
        increment_schedule: vec![IncrementScheduleChange {
            effective_date: ymd(2018, 7, 1),
            month: IncrementMonth::July,
        }],
        service_breaks: Vec::new(),
        account_tests: Vec::new(),
        allowances: FixedAllowances {
            medical: 300,
            cps_gpf_percent: 10.0,
            professional_tax: 200,
            gis: 180,
        },
        probation: ProbationTerms {
            kind: ProbationKind::TwoYears,
            start: ymd(2018, 7, 1),
            test_required: false,
            test: None,
        },
        city_class: CityClass::B,
        da_override: None,
        calculation_start: ymd(2018, 7, 1),
        calculation_end: ymd(2020, 12, 31),
        increment_eligibility_months: None,
        lpc_advances: Vec::new(),
    }
}

#[test]
fn test_selection_grade_with_fixation_moves_two_cells() {
    let tables = ReferenceTables::builtin();
    let mut input = seventh_pc_clerk();
    input.selection_grade = Some(GradeAward {
        effective_date: ymd(2020, 4, 1),
        with_fixation: true,
    });
    let result = run_payroll(&input, &tables).unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;

    // March 2020: one annual increment so far (July 2019) → cell index 1.
    let march = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 3))
        .unwrap();
    assert_eq!(march.basic_pay, cells[1]);

    // April 2020: the award jumps two cells.
    let april = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 4))
        .unwrap();
    assert_eq!(april.basic_pay, cells[3]);
    assert!(april.remarks.iter().any(|r| r.contains("Selection Grade")));

    // The July annual increment still lands in its own month.
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 7))
        .unwrap();
    assert_eq!(july.basic_pay, cells[4]);

    assert_eq!(result.increment_analysis.selection_grade, 2);
    assert_eq!(result.increment_analysis.regular, 2);
    assert_eq!(result.increment_analysis.total, 4);
}

#[test]
fn test_award_displaces_annual_increment_in_same_month() {
    let tables = ReferenceTables::builtin();
    let mut input = seventh_pc_clerk();
    input.selection_grade = Some(GradeAward {
        effective_date: ymd(2020, 7, 10),
        with_fixation: false,
    });
    let result = run_payroll(&input, &tables).unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;

    // July 2020: only the award's single increment, not the annual one.
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 7))
        .unwrap();
    assert_eq!(july.basic_pay, cells[2]);

    // The schedule is unchanged, so the displaced annual grant lands the
    // following month.
    let august = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 8))
        .unwrap();
    assert_eq!(august.basic_pay, cells[3]);

    assert_eq!(result.increment_analysis.selection_grade, 1);
    assert_eq!(result.increment_analysis.regular, 2);
}

#[test]
fn test_account_test_rides_extra_increment() {
    let tables = ReferenceTables::builtin();
    let mut input = seventh_pc_clerk();
    input.account_tests = vec![AccountTestPass {
        date: ymd(2019, 3, 10),
        description: "Account Test for Subordinate Officers".to_string(),
    }];
    input.calculation_end = ymd(2019, 12, 31);
    let result = run_payroll(&input, &tables).unwrap();

    let cells = &tables.matrix_level(7).unwrap().cells;

    // The pass is noted in its own month...
    let march = result
        .periods()
        .find(|p| (p.year, p.month) == (2019, 3))
        .unwrap();
    assert_eq!(march.basic_pay, cells[0]);
    assert!(march.remarks.iter().any(|r| r.contains("Account Test")));

    // ...and pays out two cells on the scheduled date.
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2019, 7))
        .unwrap();
    assert_eq!(july.basic_pay, cells[2]);

    assert_eq!(result.increment_analysis.regular, 1);
    assert_eq!(result.increment_analysis.account_test, 1);
    assert_eq!(result.increment_analysis.total, 2);
}

#[test]
fn test_promotion_refixes_into_target_level() {
    let tables = ReferenceTables::builtin();
    let mut input = seventh_pc_clerk();
    input.promotions = vec![Promotion {
        date: ymd(2020, 5, 4),
        post_name: "Assistant".to_string(),
        target: PromotionTarget::Level { level: 8 },
    }];
    let result = run_payroll(&input, &tables).unwrap();

    // May 2020: notional cell up in Level 7, fitted into Level 8's entry.
    let may = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 5))
        .unwrap();
    assert_eq!(may.level, Some(8));
    assert_eq!(may.basic_pay, tables.matrix_level(8).unwrap().cells[0]);
    assert!(may.remarks.iter().any(|r| r.contains("Promoted as Assistant")));

    // The July annual increment then moves within Level 8.
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2020, 7))
        .unwrap();
    assert_eq!(july.basic_pay, tables.matrix_level(8).unwrap().cells[1]);

    assert_eq!(result.increment_analysis.promotion, 1);
}

#[test]
fn test_increment_totals_reconcile() {
    let tables = ReferenceTables::builtin();
    let mut input = seventh_pc_clerk();
    input.selection_grade = Some(GradeAward {
        effective_date: ymd(2020, 4, 1),
        with_fixation: true,
    });
    input.account_tests = vec![AccountTestPass {
        date: ymd(2019, 3, 10),
        description: "Account Test for Subordinate Officers".to_string(),
    }];
    let result = run_payroll(&input, &tables).unwrap();

    let analysis = result.increment_analysis;
    assert_eq!(
        analysis.total,
        analysis.regular
            + analysis.selection_grade
            + analysis.special_grade
            + analysis.promotion
            + analysis.account_test
    );
}
