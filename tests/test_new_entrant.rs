//! End-to-end: a 7th-commission new entrant
//!
//! Joining 2018-07-01 at Level 7 with a July increment schedule and the
//! default six-month eligibility: pay starts at the level's entry cell and
//! the first annual increment lands on 2019-07-01.

use chrono::NaiveDate;
use tn_payroll_engine::models::input::{
    CityClass, EmployeeInput, FixedAllowances, IncrementMonth, IncrementScheduleChange,
    JoiningPay, JoiningPost, ProbationKind, ProbationTerms, RetirementAge,
};
use tn_payroll_engine::{run_payroll, ReferenceTables};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_entrant() -> EmployeeInput {
    EmployeeInput {
        name: "R. Kumar".to_string(),
        post: JoiningPost::Custom {
            name: "Junior Assistant".to_string(),
        },
        date_of_birth: ymd(1994, 2, 10),
        retirement_age: RetirementAge::Sixty,
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
        calculation_end: ymd(2019, 12, 31),
        increment_eligibility_months: None,
        lpc_advances: Vec::new(),
    }
}

#[test]
fn test_first_period_starts_at_level_entry_cell() {
    let tables = ReferenceTables::builtin();
    let result = run_payroll(&new_entrant(), &tables).unwrap();

    let first = result.periods().next().unwrap();
    assert_eq!((first.year, first.month), (2018, 7));
    assert_eq!(first.basic_pay, tables.matrix_level(7).unwrap().cells[0]);
    assert_eq!(first.basic_pay, 19500);
    assert_eq!(first.level, Some(7));
}

#[test]
fn test_first_increment_on_schedule() {
    let tables = ReferenceTables::builtin();
    let result = run_payroll(&new_entrant(), &tables).unwrap();

    let june = result
        .periods()
        .find(|p| (p.year, p.month) == (2019, 6))
        .unwrap();
    let july = result
        .periods()
        .find(|p| (p.year, p.month) == (2019, 7))
        .unwrap();

    assert_eq!(june.basic_pay, tables.matrix_level(7).unwrap().cells[0]);
    assert_eq!(july.basic_pay, tables.matrix_level(7).unwrap().cells[1]);
    assert_eq!(july.basic_pay, 20100);

    assert_eq!(result.increment_analysis.regular, 1);
    assert_eq!(result.increment_analysis.total, 1);
}

#[test]
fn test_monthly_record_arithmetic() {
    let tables = ReferenceTables::builtin();
    let input = new_entrant();
    let result = run_payroll(&input, &tables).unwrap();

    for period in result.periods() {
        assert_eq!(
            period.gross_pay,
            period.basic_pay + period.da_amount + period.hra + period.cca
                + period.medical_allowance
        );
        let deduction_sum: i64 = period.deductions.iter().map(|d| d.amount).sum();
        assert_eq!(period.total_deductions, deduction_sum);
        assert_eq!(period.net_pay, period.gross_pay - period.total_deductions);
        // CCA is merged under the 7th commission.
        assert_eq!(period.cca, 0);
        // CPS/GPF is always the first deduction line.
        assert_eq!(period.deductions[0].name, "CPS/GPF");
    }
}

#[test]
fn test_period_count_and_yearly_grouping() {
    let result = run_payroll(&new_entrant(), &ReferenceTables::builtin()).unwrap();

    // Jul 2018 .. Dec 2019 inclusive.
    assert_eq!(result.periods().count(), 18);
    assert_eq!(result.yearly_calculations.len(), 2);
    assert_eq!(result.yearly_calculations[0].year, 2018);
    assert_eq!(result.yearly_calculations[0].periods.len(), 6);
    assert_eq!(result.yearly_calculations[1].periods.len(), 12);
}

#[test]
fn test_shorter_window_is_prefix_of_longer() {
    let tables = ReferenceTables::builtin();

    let mut short = new_entrant();
    short.calculation_end = ymd(2019, 3, 31);
    let short_result = run_payroll(&short, &tables).unwrap();

    let long_result = run_payroll(&new_entrant(), &tables).unwrap();

    let short_periods: Vec<_> = short_result.periods().collect();
    let long_periods: Vec<_> = long_result.periods().collect();
    assert_eq!(short_periods.len(), 9);
    for (a, b) in short_periods.iter().zip(long_periods.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_da_override_matches_looked_up_rate() {
    let tables = ReferenceTables::builtin();

    // Jan-Jun 2019 draws a constant 12% DA, so overriding with 12% must
    // reproduce the exact same numbers.
    let mut plain = new_entrant();
    plain.calculation_start = ymd(2019, 1, 1);
    plain.calculation_end = ymd(2019, 6, 30);
    let baseline = run_payroll(&plain, &tables).unwrap();

    let mut overridden_input = plain.clone();
    overridden_input.da_override = Some(12.0);
    let overridden = run_payroll(&overridden_input, &tables).unwrap();

    let base_periods: Vec<_> = baseline.periods().collect();
    let over_periods: Vec<_> = overridden.periods().collect();
    assert_eq!(base_periods.len(), over_periods.len());

    for (index, (a, b)) in base_periods.iter().zip(over_periods.iter()).enumerate() {
        assert_eq!(a.da_rate, b.da_rate);
        assert_eq!(a.da_amount, b.da_amount);
        assert_eq!(a.net_pay, b.net_pay);
        if index == 0 {
            // The override announces itself once, ahead of any other remark.
            assert!(b.remarks[0].contains("DA Override applied"));
            assert_eq!(&b.remarks[1..], &a.remarks[..]);
        } else {
            assert_eq!(a.remarks, b.remarks);
        }
    }
}

#[test]
fn test_relief_date_caps_the_window() {
    let tables = ReferenceTables::builtin();
    let mut input = new_entrant();
    input.date_of_relief = Some(ymd(2019, 2, 28));

    let result = run_payroll(&input, &tables).unwrap();
    let last = result.periods().last().unwrap();
    assert_eq!((last.year, last.month), (2019, 2));
}
