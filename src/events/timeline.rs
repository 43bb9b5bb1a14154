//! Timeline construction
//!
//! Derives the chronologically ordered event list for one career from the
//! employee record and the reference tables. Only events that can still
//! matter are emitted: nothing before the date of joining, nothing after
//! the effective end of simulation.

use super::types::CareerEvent;
use crate::core::time::ymd;
use crate::models::input::EmployeeInput;
use crate::models::pay::Commission;
use crate::tables::ReferenceTables;
use chrono::NaiveDate;

/// Commission-transition effective dates.
const TRANSITIONS: [(i32, Commission); 4] = [
    (1986, Commission::Fourth),
    (1996, Commission::Fifth),
    (2006, Commission::Sixth),
    (2016, Commission::Seventh),
];

/// Build the sorted event timeline for `input`.
///
/// The result is stably sorted by `(date, priority)`; same-month events of
/// equal priority keep their build order.
pub fn build_timeline(input: &EmployeeInput, tables: &ReferenceTables) -> Vec<CareerEvent> {
    let start = input.date_of_joining_service;
    let end = input.effective_end();
    let in_window = |date: NaiveDate| date > start && date <= end;
    let joining_commission = EmployeeInput::commission_on(start);

    let mut events = Vec::new();

    for rate in &tables.da_rates {
        if rate.effective > start && rate.effective <= end {
            events.push(CareerEvent::DaChange {
                date: rate.effective,
                series: rate.series,
                percent: rate.percent,
            });
        }
    }

    for (year, to) in TRANSITIONS {
        let date = ymd(year, 1, 1);
        if to > joining_commission && in_window(date) {
            events.push(CareerEvent::CommissionTransition { date, to });
        }
    }

    for revision in &tables.scale_revisions {
        if in_window(revision.effective) {
            events.push(CareerEvent::ScaleRevision {
                revision: revision.clone(),
            });
        }
    }

    if let Some(award) = input.selection_grade {
        if award.effective_date <= end {
            events.push(CareerEvent::SelectionGrade {
                date: award.effective_date,
                with_fixation: award.with_fixation,
            });
        }
    }

    if let Some(award) = input.special_grade {
        if award.effective_date <= end {
            events.push(CareerEvent::SpecialGrade {
                date: award.effective_date,
                with_fixation: award.with_fixation,
            });
        }
    }

    for promotion in &input.promotions {
        if promotion.date <= end {
            events.push(CareerEvent::Promotion {
                promotion: promotion.clone(),
            });
        }
    }

    for test in &input.account_tests {
        if test.date <= end {
            events.push(CareerEvent::AccountTestPass {
                date: test.date,
                description: test.description.clone(),
            });
        }
    }

    events.sort_by_key(|event| (event.date(), event.priority()));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ymd;
    use crate::models::input::{
        CityClass, FixedAllowances, IncrementMonth, IncrementScheduleChange, JoiningPay,
        JoiningPost, ProbationKind, ProbationTerms, RetirementAge,
    };

    fn seventh_pc_input() -> EmployeeInput {
        EmployeeInput {
            name: "R. Kumar".to_string(),
            post: JoiningPost::Custom {
                name: "Junior Assistant".to_string(),
            },
            date_of_birth: ymd(1990, 6, 15),
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
    fn test_timeline_only_contains_window_events() {
        let tables = ReferenceTables::builtin();
        let events = build_timeline(&seventh_pc_input(), &tables);

        assert!(!events.is_empty());
        for event in &events {
            assert!(event.date() > ymd(2018, 7, 1));
            assert!(event.date() <= ymd(2019, 12, 31));
        }
        // A 7th-commission entrant sees no commission transitions.
        assert!(!events
            .iter()
            .any(|e| matches!(e, CareerEvent::CommissionTransition { .. })));
    }

    #[test]
    fn test_timeline_is_sorted_by_date_then_priority() {
        let tables = ReferenceTables::builtin();
        let mut input = seventh_pc_input();
        input.date_of_joining_service = ymd(2014, 1, 1);
        input.date_of_joining_office = ymd(2014, 1, 1);
        input.joining_pay = JoiningPay::Band {
            scale_id: "B-4".to_string(),
            pipb: 9300,
        };

        let events = build_timeline(&input, &tables);
        let keys: Vec<_> = events.iter().map(|e| (e.date(), e.priority())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        // 2016-01-01 carries both DA changes and the 6th→7th fixation; the
        // DA entries must come first in the build order.
        let jan_2016: Vec<_> = events
            .iter()
            .filter(|e| e.date() == ymd(2016, 1, 1))
            .collect();
        assert!(jan_2016.len() >= 2);
        assert!(matches!(jan_2016[0], CareerEvent::DaChange { .. }));
        assert!(matches!(
            jan_2016.last().unwrap(),
            CareerEvent::CommissionTransition { .. }
        ));
    }
}
