//! Probation and departmental-test increment rules
//!
//! Whether a numbered annual increment may be drawn depends on the
//! probation declared for the post and the departmental test tied to it:
//!
//! - no test required: every increment is drawn on its normal date;
//! - one-year probation: the 1st increment waits for the test pass;
//! - two-year probation: the 2nd increment waits for the test pass;
//! - test still not passed five years into probation: probation stands
//!   terminated. The simulation keeps running so the operator can see the
//!   pay that would have been drawn; the remark is the warning channel.
//!
//! Decisions are pure data, evaluated against the immutable input record.

use crate::core::time::{add_years, format_dmy};
use crate::models::input::{ProbationTerms, TestStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one numbered increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncrementDecision {
    /// May the increment be drawn at all (now or once `effective_date`
    /// arrives)?
    pub eligible: bool,

    /// Earliest date the increment may take effect. Meaningful only when
    /// `eligible`.
    pub effective_date: NaiveDate,

    /// The increment is withheld pending the departmental test.
    pub withheld: bool,

    /// The five-year termination rule has triggered.
    pub terminated: bool,

    /// Narrative for the month's pay record.
    pub remark: Option<String>,
}

impl IncrementDecision {
    fn granted(effective_date: NaiveDate) -> Self {
        IncrementDecision {
            eligible: true,
            effective_date,
            withheld: false,
            terminated: false,
            remark: None,
        }
    }
}

/// Evaluate eligibility of the increment numbered `ordinal` (1-based count
/// of regular increments) falling due on `normal_date`.
pub fn evaluate_increment_eligibility(
    probation: &ProbationTerms,
    ordinal: u32,
    normal_date: NaiveDate,
) -> IncrementDecision {
    let test_satisfied = !probation.test_required
        || matches!(
            probation.test.as_ref().map(|t| t.status),
            Some(TestStatus::Passed) | Some(TestStatus::Exempted)
        );

    // Hard stop: required test still outstanding five years into probation.
    if probation.test_required
        && !test_satisfied
        && normal_date > add_years(probation.start, 5)
    {
        return IncrementDecision {
            eligible: false,
            effective_date: normal_date,
            withheld: false,
            terminated: true,
            remark: Some(format!(
                "PROBATION TERMINATED: departmental test not passed within five years of probation commencing {}",
                format_dmy(probation.start)
            )),
        };
    }

    if !probation.test_required {
        return IncrementDecision::granted(normal_date);
    }

    let gated_ordinal = probation.kind.effective_years();
    if ordinal != gated_ordinal {
        return IncrementDecision::granted(normal_date);
    }

    if !test_satisfied {
        return IncrementDecision {
            eligible: false,
            effective_date: normal_date,
            withheld: true,
            terminated: false,
            remark: Some(format!(
                "Increment No.{} withheld: departmental test not passed",
                ordinal
            )),
        };
    }

    // Test passed (or exempted): the gated increment takes effect on the
    // later of its normal date and the pass date.
    let pass_date = probation
        .test
        .as_ref()
        .and_then(|t| t.passed_on)
        .unwrap_or(normal_date);
    let effective = pass_date.max(normal_date);
    let mut decision = IncrementDecision::granted(effective);
    if effective > normal_date {
        decision.remark = Some(format!(
            "Increment No.{} withheld pending the departmental test; takes effect from {}",
            ordinal,
            format_dmy(effective)
        ));
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ymd;
    use crate::models::input::{ProbationKind, TestInfo};

    fn terms(
        kind: ProbationKind,
        start: NaiveDate,
        test_required: bool,
        status: Option<TestStatus>,
        passed_on: Option<NaiveDate>,
    ) -> ProbationTerms {
        ProbationTerms {
            kind,
            start,
            test_required,
            test: status.map(|status| TestInfo {
                name: "Account Test for Subordinate Officers".to_string(),
                status,
                passed_on,
            }),
        }
    }

    #[test]
    fn test_no_test_required_always_eligible() {
        let p = terms(ProbationKind::TwoYears, ymd(2018, 7, 1), false, None, None);
        let d = evaluate_increment_eligibility(&p, 1, ymd(2019, 7, 1));
        assert!(d.eligible);
        assert_eq!(d.effective_date, ymd(2019, 7, 1));
        assert!(!d.withheld);
    }

    #[test]
    fn test_first_increment_withheld_without_pass() {
        let p = terms(
            ProbationKind::OneYear,
            ymd(2018, 7, 1),
            true,
            Some(TestStatus::NotPassed),
            None,
        );
        let d = evaluate_increment_eligibility(&p, 1, ymd(2019, 7, 1));
        assert!(!d.eligible);
        assert!(d.withheld);
        assert!(d.remark.as_deref().unwrap().contains("withheld"));
    }

    #[test]
    fn test_first_increment_deferred_to_pass_date() {
        let p = terms(
            ProbationKind::OneYear,
            ymd(2018, 7, 1),
            true,
            Some(TestStatus::Passed),
            Some(ymd(2019, 11, 15)),
        );
        let d = evaluate_increment_eligibility(&p, 1, ymd(2019, 7, 1));
        assert!(d.eligible);
        assert_eq!(d.effective_date, ymd(2019, 11, 15));
    }

    #[test]
    fn test_two_year_probation_gates_second_increment() {
        let p = terms(
            ProbationKind::TwoYears,
            ymd(2018, 7, 1),
            true,
            Some(TestStatus::NotPassed),
            None,
        );
        // 1st increment is free.
        assert!(evaluate_increment_eligibility(&p, 1, ymd(2019, 7, 1)).eligible);
        // 2nd is gated.
        assert!(!evaluate_increment_eligibility(&p, 2, ymd(2020, 7, 1)).eligible);
    }

    #[test]
    fn test_custom_probation_maps_to_years() {
        assert_eq!(ProbationKind::Custom { months: 12 }.effective_years(), 1);
        assert_eq!(ProbationKind::Custom { months: 18 }.effective_years(), 1);
        assert_eq!(ProbationKind::Custom { months: 24 }.effective_years(), 2);
    }

    #[test]
    fn test_exemption_counts_as_pass() {
        let p = terms(
            ProbationKind::OneYear,
            ymd(2018, 7, 1),
            true,
            Some(TestStatus::Exempted),
            None,
        );
        let d = evaluate_increment_eligibility(&p, 1, ymd(2019, 7, 1));
        assert!(d.eligible);
        assert_eq!(d.effective_date, ymd(2019, 7, 1));
    }

    #[test]
    fn test_five_year_termination() {
        let p = terms(
            ProbationKind::OneYear,
            ymd(2015, 7, 1),
            true,
            Some(TestStatus::NotPassed),
            None,
        );
        let d = evaluate_increment_eligibility(&p, 1, ymd(2020, 8, 1));
        assert!(!d.eligible);
        assert!(d.terminated);
        assert!(d.remark.as_deref().unwrap().contains("PROBATION TERMINATED"));
    }

    #[test]
    fn test_five_year_rule_ignored_once_test_passed() {
        let p = terms(
            ProbationKind::OneYear,
            ymd(2015, 7, 1),
            true,
            Some(TestStatus::Passed),
            Some(ymd(2016, 1, 10)),
        );
        let d = evaluate_increment_eligibility(&p, 1, ymd(2020, 8, 1));
        assert!(d.eligible);
        assert!(!d.terminated);
    }
}
