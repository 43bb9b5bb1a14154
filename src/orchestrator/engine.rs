//! Simulator engine
//!
//! The monthly loop integrating all components:
//!
//! ```text
//! For each month m from joining to the effective end:
//! 1. Apply the month's events in (date, priority) order
//!    (DA changes, fixations, revisions, awards, promotions, test passes)
//! 2. Grant the annual increment if due and not displaced by an award
//! 3. Emit the monthly pay record when inside the calculation window
//! 4. Advance one calendar month (UTC)
//! ```
//!
//! The engine is purely computational: single-threaded, no I/O, no global
//! state. Identical input and tables produce bit-identical output.

use crate::core::time::{
    add_days, add_months, add_years, format_dmy, last_day_of_month, month_key, month_name,
    same_month, with_month_day_one, ymd,
};
use crate::events::{build_timeline, CareerEvent};
use crate::fixation::{
    apply_grade_award, apply_promotion, apply_scale_revision, apply_transition, AwardKind,
    FixationError,
};
use crate::format::format_inr;
use crate::models::input::{
    CityClass, EmployeeInput, InputError, JoiningPay, JoiningPost, ProbationKind, TestStatus,
};
use crate::models::pay::{Commission, PayStructure};
use crate::models::result::{
    AppliedRevision, DeductionLine, EmployeeDetails, FixationSnapshot, LpcAdvanceLine,
    PayrollPeriod, PayrollResult, YearlyCalculation,
};
use crate::models::state::SimulationState;
use crate::pay::allowance::{lookup_cca, lookup_da, lookup_hra};
use crate::pay::operators::{increment_in_band, increment_in_matrix, round_rupees};
use crate::pay::scale::ParsedScale;
use crate::policy::evaluate_increment_eligibility;
use crate::tables::{DaSeries, ReferenceTables};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Umbrella error for a simulation run. Every failure is fatal; the engine
/// never returns a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fixation(#[from] FixationError),
}

/// Compute the full payroll history for one employee.
///
/// The single entry point of the engine: validates the record, seeds the
/// state at the date of joining, replays the career month by month and
/// assembles the grouped result.
pub fn run_payroll(
    input: &EmployeeInput,
    tables: &ReferenceTables,
) -> Result<PayrollResult, SimulationError> {
    Simulator::new(input, tables)?.run()
}

/// The event-driven monthly simulator.
pub struct Simulator<'a> {
    input: &'a EmployeeInput,
    tables: &'a ReferenceTables,
    state: SimulationState,
    events: Vec<CareerEvent>,
    fixation_fourth: Option<FixationSnapshot>,
    fixation_fifth: Option<FixationSnapshot>,
    fixation_sixth: Option<FixationSnapshot>,
    fixation_seventh: Option<FixationSnapshot>,
    applied_revisions: Vec<AppliedRevision>,
    periods: Vec<PayrollPeriod>,
    da_override_noted: bool,
}

impl<'a> Simulator<'a> {
    /// Validate the input and seed the simulation state at the date of
    /// joining.
    pub fn new(
        input: &'a EmployeeInput,
        tables: &'a ReferenceTables,
    ) -> Result<Self, SimulationError> {
        input.validate(tables)?;

        let doj = input.date_of_joining_service;
        let commission = EmployeeInput::commission_on(doj);

        let structure = match &input.joining_pay {
            JoiningPay::PreBand { scale_id, basic_pay } => {
                let entry = tables
                    .scale(scale_id)
                    .ok_or_else(|| InputError::UnknownScale(scale_id.clone()))?;
                PayStructure::Scale {
                    scale_id: entry.id.clone(),
                    scale: entry.scale.clone(),
                    ordinary_scale_id: entry.id.clone(),
                    basic_pay: *basic_pay,
                }
            }
            JoiningPay::Band { scale_id, pipb } => {
                let entry = tables
                    .scale(scale_id)
                    .ok_or_else(|| InputError::UnknownScale(scale_id.clone()))?;
                let grade_pay = entry
                    .grade_pay
                    .ok_or_else(|| FixationError::MissingGradePay(entry.id.clone()))?;
                PayStructure::Band {
                    pipb: *pipb,
                    grade_pay,
                }
            }
            JoiningPay::Matrix { level } => {
                let matrix = tables
                    .matrix_level(*level)
                    .ok_or(FixationError::MissingMatrixLevel(*level))?;
                PayStructure::Matrix {
                    level: *level,
                    basic_pay: matrix.cells[0],
                }
            }
        };

        let post = match &input.post {
            JoiningPost::Catalogued { id } => tables
                .post(id)
                .map(|p| p.name.clone())
                .ok_or_else(|| InputError::UnknownPost(id.clone()))?,
            JoiningPost::Custom { name } => name.clone(),
        };

        let da_rate = input
            .da_override
            .unwrap_or_else(|| lookup_da(tables, commission, doj));

        let first_increment = first_scheduled_increment(input);
        let state = SimulationState::new(doj, commission, structure, post, da_rate, first_increment);

        Ok(Simulator {
            events: build_timeline(input, tables),
            input,
            tables,
            state,
            fixation_fourth: None,
            fixation_fifth: None,
            fixation_sixth: None,
            fixation_seventh: None,
            applied_revisions: Vec::new(),
            periods: Vec::new(),
            da_override_noted: false,
        })
    }

    /// Run the monthly loop to the effective end and assemble the result.
    pub fn run(mut self) -> Result<PayrollResult, SimulationError> {
        let end = self.input.effective_end();

        while month_key(self.state.current_date) <= month_key(end) {
            self.state.begin_month();

            // STEP 1: EVENTS
            // The timeline is globally sorted by (date, priority); filtering
            // preserves that order within the month.
            let month_events: Vec<CareerEvent> = self
                .events
                .iter()
                .filter(|event| same_month(event.date(), self.state.current_date))
                .cloned()
                .collect();
            for event in month_events {
                self.apply_event(event)?;
            }

            // STEP 2: ANNUAL INCREMENT
            // A selection/special-grade award displaces the annual grant for
            // the month without shifting the schedule.
            if !self.state.award_fired_this_month
                && self.state.current_date >= self.state.next_increment_date
            {
                self.annual_increment()?;
            }

            // STEP 3: MONTHLY RECORD
            if self.state.current_date >= self.input.calculation_start {
                self.emit_period();
            }

            // STEP 4: ADVANCE TIME
            self.state.current_date = add_months(self.state.current_date, 1);
        }

        Ok(self.assemble())
    }

    // ========================================================================
    // Event Application
    // ========================================================================

    fn apply_event(&mut self, event: CareerEvent) -> Result<(), SimulationError> {
        match event {
            CareerEvent::DaChange { series, percent, .. } => {
                // The override pins the rate for the whole run.
                if self.input.da_override.is_none()
                    && series == DaSeries::for_commission(self.state.commission)
                {
                    self.state.da_rate = percent;
                }
            }

            CareerEvent::CommissionTransition { date, to } => {
                let snapshot = apply_transition(&mut self.state, to, date, self.tables)?;
                match to {
                    Commission::Fourth => self.fixation_fourth = Some(snapshot),
                    Commission::Fifth => self.fixation_fifth = Some(snapshot),
                    Commission::Sixth => self.fixation_sixth = Some(snapshot),
                    Commission::Seventh => self.fixation_seventh = Some(snapshot),
                    Commission::Third => {}
                }
                // The new commission reads its own DA series from this date.
                self.state.da_rate = self
                    .input
                    .da_override
                    .unwrap_or_else(|| lookup_da(self.tables, to, date));
            }

            CareerEvent::ScaleRevision { revision } => {
                if let Some(applied) = apply_scale_revision(&mut self.state, &revision)? {
                    self.applied_revisions.push(applied);
                }
            }

            CareerEvent::SelectionGrade { date, with_fixation } => {
                apply_grade_award(
                    &mut self.state,
                    AwardKind::Selection,
                    with_fixation,
                    date,
                    self.tables,
                )?;
            }

            CareerEvent::SpecialGrade { date, with_fixation } => {
                apply_grade_award(
                    &mut self.state,
                    AwardKind::Special,
                    with_fixation,
                    date,
                    self.tables,
                )?;
            }

            CareerEvent::Promotion { promotion } => {
                apply_promotion(&mut self.state, &promotion, self.tables)?;
            }

            CareerEvent::AccountTestPass { date, description } => {
                self.state.remark(format!(
                    "{} passed on {}; one additional increment falls due on the next scheduled increment date",
                    description,
                    format_dmy(date)
                ));
                self.state.account_test_pending = Some(description);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Annual Increment
    // ========================================================================

    fn annual_increment(&mut self) -> Result<(), SimulationError> {
        let due = self.state.next_increment_date;
        let ordinal = self.state.increments.regular + 1;
        let decision = evaluate_increment_eligibility(&self.input.probation, ordinal, due);

        if decision.eligible {
            if self.state.current_date >= decision.effective_date {
                self.grant_increment(ordinal)?;
                self.state.next_increment_date = self.advance_schedule(due);
            } else if same_month(due, self.state.current_date) {
                // Due this month but deferred to the test-pass date.
                if let Some(remark) = decision.remark {
                    self.state.remark(remark);
                }
            }
        } else {
            if let Some(remark) = decision.remark {
                self.state.remark(remark);
            }
            // The increment is forfeited for this year; the schedule moves
            // on so later years are evaluated (and the five-year rule can
            // trigger).
            self.state.next_increment_date = self.advance_schedule(due);
        }
        Ok(())
    }

    fn grant_increment(&mut self, ordinal: u32) -> Result<(), SimulationError> {
        self.step_increment()?;
        self.state.increments.regular += 1;
        self.state.increments.total += 1;
        self.state.remark(format!(
            "Annual increment No.{} granted: pay {}",
            ordinal,
            format_inr(self.state.basic_pay())
        ));

        // A pending account-test pass rides on the same grant.
        if let Some(description) = self.state.account_test_pending.take() {
            self.step_increment()?;
            self.state.increments.account_test += 1;
            self.state.increments.total += 1;
            self.state.remark(format!(
                "Additional increment for {}: pay {}",
                description,
                format_inr(self.state.basic_pay())
            ));
        }
        Ok(())
    }

    /// One increment step in the active structure.
    fn step_increment(&mut self) -> Result<(), SimulationError> {
        match &mut self.state.structure {
            PayStructure::Scale { scale, basic_pay, .. } => {
                let parsed: ParsedScale = scale.parse().map_err(FixationError::from)?;
                *basic_pay = parsed.increment(*basic_pay, 1);
            }
            PayStructure::Band { pipb, grade_pay } => {
                let band = self.tables.band_for_grade_pay(*grade_pay);
                *pipb = increment_in_band(*pipb, *grade_pay, band, 1);
            }
            PayStructure::Matrix { level, basic_pay } => {
                let matrix = self
                    .tables
                    .matrix_level(*level)
                    .ok_or(FixationError::MissingMatrixLevel(*level))?;
                *basic_pay = increment_in_matrix(*basic_pay, matrix, 1);
            }
        }
        Ok(())
    }

    /// The schedule month in force on `date`.
    fn schedule_month_on(&self, date: NaiveDate) -> u32 {
        self.input
            .increment_schedule
            .iter()
            .filter(|change| change.effective_date <= date)
            .max_by_key(|change| change.effective_date)
            .unwrap_or(&self.input.increment_schedule[0])
            .month
            .number()
    }

    /// Next scheduled date after a grant (or forfeiture) on `due`: one year
    /// on, re-anchored to the schedule month in force, day 1.
    fn advance_schedule(&self, due: NaiveDate) -> NaiveDate {
        let next = add_years(due, 1);
        with_month_day_one(next, self.schedule_month_on(next))
    }

    // ========================================================================
    // Monthly Record
    // ========================================================================

    fn emit_period(&mut self) {
        let date = self.state.current_date;
        let basic_pay = self.state.basic_pay();
        let da_rate = self.state.da_rate;
        let da_amount = round_rupees(basic_pay as f64 * da_rate / 100.0);
        let hra = lookup_hra(
            self.tables,
            basic_pay,
            self.state.commission,
            date,
            self.input.city_class,
        );
        let cca = lookup_cca(self.tables, self.state.commission, self.input.city_class);
        let medical = self.input.allowances.medical;
        let gross_pay = basic_pay + da_amount + hra + cca + medical;

        let mut deductions = vec![DeductionLine {
            name: "CPS/GPF".to_string(),
            amount: round_rupees(
                (basic_pay + da_amount) as f64 * self.input.allowances.cps_gpf_percent / 100.0,
            ),
        }];
        if self.input.allowances.professional_tax > 0 {
            deductions.push(DeductionLine {
                name: "Professional Tax".to_string(),
                amount: self.input.allowances.professional_tax,
            });
        }
        if self.input.allowances.gis > 0 {
            deductions.push(DeductionLine {
                name: "GIS".to_string(),
                amount: self.input.allowances.gis,
            });
        }
        let total_deductions: i64 = deductions.iter().map(|d| d.amount).sum();

        let mut remarks = self.state.take_remarks();
        if let Some(rate) = self.input.da_override {
            if !self.da_override_noted {
                remarks.insert(0, format!("DA Override applied: {}%", rate));
                self.da_override_noted = true;
            }
        }

        self.periods.push(PayrollPeriod {
            year: date.year(),
            month: date.month(),
            month_name: month_name(date.month()).to_string(),
            commission: self.state.commission,
            basic_pay,
            level: self.state.structure.level(),
            grade_pay: self.state.structure.grade_pay(),
            pay_in_band: self.state.structure.pipb(),
            scale: self.state.structure.scale_string().map(str::to_string),
            da_rate,
            da_amount,
            hra,
            cca,
            medical_allowance: medical,
            gross_pay,
            deductions,
            total_deductions,
            net_pay: gross_pay - total_deductions,
            remarks,
        });
    }

    // ========================================================================
    // Result Assembly
    // ========================================================================

    fn assemble(self) -> PayrollResult {
        let mut yearly: Vec<YearlyCalculation> = Vec::new();
        for period in self.periods {
            match yearly.last_mut() {
                Some(group) if group.year == period.year => group.periods.push(period),
                _ => yearly.push(YearlyCalculation {
                    year: period.year,
                    periods: vec![period],
                }),
            }
        }

        PayrollResult {
            employee: employee_details(self.input, self.tables),
            fixation_fourth: self.fixation_fourth,
            fixation_fifth: self.fixation_fifth,
            fixation_sixth: self.fixation_sixth,
            fixation_seventh: self.fixation_seventh,
            yearly_calculations: yearly,
            applied_revisions: self.applied_revisions,
            increment_analysis: self.state.increments,
        }
    }
}

// ============================================================================
// Seeding Helpers
// ============================================================================

/// First scheduled increment date: date of joining plus the eligibility
/// months, anchored to the schedule month (pushed a year out when the
/// eligibility point already lies past it), day 1, shifted by the total
/// break-in-service days.
fn first_scheduled_increment(input: &EmployeeInput) -> NaiveDate {
    let base = add_months(input.date_of_joining_service, input.eligibility_months());
    let schedule_month = input
        .increment_schedule
        .iter()
        .filter(|change| change.effective_date <= base)
        .max_by_key(|change| change.effective_date)
        .unwrap_or(&input.increment_schedule[0])
        .month
        .number();

    let year = if base.month() > schedule_month {
        base.year() + 1
    } else {
        base.year()
    };
    let anchored = ymd(year, schedule_month, 1);
    add_days(anchored, input.total_break_days())
}

fn employee_details(input: &EmployeeInput, tables: &ReferenceTables) -> EmployeeDetails {
    let post = match &input.post {
        JoiningPost::Catalogued { id } => tables
            .post(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.clone()),
        JoiningPost::Custom { name } => name.clone(),
    };

    let retirement_month = add_years(input.date_of_birth, input.retirement_age.years());
    let retirement_date = last_day_of_month(retirement_month);

    let probation_summary = {
        let length = match input.probation.kind {
            ProbationKind::OneYear => "One year".to_string(),
            ProbationKind::TwoYears => "Two years".to_string(),
            ProbationKind::Custom { months } => format!("{} months", months),
        };
        let test = if input.probation.test_required {
            match &input.probation.test {
                Some(info) => {
                    let status = match info.status {
                        TestStatus::Passed => match info.passed_on {
                            Some(date) => format!("passed on {}", format_dmy(date)),
                            None => "passed".to_string(),
                        },
                        TestStatus::NotPassed => "not passed".to_string(),
                        TestStatus::Exempted => "exempted".to_string(),
                    };
                    format!("; {} {}", info.name, status)
                }
                None => "; departmental test pending declaration".to_string(),
            }
        } else {
            String::new()
        };
        format!(
            "{} probation from {}{}",
            length,
            format_dmy(input.probation.start),
            test
        )
    };

    EmployeeDetails {
        name: input.name.clone(),
        post,
        date_of_birth: format_dmy(input.date_of_birth),
        retirement_date: format_dmy(retirement_date),
        date_of_joining_service: format_dmy(input.date_of_joining_service),
        date_of_joining_office: format_dmy(input.date_of_joining_office),
        date_of_relief: input.date_of_relief.map(format_dmy),
        city_class: match input.city_class {
            CityClass::A => "A".to_string(),
            CityClass::B => "B".to_string(),
            CityClass::C => "C".to_string(),
        },
        probation_summary,
        lpc_advances: input
            .lpc_advances
            .iter()
            .map(|advance| LpcAdvanceLine {
                name: advance.name.clone(),
                outstanding: advance.outstanding,
            })
            .collect(),
    }
}
