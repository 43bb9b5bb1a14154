//! DA, HRA and CCA lookup
//!
//! Rates are resolved against the reference tables for a given pay,
//! commission, date and city class. The lookups are pure; the simulator
//! owns when they run.

use crate::core::time::ymd;
use crate::models::input::CityClass;
use crate::models::pay::Commission;
use crate::tables::{DaSeries, HraEra, ReferenceTables};
use chrono::NaiveDate;

/// DA percentage in force on `date` for `commission`: the most recent rate
/// of the commission's series whose effective date is not after `date`.
/// Zero when the series has not started yet.
pub fn lookup_da(tables: &ReferenceTables, commission: Commission, date: NaiveDate) -> f64 {
    let series = DaSeries::for_commission(commission);
    tables
        .da_rates
        .iter()
        .filter(|rate| rate.series == series && rate.effective <= date)
        .max_by_key(|rate| rate.effective)
        .map(|rate| rate.percent)
        .unwrap_or(0.0)
}

/// HRA slab era for a commission and date. The 6th-commission slabs were
/// revised with effect from 2009-06-01.
pub fn hra_era(commission: Commission, date: NaiveDate) -> HraEra {
    match commission {
        Commission::Seventh => HraEra::Seventh,
        Commission::Sixth => {
            if date < ymd(2009, 6, 1) {
                HraEra::SixthEarly
            } else {
                HraEra::SixthLater
            }
        }
        Commission::Fifth => HraEra::Fifth,
        Commission::Fourth => HraEra::Fourth,
        Commission::Third => HraEra::Third,
    }
}

/// Monthly HRA for a basic pay, commission, date and city class.
///
/// The slab row whose pay bracket contains `basic_pay` supplies the amount
/// for the employee's city grade (A → Grade I(a), B → Grade I(b),
/// C → Grade II). No bracket match yields zero.
pub fn lookup_hra(
    tables: &ReferenceTables,
    basic_pay: i64,
    commission: Commission,
    date: NaiveDate,
    city: CityClass,
) -> i64 {
    let era = hra_era(commission, date);
    let Some(table) = tables.hra_table(era) else {
        return 0;
    };
    table
        .rows
        .iter()
        .find(|row| row.min_pay <= basic_pay && basic_pay <= row.max_pay)
        .map(|row| match city {
            CityClass::A => row.grade_i_a,
            CityClass::B => row.grade_i_b,
            CityClass::C => row.grade_ii,
        })
        .unwrap_or(0)
}

/// Monthly CCA for a commission and city class. Merged away (zero) under
/// the 7th commission.
pub fn lookup_cca(tables: &ReferenceTables, commission: Commission, city: CityClass) -> i64 {
    if commission == Commission::Seventh {
        return 0;
    }
    match city {
        CityClass::A => tables.cca_rates.class_a,
        CityClass::B => tables.cca_rates.class_b,
        CityClass::C => tables.cca_rates.class_c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ymd;

    #[test]
    fn test_lookup_da_picks_latest_effective() {
        let tables = ReferenceTables::builtin();
        // 2018-07-01 starts the 9% 7th-commission instalment.
        assert_eq!(
            lookup_da(&tables, Commission::Seventh, ymd(2018, 7, 1)),
            9.0
        );
        assert_eq!(
            lookup_da(&tables, Commission::Seventh, ymd(2018, 6, 30)),
            7.0
        );
    }

    #[test]
    fn test_lookup_da_series_are_separate() {
        let tables = ReferenceTables::builtin();
        // On the same 2016 date the two eras see different series.
        assert_eq!(
            lookup_da(&tables, Commission::Sixth, ymd(2016, 1, 1)),
            125.0
        );
        assert_eq!(
            lookup_da(&tables, Commission::Seventh, ymd(2016, 1, 1)),
            0.0
        );
    }

    #[test]
    fn test_hra_era_split() {
        assert_eq!(
            hra_era(Commission::Sixth, ymd(2009, 5, 31)),
            HraEra::SixthEarly
        );
        assert_eq!(
            hra_era(Commission::Sixth, ymd(2009, 6, 1)),
            HraEra::SixthLater
        );
        assert_eq!(hra_era(Commission::Seventh, ymd(2020, 1, 1)), HraEra::Seventh);
    }

    #[test]
    fn test_lookup_hra_by_slab_and_city() {
        let tables = ReferenceTables::builtin();
        assert_eq!(
            lookup_hra(&tables, 19500, Commission::Seventh, ymd(2018, 7, 1), CityClass::A),
            1900
        );
        assert_eq!(
            lookup_hra(&tables, 36000, Commission::Seventh, ymd(2018, 7, 1), CityClass::C),
            1600
        );
    }

    #[test]
    fn test_cca_merged_at_seventh() {
        let tables = ReferenceTables::builtin();
        assert_eq!(lookup_cca(&tables, Commission::Seventh, CityClass::A), 0);
        assert_eq!(lookup_cca(&tables, Commission::Sixth, CityClass::A), 300);
        assert_eq!(lookup_cca(&tables, Commission::Fifth, CityClass::C), 75);
    }
}
