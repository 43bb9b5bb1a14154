//! DA series, HRA slab tables and CCA rates
//!
//! The DA series resets to zero at each commission fixation because the
//! accumulated allowance is merged into the revised basic pay. The 3rd-5th
//! commissions share one continuous series; the 6th and 7th each carry
//! their own.

use super::{CcaRates, DaRate, DaSeries, HraEra, HraSlab, HraTable};
use crate::core::time::ymd;

fn da(year: i32, month: u32, series: DaSeries, percent: f64) -> DaRate {
    DaRate {
        effective: ymd(year, month, 1),
        series,
        percent,
    }
}

pub fn builtin_da_rates() -> Vec<DaRate> {
    use DaSeries::{PreSixth, Seventh, Sixth};

    vec![
        // Pre-2006 series. Zeroes mark the 1986 and 1996 fixations.
        da(1980, 1, PreSixth, 4.0),
        da(1981, 1, PreSixth, 8.0),
        da(1982, 1, PreSixth, 13.0),
        da(1983, 1, PreSixth, 18.0),
        da(1984, 1, PreSixth, 25.0),
        da(1985, 1, PreSixth, 31.0),
        da(1986, 1, PreSixth, 0.0),
        da(1987, 1, PreSixth, 4.0),
        da(1988, 1, PreSixth, 9.0),
        da(1989, 1, PreSixth, 13.0),
        da(1990, 1, PreSixth, 18.0),
        da(1991, 1, PreSixth, 25.0),
        da(1992, 1, PreSixth, 32.0),
        da(1993, 1, PreSixth, 41.0),
        da(1994, 1, PreSixth, 49.0),
        da(1995, 1, PreSixth, 56.0),
        da(1996, 1, PreSixth, 0.0),
        da(1996, 7, PreSixth, 4.0),
        da(1997, 1, PreSixth, 8.0),
        da(1997, 7, PreSixth, 13.0),
        da(1998, 1, PreSixth, 16.0),
        da(1998, 7, PreSixth, 22.0),
        da(1999, 1, PreSixth, 32.0),
        da(1999, 7, PreSixth, 37.0),
        da(2000, 1, PreSixth, 38.0),
        da(2000, 7, PreSixth, 41.0),
        da(2001, 1, PreSixth, 43.0),
        da(2001, 7, PreSixth, 45.0),
        da(2002, 1, PreSixth, 49.0),
        da(2002, 7, PreSixth, 52.0),
        da(2003, 1, PreSixth, 55.0),
        da(2003, 7, PreSixth, 59.0),
        da(2004, 1, PreSixth, 61.0),
        da(2004, 7, PreSixth, 64.0),
        da(2005, 1, PreSixth, 67.0),
        da(2005, 7, PreSixth, 71.0),
        // 6th-commission series, 2006-01-01 onwards.
        da(2006, 1, Sixth, 0.0),
        da(2006, 7, Sixth, 2.0),
        da(2007, 1, Sixth, 6.0),
        da(2007, 7, Sixth, 9.0),
        da(2008, 1, Sixth, 12.0),
        da(2008, 7, Sixth, 16.0),
        da(2009, 1, Sixth, 22.0),
        da(2009, 7, Sixth, 27.0),
        da(2010, 1, Sixth, 35.0),
        da(2010, 7, Sixth, 45.0),
        da(2011, 1, Sixth, 51.0),
        da(2011, 7, Sixth, 58.0),
        da(2012, 1, Sixth, 65.0),
        da(2012, 7, Sixth, 72.0),
        da(2013, 1, Sixth, 80.0),
        da(2013, 7, Sixth, 90.0),
        da(2014, 1, Sixth, 100.0),
        da(2014, 7, Sixth, 107.0),
        da(2015, 1, Sixth, 113.0),
        da(2015, 7, Sixth, 119.0),
        da(2016, 1, Sixth, 125.0),
        // 7th-commission series, 2016-01-01 onwards.
        da(2016, 1, Seventh, 0.0),
        da(2016, 7, Seventh, 2.0),
        da(2017, 1, Seventh, 4.0),
        da(2017, 7, Seventh, 5.0),
        da(2018, 1, Seventh, 7.0),
        da(2018, 7, Seventh, 9.0),
        da(2019, 1, Seventh, 12.0),
        da(2019, 7, Seventh, 17.0),
        da(2020, 1, Seventh, 21.0),
        da(2021, 7, Seventh, 28.0),
        da(2022, 1, Seventh, 31.0),
        da(2022, 7, Seventh, 34.0),
        da(2023, 1, Seventh, 38.0),
        da(2023, 7, Seventh, 42.0),
        da(2024, 1, Seventh, 46.0),
        da(2024, 7, Seventh, 50.0),
        da(2025, 1, Seventh, 53.0),
        da(2025, 7, Seventh, 55.0),
    ]
}

pub fn builtin_hra_tables() -> Vec<HraTable> {
    fn slab(
        min_pay: i64,
        max_pay: i64,
        grade_i_a: i64,
        grade_i_b: i64,
        grade_ii: i64,
        unclassified: i64,
    ) -> HraSlab {
        HraSlab {
            min_pay,
            max_pay,
            grade_i_a,
            grade_i_b,
            grade_ii,
            unclassified,
        }
    }

    vec![
        HraTable {
            era: HraEra::Third,
            rows: vec![
                slab(0, 499, 30, 25, 15, 10),
                slab(500, 899, 50, 40, 25, 15),
                slab(900, i64::MAX, 75, 60, 40, 25),
            ],
        },
        HraTable {
            era: HraEra::Fourth,
            rows: vec![
                slab(0, 949, 60, 50, 30, 20),
                slab(950, 1499, 100, 80, 50, 30),
                slab(1500, 2599, 150, 120, 75, 40),
                slab(2600, i64::MAX, 200, 160, 100, 50),
            ],
        },
        HraTable {
            era: HraEra::Fifth,
            rows: vec![
                slab(0, 3199, 250, 200, 120, 60),
                slab(3200, 4999, 400, 320, 200, 100),
                slab(5000, 7999, 600, 480, 300, 150),
                slab(8000, i64::MAX, 800, 640, 400, 200),
            ],
        },
        HraTable {
            era: HraEra::SixthEarly,
            rows: vec![
                slab(0, 9999, 700, 550, 350, 180),
                slab(10000, 15999, 1000, 800, 500, 250),
                slab(16000, 23999, 1400, 1100, 700, 350),
                slab(24000, i64::MAX, 1800, 1400, 900, 450),
            ],
        },
        HraTable {
            era: HraEra::SixthLater,
            rows: vec![
                slab(0, 9999, 900, 700, 450, 230),
                slab(10000, 15999, 1300, 1000, 650, 330),
                slab(16000, 23999, 1800, 1400, 900, 450),
                slab(24000, i64::MAX, 2300, 1800, 1150, 580),
            ],
        },
        HraTable {
            era: HraEra::Seventh,
            rows: vec![
                slab(0, 22499, 1900, 1300, 900, 500),
                slab(22500, 35999, 2600, 1800, 1200, 700),
                slab(36000, 55999, 3400, 2400, 1600, 900),
                slab(56000, i64::MAX, 4200, 3000, 2000, 1100),
            ],
        },
    ]
}

pub fn builtin_cca_rates() -> CcaRates {
    CcaRates {
        class_a: 300,
        class_b: 150,
        class_c: 75,
    }
}
