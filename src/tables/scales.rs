//! Pay scales of the 3rd-6th commissions, band bounds, posts and orders
//!
//! Scale identifiers are stable across the data set: `T-*` for the 3rd
//! commission, `F-*` for the 4th, `V-*` for the 5th (with `S`/`P` suffixes
//! for selection/special-grade scales) and `B-*` for the 6th. The
//! `legacy_ids` links drive cross-commission fixation; keep them acyclic and
//! unambiguous.

use super::{
    GradeScaleMapping, OrderRefs, PayBand, PostEntry, ScaleEntry, ScaleRevision,
};
use crate::core::time::ymd;
use crate::models::pay::Commission;

fn scale(id: &str, commission: Commission, stages: &str, legacy: &[&str]) -> ScaleEntry {
    ScaleEntry {
        id: id.to_string(),
        commission,
        scale: stages.to_string(),
        grade_pay: None,
        legacy_ids: legacy.iter().map(|l| l.to_string()).collect(),
    }
}

fn band_scale(id: &str, span: &str, grade_pay: i64, legacy: &[&str]) -> ScaleEntry {
    ScaleEntry {
        id: id.to_string(),
        commission: Commission::Sixth,
        scale: span.to_string(),
        grade_pay: Some(grade_pay),
        legacy_ids: legacy.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn builtin_scales() -> Vec<ScaleEntry> {
    use Commission::{Fifth, Fourth, Third};

    vec![
        // 3rd commission (1978 scales, in force from the engine floor of 1980)
        scale("T-1", Third, "350-10-400-15-550", &[]),
        scale("T-2", Third, "400-15-550-20-700", &[]),
        scale("T-3", Third, "500-20-700-25-900", &[]),
        scale("T-4", Third, "600-25-900-30-1100", &[]),
        scale("T-5", Third, "700-30-1000-40-1400", &[]),
        // 4th commission, effective 1986-01-01
        scale("F-1", Fourth, "750-12-870-15-945", &["T-1"]),
        scale("F-2", Fourth, "950-20-1150-25-1500", &["T-2"]),
        scale("F-3", Fourth, "1200-30-1560-40-2040", &["T-3"]),
        scale("F-4", Fourth, "1400-40-1800-50-2600", &["T-4"]),
        scale("F-5", Fourth, "2000-60-2300-75-3500", &["T-5"]),
        // 5th commission, effective 1996-01-01. V-5 and V-7 are direct-entry
        // scales with no 4th-commission predecessor.
        scale("V-1", Fifth, "2550-55-2660-60-3200", &["F-1"]),
        scale("V-2", Fifth, "3050-75-3950-80-4590", &["F-2"]),
        scale("V-3", Fifth, "4000-100-6000", &["F-3"]),
        scale("V-4", Fifth, "5000-150-8000", &["F-4"]),
        scale("V-5", Fifth, "5500-175-9000", &[]),
        scale("V-6", Fifth, "6500-200-10500", &["F-5"]),
        scale("V-7", Fifth, "8000-275-13500", &[]),
        // 1999 revision of V-2; see the scale-revisions table.
        scale("V-2R", Fifth, "3200-85-4050-100-5000", &[]),
        // Selection/special-grade scales awarded on stagnation in V-3/V-4.
        scale("V-3S", Fifth, "4500-125-7000", &[]),
        scale("V-3P", Fifth, "5000-150-8000", &[]),
        scale("V-4S", Fifth, "5500-175-9000", &[]),
        scale("V-4P", Fifth, "6500-200-10500", &[]),
        // 6th commission, effective 2006-01-01: pay band + grade pay.
        band_scale("B-1", "5200-20200", 1800, &["V-1"]),
        band_scale("B-2", "5200-20200", 2000, &["V-2", "V-2R"]),
        band_scale("B-3", "5200-20200", 2400, &["V-3"]),
        band_scale("B-4", "9300-34800", 4200, &["V-3S", "V-4"]),
        band_scale("B-5", "9300-34800", 4400, &["V-3P", "V-4S", "V-5"]),
        band_scale("B-6", "9300-34800", 4600, &["V-4P", "V-6"]),
        band_scale("B-7", "9300-34800", 4800, &[]),
        band_scale("B-8", "15600-39100", 5400, &["V-7"]),
    ]
}

pub fn builtin_grade_scale_map() -> Vec<GradeScaleMapping> {
    vec![
        GradeScaleMapping {
            ordinary_id: "V-3".to_string(),
            selection_id: "V-3S".to_string(),
            selection_scale: "4500-125-7000".to_string(),
            special_id: "V-3P".to_string(),
            special_scale: "5000-150-8000".to_string(),
        },
        GradeScaleMapping {
            ordinary_id: "V-4".to_string(),
            selection_id: "V-4S".to_string(),
            selection_scale: "5500-175-9000".to_string(),
            special_id: "V-4P".to_string(),
            special_scale: "6500-200-10500".to_string(),
        },
    ]
}

pub fn builtin_pay_bands() -> Vec<PayBand> {
    fn band(name: &str, grade_pay: i64, min: i64, max: i64) -> PayBand {
        PayBand {
            name: name.to_string(),
            grade_pay,
            min,
            max,
        }
    }

    vec![
        band("PB-1A", 1300, 4800, 10000),
        band("PB-1A", 1400, 4800, 10000),
        band("PB-1A", 1650, 4800, 10000),
        band("PB-1", 1800, 5200, 20200),
        band("PB-1", 1900, 5200, 20200),
        band("PB-1", 2000, 5200, 20200),
        band("PB-1", 2400, 5200, 20200),
        band("PB-2", 4200, 9300, 34800),
        band("PB-2", 4400, 9300, 34800),
        band("PB-2", 4600, 9300, 34800),
        band("PB-2", 4800, 9300, 34800),
        band("PB-3", 5400, 15600, 39100),
        band("PB-3", 6600, 15600, 39100),
        band("PB-3", 7600, 15600, 39100),
    ]
}

pub fn builtin_scale_revisions() -> Vec<ScaleRevision> {
    vec![ScaleRevision {
        effective: ymd(1999, 4, 1),
        scale_id: "V-2".to_string(),
        revised_id: "V-2R".to_string(),
        revised_scale: "3200-85-4050-100-5000".to_string(),
        order_ref: "G.O.Ms.No.237, Finance (Pay Commission) Department, dated 01-06-1999"
            .to_string(),
    }]
}

pub fn builtin_posts() -> Vec<PostEntry> {
    fn post(id: &str, name: &str) -> PostEntry {
        PostEntry {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    vec![
        post("RA", "Record Assistant"),
        post("JA", "Junior Assistant"),
        post("ASST", "Assistant"),
        post("SUPT", "Superintendent"),
        post("AO", "Accounts Officer"),
        post("DRO", "District Revenue Officer"),
    ]
}

pub fn builtin_orders() -> OrderRefs {
    OrderRefs {
        fixation_fourth: "G.O.Ms.No.667, Finance (Pay Cell) Department, dated 14-07-1986"
            .to_string(),
        fixation_fifth: "G.O.Ms.No.162, Finance (Pay Commission) Department, dated 13-04-1998"
            .to_string(),
        fixation_sixth: "G.O.Ms.No.234, Finance (Pay Cell) Department, dated 01-06-2009"
            .to_string(),
        fixation_seventh: "G.O.Ms.No.303, Finance (Pay Cell) Department, dated 11-10-2017"
            .to_string(),
        selection_grade:
            "G.O.Ms.No.155, Personnel and Administrative Reforms Department, dated 28-09-1998"
                .to_string(),
        special_grade:
            "G.O.Ms.No.156, Personnel and Administrative Reforms Department, dated 28-09-1998"
                .to_string(),
    }
}
