//! Reference tables for the pay commissions
//!
//! Everything the engine knows about the outside world lives here: pay
//! scales for the 3rd to 6th commissions, the 7th-commission pay matrix,
//! DA/HRA/CCA rates over time, grade-pay to level mapping, pay-band bounds,
//! selection/special-grade scale mappings, catalogued posts, scale
//! revisions, and government-order citations.
//!
//! Tables are plain data handed to the simulator by value; the engine never
//! reads globals, files, or the network. [`ReferenceTables::builtin`]
//! provides the shipped Tamil Nadu data set; callers may substitute their
//! own tables as long as the cross-commission `legacy_ids` links stay
//! consistent.

pub mod allowances;
pub mod matrix;
pub mod scales;

use crate::models::pay::Commission;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Table Row Types
// ============================================================================

/// One pay scale (3rd-6th commission).
///
/// For the pre-band commissions `scale` is the stage string
/// (`"4000-100-6000"`). For the 6th commission `scale` is the pay-band span
/// and `grade_pay` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// Stable identifier, e.g. `"V-3"`.
    pub id: String,

    /// Commission this scale belongs to.
    pub commission: Commission,

    /// Stage string (pre-band) or band span (6th commission).
    pub scale: String,

    /// Grade pay, 6th commission only.
    pub grade_pay: Option<i64>,

    /// Identifiers of the previous commission's scales that fix into this
    /// one. A transition maps a scale by finding exactly one entry of the
    /// next commission listing it here; zero or several matches abort the
    /// simulation.
    pub legacy_ids: Vec<String>,
}

/// Selection-grade / special-grade scale mapping for a 5th-commission
/// ordinary scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeScaleMapping {
    pub ordinary_id: String,
    pub selection_id: String,
    pub selection_scale: String,
    pub special_id: String,
    pub special_scale: String,
}

/// One level of the 7th-commission pay matrix: an ordered list of discrete
/// pay cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixLevel {
    pub level: u8,
    pub cells: Vec<i64>,
}

/// Grade pay → 7th-commission level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradePayLevel {
    pub grade_pay: i64,
    pub level: u8,
}

/// 6th-commission pay band bounds for a grade pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBand {
    pub name: String,
    pub grade_pay: i64,
    pub min: i64,
    pub max: i64,
}

/// Which DA series a rate row belongs to. The 3rd, 4th and 5th commissions
/// share the pre-2006 series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaSeries {
    PreSixth,
    Sixth,
    Seventh,
}

impl DaSeries {
    /// Series applicable to a commission.
    pub fn for_commission(commission: Commission) -> Self {
        match commission {
            Commission::Third | Commission::Fourth | Commission::Fifth => DaSeries::PreSixth,
            Commission::Sixth => DaSeries::Sixth,
            Commission::Seventh => DaSeries::Seventh,
        }
    }
}

/// One dearness-allowance rate change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaRate {
    pub effective: NaiveDate,
    pub series: DaSeries,
    /// Percentage of basic pay.
    pub percent: f64,
}

/// HRA slab era. The 6th-commission era is split at 2009-06-01 when the
/// slabs were revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HraEra {
    Third,
    Fourth,
    Fifth,
    SixthEarly,
    SixthLater,
    Seventh,
}

/// One HRA slab row: a basic-pay bracket with the monthly amount per city
/// grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HraSlab {
    pub min_pay: i64,
    pub max_pay: i64,
    pub grade_i_a: i64,
    pub grade_i_b: i64,
    pub grade_ii: i64,
    pub unclassified: i64,
}

/// HRA slab table for one era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HraTable {
    pub era: HraEra,
    pub rows: Vec<HraSlab>,
}

/// City compensatory allowance per city class. Merged away (zero) under the
/// 7th commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcaRates {
    pub class_a: i64,
    pub class_b: i64,
    pub class_c: i64,
}

/// A mid-commission revision of a pay scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleRevision {
    pub effective: NaiveDate,
    /// Scale the revision replaces.
    pub scale_id: String,
    pub revised_id: String,
    pub revised_scale: String,
    pub order_ref: String,
}

/// A catalogued post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    pub id: String,
    pub name: String,
}

/// Government-order citations quoted in fixation and award remarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRefs {
    pub fixation_fourth: String,
    pub fixation_fifth: String,
    pub fixation_sixth: String,
    pub fixation_seventh: String,
    pub selection_grade: String,
    pub special_grade: String,
}

// ============================================================================
// ReferenceTables
// ============================================================================

/// The complete read-only data set the simulator runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub scales: Vec<ScaleEntry>,
    pub grade_scale_map: Vec<GradeScaleMapping>,
    pub pay_matrix: Vec<MatrixLevel>,
    pub grade_pay_levels: Vec<GradePayLevel>,
    pub pay_bands: Vec<PayBand>,
    pub da_rates: Vec<DaRate>,
    pub hra_tables: Vec<HraTable>,
    pub cca_rates: CcaRates,
    pub scale_revisions: Vec<ScaleRevision>,
    pub posts: Vec<PostEntry>,
    pub orders: OrderRefs,
}

impl ReferenceTables {
    /// The shipped Tamil Nadu data set.
    pub fn builtin() -> Self {
        ReferenceTables {
            scales: scales::builtin_scales(),
            grade_scale_map: scales::builtin_grade_scale_map(),
            pay_matrix: matrix::builtin_pay_matrix(),
            grade_pay_levels: matrix::builtin_grade_pay_levels(),
            pay_bands: scales::builtin_pay_bands(),
            da_rates: allowances::builtin_da_rates(),
            hra_tables: allowances::builtin_hra_tables(),
            cca_rates: allowances::builtin_cca_rates(),
            scale_revisions: scales::builtin_scale_revisions(),
            posts: scales::builtin_posts(),
            orders: scales::builtin_orders(),
        }
    }

    /// Look up a scale by identifier.
    pub fn scale(&self, id: &str) -> Option<&ScaleEntry> {
        self.scales.iter().find(|s| s.id == id)
    }

    /// All scales of `commission` that list `legacy_id` as a predecessor.
    ///
    /// Fixation requires exactly one match; the caller treats zero or
    /// several as fatal.
    pub fn successor_scales(&self, legacy_id: &str, commission: Commission) -> Vec<&ScaleEntry> {
        self.scales
            .iter()
            .filter(|s| s.commission == commission)
            .filter(|s| s.legacy_ids.iter().any(|l| l == legacy_id))
            .collect()
    }

    /// Selection/special-grade mapping for an ordinary 5th-commission scale.
    pub fn grade_mapping(&self, ordinary_id: &str) -> Option<&GradeScaleMapping> {
        self.grade_scale_map
            .iter()
            .find(|m| m.ordinary_id == ordinary_id)
    }

    /// Pay-matrix row for a level.
    pub fn matrix_level(&self, level: u8) -> Option<&MatrixLevel> {
        self.pay_matrix.iter().find(|l| l.level == level)
    }

    /// 7th-commission level for a 6th-commission grade pay.
    pub fn level_for_grade_pay(&self, grade_pay: i64) -> Option<u8> {
        self.grade_pay_levels
            .iter()
            .find(|g| g.grade_pay == grade_pay)
            .map(|g| g.level)
    }

    /// Pay-band bounds for a grade pay.
    pub fn band_for_grade_pay(&self, grade_pay: i64) -> Option<&PayBand> {
        self.pay_bands.iter().find(|b| b.grade_pay == grade_pay)
    }

    /// 6th-commission scale entry carrying the given grade pay, used when a
    /// promotion names its target by grade pay.
    pub fn sixth_scale_for_grade_pay(&self, grade_pay: i64) -> Option<&ScaleEntry> {
        self.scales
            .iter()
            .filter(|s| s.commission == Commission::Sixth)
            .find(|s| s.grade_pay == Some(grade_pay))
    }

    /// HRA table for an era.
    pub fn hra_table(&self, era: HraEra) -> Option<&HraTable> {
        self.hra_tables.iter().find(|t| t.era == era)
    }

    /// Catalogued post by identifier.
    pub fn post(&self, id: &str) -> Option<&PostEntry> {
        self.posts.iter().find(|p| p.id == id)
    }
}
