//! Pay representation across commissions
//!
//! The three ways a Tamil Nadu salary has been expressed since 1980:
//! a basic pay confined to a running scale (3rd-5th commissions), a
//! pay-in-pay-band plus grade pay (6th), and a discrete cell of a pay-matrix
//! level (7th). Exactly one representation is active at a time; operators
//! dispatch on the variant.
//!
//! # Invariants
//!
//! 1. Under the 7th commission, `basic_pay` is a cell of the matrix level.
//! 2. Under the 6th commission, `basic_pay = pipb + grade_pay` and `pipb`
//!    stays inside the band bounds for the grade pay.
//! 3. All money values are whole rupees (`i64`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pay commission, ordered by succession.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Commission {
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl Commission {
    /// Conventional ordinal (3-7).
    pub fn number(self) -> u8 {
        match self {
            Commission::Third => 3,
            Commission::Fourth => 4,
            Commission::Fifth => 5,
            Commission::Sixth => 6,
            Commission::Seventh => 7,
        }
    }

    /// The commission following this one, if any.
    pub fn next(self) -> Option<Commission> {
        match self {
            Commission::Third => Some(Commission::Fourth),
            Commission::Fourth => Some(Commission::Fifth),
            Commission::Fifth => Some(Commission::Sixth),
            Commission::Sixth => Some(Commission::Seventh),
            Commission::Seventh => None,
        }
    }
}

impl fmt::Display for Commission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}th Pay Commission", self.number())
    }
}

/// The active pay representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayStructure {
    /// 3rd-5th commissions: basic pay on a running scale.
    Scale {
        /// Identifier of the scale currently drawn on (a selection or
        /// special-grade scale after such an award).
        scale_id: String,
        /// Stage string of the current scale.
        scale: String,
        /// Identifier of the ordinary scale of the post, kept for
        /// selection/special-grade mapping after an award.
        ordinary_scale_id: String,
        basic_pay: i64,
    },

    /// 6th commission: pay in pay band plus grade pay.
    Band { pipb: i64, grade_pay: i64 },

    /// 7th commission: a cell of a pay-matrix level.
    Matrix { level: u8, basic_pay: i64 },
}

impl PayStructure {
    /// The rupee figure that feeds DA, HRA and increment computation.
    pub fn basic_pay(&self) -> i64 {
        match self {
            PayStructure::Scale { basic_pay, .. } => *basic_pay,
            PayStructure::Band { pipb, grade_pay } => pipb + grade_pay,
            PayStructure::Matrix { basic_pay, .. } => *basic_pay,
        }
    }

    /// Grade pay when under the 6th commission.
    pub fn grade_pay(&self) -> Option<i64> {
        match self {
            PayStructure::Band { grade_pay, .. } => Some(*grade_pay),
            _ => None,
        }
    }

    /// Pay in pay band when under the 6th commission.
    pub fn pipb(&self) -> Option<i64> {
        match self {
            PayStructure::Band { pipb, .. } => Some(*pipb),
            _ => None,
        }
    }

    /// Matrix level when under the 7th commission.
    pub fn level(&self) -> Option<u8> {
        match self {
            PayStructure::Matrix { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Current scale string when under a pre-band commission.
    pub fn scale_string(&self) -> Option<&str> {
        match self {
            PayStructure::Scale { scale, .. } => Some(scale),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_ordering() {
        assert!(Commission::Third < Commission::Seventh);
        assert_eq!(Commission::Sixth.next(), Some(Commission::Seventh));
        assert_eq!(Commission::Seventh.next(), None);
        assert_eq!(Commission::Fifth.number(), 5);
    }

    #[test]
    fn test_band_basic_pay_is_sum() {
        let pay = PayStructure::Band {
            pipb: 9300,
            grade_pay: 4200,
        };
        assert_eq!(pay.basic_pay(), 13500);
        assert_eq!(pay.grade_pay(), Some(4200));
        assert_eq!(pay.level(), None);
    }
}
