//! 7th-commission pay matrix and grade-pay → level mapping
//!
//! The matrix is generated the way it was constructed in the 2017 rules:
//! each level's entry cell is the 6th-commission minimum (band minimum plus
//! grade pay) multiplied by the 2.57 fitment factor and rounded to the
//! nearest hundred; every further cell compounds the previous one by 3%,
//! again rounded to the nearest hundred.

use super::{GradePayLevel, MatrixLevel};

/// Cells generated per level. The career of a single employee never climbs
/// past this many stages within one level.
const CELLS_PER_LEVEL: usize = 40;

/// Next matrix cell: previous cell plus 3%, rounded to the nearest ₹100.
fn next_cell(pay: i64) -> i64 {
    ((pay * 103) + 5000) / 10000 * 100
}

fn build_level(level: u8, entry_cell: i64) -> MatrixLevel {
    let mut cells = Vec::with_capacity(CELLS_PER_LEVEL);
    let mut current = entry_cell;
    for _ in 0..CELLS_PER_LEVEL {
        cells.push(current);
        current = next_cell(current);
    }
    MatrixLevel { level, cells }
}

/// Entry cell per level. Derived from 2.57 × (band minimum + grade pay) of
/// the corresponding 6th-commission scale, rounded to the nearest hundred.
const LEVEL_ENTRY_CELLS: [(u8, i64); 14] = [
    (1, 15700),  // 4800 + 1300
    (2, 15900),  // 4800 + 1400
    (3, 16600),  // 4800 + 1650
    (4, 18000),  // 5200 + 1800
    (5, 18200),  // 5200 + 1900
    (6, 18500),  // 5200 + 2000
    (7, 19500),  // 5200 + 2400
    (8, 34700),  // 9300 + 4200
    (9, 35200),  // 9300 + 4400
    (10, 35700), // 9300 + 4600
    (11, 36200), // 9300 + 4800
    (12, 54000), // 15600 + 5400
    (13, 57100), // 15600 + 6600
    (14, 59600), // 15600 + 7600
];

pub fn builtin_pay_matrix() -> Vec<MatrixLevel> {
    LEVEL_ENTRY_CELLS
        .iter()
        .map(|&(level, entry)| build_level(level, entry))
        .collect()
}

pub fn builtin_grade_pay_levels() -> Vec<GradePayLevel> {
    const MAP: [(i64, u8); 14] = [
        (1300, 1),
        (1400, 2),
        (1650, 3),
        (1800, 4),
        (1900, 5),
        (2000, 6),
        (2400, 7),
        (4200, 8),
        (4400, 9),
        (4600, 10),
        (4800, 11),
        (5400, 12),
        (6600, 13),
        (7600, 14),
    ];

    MAP.iter()
        .map(|&(grade_pay, level)| GradePayLevel { grade_pay, level })
        .collect()
}
