//! Running-scale arithmetic for the 3rd-5th commissions
//!
//! A scale string such as `"1200-30-1440-40-1800"` describes an ordered
//! sequence of pay stages with piecewise increments: ₹30 steps from 1200 to
//! 1440, then ₹40 steps to the ceiling of 1800. A single bare figure
//! (`"500"`) is a fixed scale with no movement.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One segment of a scale: increments of `step` from `from` up to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSegment {
    pub from: i64,
    pub to: i64,
    pub step: i64,
}

/// A parsed pay scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedScale {
    pub segments: Vec<ScaleSegment>,
    /// Lowest stage.
    pub start: i64,
    /// Ceiling; pay never moves past it.
    pub max: i64,
}

/// Scale-string parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleParseError {
    #[error("empty scale string")]
    Empty,

    #[error("scale string {0:?} has an even number of components")]
    EvenComponents(String),

    #[error("scale string {0:?} contains a non-numeric component")]
    NonNumeric(String),

    #[error("scale string {0:?} stages are not ascending")]
    NotAscending(String),
}

impl FromStr for ParsedScale {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScaleParseError::Empty);
        }

        let parts: Vec<i64> = trimmed
            .split('-')
            .map(|p| p.trim().parse::<i64>())
            .collect::<Result<_, _>>()
            .map_err(|_| ScaleParseError::NonNumeric(s.to_string()))?;

        // Stages alternate with step widths, so the count is always odd.
        if parts.len() % 2 == 0 {
            return Err(ScaleParseError::EvenComponents(s.to_string()));
        }

        let start = parts[0];
        let max = parts[parts.len() - 1];

        let mut segments = Vec::with_capacity(parts.len() / 2);
        for window in parts.chunks(2).collect::<Vec<_>>().windows(2) {
            let from = window[0][0];
            let step = window[0][1];
            let to = window[1][0];
            if to <= from || step <= 0 {
                return Err(ScaleParseError::NotAscending(s.to_string()));
            }
            segments.push(ScaleSegment { from, to, step });
        }

        Ok(ParsedScale {
            segments,
            start,
            max,
        })
    }
}

impl ParsedScale {
    /// Apply `n` annual increments to `pay` within this scale.
    ///
    /// Each step adds the increment of the first segment whose upper stage
    /// lies above the current pay; pay past every segment keeps moving by
    /// the final segment's step. The result never exceeds the scale
    /// ceiling.
    pub fn increment(&self, pay: i64, n: u32) -> i64 {
        let mut current = pay;
        for _ in 0..n {
            if current >= self.max {
                current = self.max;
                break;
            }
            let step = self
                .segments
                .iter()
                .find(|seg| seg.to > current)
                .map(|seg| seg.step)
                .or_else(|| self.segments.last().map(|seg| seg.step))
                .unwrap_or(0);
            if step == 0 {
                break;
            }
            current += step;
        }
        current.min(self.max)
    }

    /// The least stage of this scale strictly above `pay`, walking the
    /// stage sequence from the bottom. Pay below the scale enters at the
    /// start; pay at or above the ceiling stays at the ceiling.
    pub fn fit_next_higher(&self, pay: i64) -> i64 {
        if pay >= self.max {
            return self.max;
        }
        if pay < self.start {
            return self.start;
        }
        let mut stage = self.start;
        while stage <= pay {
            let next = self.increment(stage, 1);
            if next == stage {
                break;
            }
            stage = next;
        }
        stage.min(self.max)
    }
}
