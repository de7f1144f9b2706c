//! Per-column rounding policy for averaged indicators
//!
//! Monetary amounts and counts are kept as whole numbers; rates and
//! percentages keep two decimal places. Half-way values round away from
//! zero, so a mean of 5.125 becomes 5.13.

use crate::constants::{RATE_DECIMALS, WHOLE_NUMBER_COLUMNS, WHOLE_NUMBER_DECIMALS};

/// Decimal precision applied to an averaged indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Monetary amounts and counts: round to whole numbers
    WholeNumber,
    /// Rates and percentages: round to two decimal places
    TwoDecimals,
}

impl RoundingPolicy {
    /// Number of decimal places this policy keeps
    pub fn decimals(&self) -> u32 {
        match self {
            RoundingPolicy::WholeNumber => WHOLE_NUMBER_DECIMALS,
            RoundingPolicy::TwoDecimals => RATE_DECIMALS,
        }
    }

    /// Round a value to this policy's precision
    pub fn apply(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals() as i32);
        (value * factor).round() / factor
    }
}

/// Rounding policy for an indicator column
pub fn policy_for(column: &str) -> RoundingPolicy {
    if WHOLE_NUMBER_COLUMNS.contains(&column) {
        RoundingPolicy::WholeNumber
    } else {
        RoundingPolicy::TwoDecimals
    }
}

/// Round an averaged indicator value per its column policy
pub fn round_indicator(column: &str, value: f64) -> f64 {
    policy_for(column).apply(value)
}
