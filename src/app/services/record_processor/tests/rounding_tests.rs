//! Tests for the rounding policy

use crate::app::services::record_processor::rounding::{
    RoundingPolicy, policy_for, round_indicator,
};
use crate::constants::{INDICATOR_COLUMNS, RATE_COLUMNS, WHOLE_NUMBER_COLUMNS};

#[test]
fn test_policy_table_covers_every_indicator() {
    for column in WHOLE_NUMBER_COLUMNS {
        assert_eq!(policy_for(column), RoundingPolicy::WholeNumber);
    }
    for column in RATE_COLUMNS {
        assert_eq!(policy_for(column), RoundingPolicy::TwoDecimals);
    }
    assert_eq!(
        WHOLE_NUMBER_COLUMNS.len() + RATE_COLUMNS.len(),
        INDICATOR_COLUMNS.len()
    );
}

#[test]
fn test_decimals_per_policy() {
    assert_eq!(RoundingPolicy::WholeNumber.decimals(), 0);
    assert_eq!(RoundingPolicy::TwoDecimals.decimals(), 2);
}

#[test]
fn test_whole_number_rounding() {
    assert_eq!(RoundingPolicy::WholeNumber.apply(100.445), 100.0);
    assert_eq!(RoundingPolicy::WholeNumber.apply(100.5), 101.0);
    assert_eq!(RoundingPolicy::WholeNumber.apply(99.999), 100.0);
}

#[test]
fn test_two_decimal_rounding() {
    assert_eq!(RoundingPolicy::TwoDecimals.apply(5.125), 5.13);
    assert_eq!(RoundingPolicy::TwoDecimals.apply(5.1234), 5.12);
    assert_eq!(RoundingPolicy::TwoDecimals.apply(8.0), 8.0);
}

#[test]
fn test_halves_round_away_from_zero() {
    assert_eq!(RoundingPolicy::WholeNumber.apply(2.5), 3.0);
    assert_eq!(RoundingPolicy::WholeNumber.apply(-2.5), -3.0);
}

#[test]
fn test_round_indicator_dispatches_by_column() {
    assert_eq!(round_indicator("gdp", 1234.56), 1235.0);
    assert_eq!(round_indicator("inflation", 1234.567), 1234.57);
}
