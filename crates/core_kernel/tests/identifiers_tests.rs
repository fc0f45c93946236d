//! Unit tests for the boundary identifier codec

use core_kernel::identifiers::{encode_id, parse_id};
use core_kernel::ServiceError;
use proptest::prelude::*;

#[test]
fn empty_input_is_a_required_field_error() {
    let err = parse_id("user id", "").unwrap_err();
    assert_eq!(err, ServiceError::InvalidArgument("user id is required".into()));
    assert_eq!(err.code(), 1);
}

#[test]
fn malformed_input_names_the_offending_value() {
    let err = parse_id("loan id", "abc").unwrap_err();
    assert_eq!(err, ServiceError::InvalidArgument("invalid loan id \"abc\"".into()));
    assert_eq!(err.code(), 1);
}

#[test]
fn plain_decimal_parses() {
    assert_eq!(parse_id("id", "42"), Ok(42));
    assert_eq!(parse_id("id", "-7"), Ok(-7));
}

#[test]
fn overflowing_input_is_malformed() {
    assert!(parse_id("id", "9223372036854775808").is_err());
}

proptest! {
    #[test]
    fn round_trip_is_lossless(id in any::<i64>()) {
        prop_assert_eq!(parse_id("id", &encode_id(id)), Ok(id));
    }
}
