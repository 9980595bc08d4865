use crate::suggest_type;

#[test]
fn exact_entries() {
    assert_eq!(suggest_type("Address"), Some("Bytes"));
    assert_eq!(suggest_type("address"), Some("Bytes"));
    assert_eq!(suggest_type("bytes"), Some("Bytes"));
    assert_eq!(suggest_type("string"), Some("String"));
    assert_eq!(suggest_type("bool"), Some("Boolean"));
    assert_eq!(suggest_type("boolean"), Some("Boolean"));
    assert_eq!(suggest_type("Bool"), Some("Boolean"));
    assert_eq!(suggest_type("float"), Some("BigDecimal"));
    assert_eq!(suggest_type("Float"), Some("BigDecimal"));
    assert_eq!(suggest_type("int"), Some("Int"));
}

#[test]
fn unsized_uint_suggests_bigint() {
    // The exact `uint` entry matches before any of the width patterns.
    assert_eq!(suggest_type("uint"), Some("BigInt"));
}

#[test]
fn small_width_integers_suggest_int() {
    assert_eq!(suggest_type("int8"), Some("Int"));
    assert_eq!(suggest_type("int16"), Some("Int"));
    assert_eq!(suggest_type("int24"), Some("Int"));
    assert_eq!(suggest_type("int32"), Some("Int"));
    assert_eq!(suggest_type("uint8"), Some("Int"));
    assert_eq!(suggest_type("uint16"), Some("Int"));
    assert_eq!(suggest_type("uint24"), Some("Int"));
}

#[test]
fn wide_integers_fall_through_to_bigint() {
    // `uint32` is deliberately absent from the specific-width entries, so it
    // only matches the generic sized-integer rule.
    assert_eq!(suggest_type("uint32"), Some("BigInt"));
    assert_eq!(suggest_type("int64"), Some("BigInt"));
    assert_eq!(suggest_type("uint256"), Some("BigInt"));
    assert_eq!(suggest_type("int128"), Some("BigInt"));
}

#[test]
fn unmatched_names_suggest_nothing() {
    assert_eq!(suggest_type("adress"), None);
    assert_eq!(suggest_type("Token"), None);
    assert_eq!(suggest_type("uintx"), None);
    assert_eq!(suggest_type(""), None);
}
