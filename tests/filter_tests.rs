//! Integration tests for the filter-assertion encoder.

use ldap_schema_naming::{AttributeValueAssertion, escape_filter_value};

#[test]
fn assertion_encodes_type_and_escaped_value() {
    let assertion = AttributeValueAssertion::new("cn", "a*b");
    let encoded = assertion.encode();

    // SEQUENCE of two OCTET STRINGs: "cn" and "a\2ab"
    assert_eq!(
        encoded,
        [
            0x30, 0x0b, // SEQUENCE, 11 bytes
            0x04, 0x02, b'c', b'n', // type, verbatim
            0x04, 0x05, b'a', b'\\', b'2', b'a', b'b', // value, escaped
        ]
    );
}

#[test]
fn accessors_return_the_raw_pair() {
    let assertion = AttributeValueAssertion::new("mail", "user@example.com");
    assert_eq!(assertion.attr_type(), "mail");
    assert_eq!(assertion.value(), "user@example.com");
}

#[test]
fn every_metacharacter_is_escaped_to_its_hex_code() {
    assert_eq!(escape_filter_value("*"), "\\2a");
    assert_eq!(escape_filter_value("("), "\\28");
    assert_eq!(escape_filter_value(")"), "\\29");
    assert_eq!(escape_filter_value("\\"), "\\5c");
    assert_eq!(escape_filter_value("\0"), "\\00");
}

#[test]
fn encoding_is_repeatable_and_side_effect_free() {
    let assertion = AttributeValueAssertion::new("cn", "(admin)*");
    assert_eq!(assertion.encode(), assertion.encode());
    // The assertion itself is unchanged by encoding
    assert_eq!(assertion.value(), "(admin)*");
}
