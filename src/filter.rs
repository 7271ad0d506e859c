//! Attribute value assertions for search filters.
//!
//! An assertion is one `(type, value)` comparison clause of a search
//! filter. Encoding produces the canonical wire form:
//!
//! ```text
//! AttributeValueAssertion ::= SEQUENCE {
//!   attributeType  AttributeType,
//!   attributeValue AttributeValue
//! }
//! ```
//!
//! a BER SEQUENCE of two OCTET STRINGs carrying the type verbatim and the
//! filter-escaped value. Escaping rewrites each reserved filter
//! metacharacter (`*`, `(`, `)`, `\` and the NUL byte) as a backslash
//! followed by its two-digit hex code, so the assertion can be embedded in
//! a larger filter expression without ambiguity.
//!
//! Only the minimal tag/length framing the assertion itself needs lives
//! here; the general BER codec is a separate concern.

use std::fmt;

const TAG_OCTET_STRING: u8 = 0x04;
const TAG_SEQUENCE: u8 = 0x30;

/// Rewrite reserved filter metacharacters as `\xx` hex escapes.
///
/// All other bytes pass through unchanged.
pub fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '*' | '(' | ')' | '\\' | '\0' => {
                escaped.push('\\');
                escaped.push_str(&format!("{:02x}", ch as u8));
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// An immutable (attribute type, attribute value) assertion.
///
/// A pure value: construction never validates against schema state, and
/// encoding has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValueAssertion {
    attr_type: String,
    value: String,
}

impl AttributeValueAssertion {
    /// Create an assertion from an attribute type and a raw value.
    pub fn new(attr_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attr_type: attr_type.into(),
            value: value.into(),
        }
    }

    /// The assertion's attribute type.
    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }

    /// The assertion's raw (unescaped) value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Encode the assertion as a BER SEQUENCE of two OCTET STRINGs.
    ///
    /// The type is carried verbatim; the value is filter-escaped first.
    pub fn encode(&self) -> Vec<u8> {
        let escaped = escape_filter_value(&self.value);

        let mut content = Vec::with_capacity(self.attr_type.len() + escaped.len() + 8);
        write_octet_string(&mut content, self.attr_type.as_bytes());
        write_octet_string(&mut content, escaped.as_bytes());

        let mut out = Vec::with_capacity(content.len() + 4);
        out.push(TAG_SEQUENCE);
        write_length(&mut out, content.len());
        out.extend_from_slice(&content);
        out
    }
}

impl fmt::Display for AttributeValueAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{type={}, value={}}}", self.attr_type, self.value)
    }
}

fn write_octet_string(out: &mut Vec<u8>, bytes: &[u8]) {
    out.push(TAG_OCTET_STRING);
    write_length(out, bytes.len());
    out.extend_from_slice(bytes);
}

/// Definite-length BER encoding: short form below 128, long form above.
fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let be = len.to_be_bytes();
    let skip = be.iter().take_while(|b| **b == 0).count();
    let significant = &be[skip..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_rewrites_each_metacharacter() {
        assert_eq!(escape_filter_value("a*b"), "a\\2ab");
        assert_eq!(escape_filter_value("(cn=x)"), "\\28cn=x\\29");
        assert_eq!(escape_filter_value("back\\slash"), "back\\5cslash");
        assert_eq!(escape_filter_value("nul\0byte"), "nul\\00byte");
    }

    #[test]
    fn test_escape_passes_ordinary_bytes_through() {
        assert_eq!(escape_filter_value("cn=Babs Jensen"), "cn=Babs Jensen");
        assert_eq!(escape_filter_value(""), "");
    }

    #[test]
    fn test_encode_frames_two_octet_strings() {
        let assertion = AttributeValueAssertion::new("cn", "a*b");
        let encoded = assertion.encode();

        // SEQUENCE { OCTET STRING "cn", OCTET STRING "a\2ab" }
        let mut expected = vec![0x30, 0x0b];
        expected.extend_from_slice(&[0x04, 0x02]);
        expected.extend_from_slice(b"cn");
        expected.extend_from_slice(&[0x04, 0x05]);
        expected.extend_from_slice(b"a\\2ab");
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_encode_plain_value_is_verbatim() {
        let assertion = AttributeValueAssertion::new("sn", "Jensen");
        let encoded = assertion.encode();

        assert_eq!(encoded[0], 0x30);
        assert_eq!(&encoded[2..4], &[0x04, 0x02]);
        assert_eq!(&encoded[4..6], b"sn");
        assert_eq!(&encoded[6..8], &[0x04, 0x06]);
        assert_eq!(&encoded[8..], b"Jensen");
    }

    #[test]
    fn test_encode_long_form_length() {
        let value = "x".repeat(200);
        let assertion = AttributeValueAssertion::new("description", &value);
        let encoded = assertion.encode();

        // Sequence content: (2 + 11) type field + (2 + 1 + 200) value field
        let content_len = 13 + 203;
        assert_eq!(encoded[0], 0x30);
        assert_eq!(encoded[1], 0x81);
        assert_eq!(encoded[2] as usize, content_len);
        assert_eq!(encoded.len(), 3 + content_len);

        // Value field uses long form too
        let value_field = &encoded[3 + 13..];
        assert_eq!(value_field[0], 0x04);
        assert_eq!(value_field[1], 0x81);
        assert_eq!(value_field[2], 200);
    }

    #[test]
    fn test_display_form() {
        let assertion = AttributeValueAssertion::new("cn", "Babs");
        assert_eq!(assertion.to_string(), "{type=cn, value=Babs}");
    }

    proptest! {
        #[test]
        fn prop_escaped_output_has_no_bare_metacharacters(value in "\\PC*") {
            let escaped = escape_filter_value(&value);
            prop_assert!(!escaped.contains('*'));
            prop_assert!(!escaped.contains('('));
            prop_assert!(!escaped.contains(')'));
            prop_assert!(!escaped.contains('\0'));
            // Every backslash introduces exactly two hex digits
            let bytes = escaped.as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                if bytes[i] == b'\\' {
                    prop_assert!(i + 2 < bytes.len());
                    prop_assert!(bytes[i + 1].is_ascii_hexdigit());
                    prop_assert!(bytes[i + 2].is_ascii_hexdigit());
                    i += 3;
                } else {
                    i += 1;
                }
            }
        }

        #[test]
        fn prop_metacharacter_free_values_are_unchanged(value in "[a-zA-Z0-9 =,.-]*") {
            prop_assert_eq!(escape_filter_value(&value), value);
        }
    }
}
