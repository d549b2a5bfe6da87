//! Reversible percent-escaping codec shared by the parser and serializers.
//!
//! The codec treats ASCII alphanumerics and the mark set
//! `- _ . ! ~ * ' ( ) : @ & = + $ , / ;` as always safe. Everything else
//! is escaped as `%XX` with two uppercase hex digits, one escape per byte.

use crate::error::DecodeError;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if the byte passes through both directions of the codec
/// unchanged: ASCII alphanumeric or a member of the mark set.
pub(crate) const fn is_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'\''
                | b'('
                | b')'
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'+'
                | b'$'
                | b','
                | b'/'
                | b';'
        )
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Percent-escapes `input` into its wire form.
///
/// Safe bytes pass through unchanged; every other byte of the UTF-8
/// representation becomes `%XX` with uppercase hex. Multi-byte characters
/// are escaped one byte at a time. This function is total and never fails.
///
/// # Examples
///
/// ```
/// use urlkit::percent_encode;
///
/// assert_eq!(percent_encode("/a b"), "/a%20b");
/// assert_eq!(percent_encode("key=value"), "key=value");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if is_safe_byte(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(b & 0x0f)]));
        }
    }
    out
}

/// Decodes percent-escaped wire text back into its raw form.
///
/// Each `%` must be followed by exactly two hex digits, which decode to one
/// byte of the output. Any literal character that is not a safe byte is
/// rejected; the decoder validates rather than passing unknown characters
/// through. Decoded bytes must assemble into valid UTF-8; a sequence that
/// does not is reported as an invalid escape at the position of the escape
/// that produced the first offending byte.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidEscape`] for a truncated or malformed
/// `%XX` sequence, and [`DecodeError::InvalidCharacter`] for a literal
/// character outside the alphanumeric and mark sets.
///
/// # Examples
///
/// ```
/// use urlkit::percent_decode;
///
/// assert_eq!(percent_decode("/a%20b").unwrap(), "/a b");
/// assert!(percent_decode("%2").is_err());
/// ```
pub fn percent_decode(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    // Input offset of each output byte, for error positions on bad UTF-8.
    let mut origins = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            if i + 2 >= bytes.len() {
                return Err(DecodeError::InvalidEscape { position: i });
            }
            let hi = hex_value(bytes[i + 1]).ok_or(DecodeError::InvalidEscape { position: i })?;
            let lo = hex_value(bytes[i + 2]).ok_or(DecodeError::InvalidEscape { position: i })?;
            out.push((hi << 4) | lo);
            origins.push(i);
            i += 3;
        } else if is_safe_byte(b) {
            out.push(b);
            origins.push(i);
            i += 1;
        } else {
            // Safe bytes and escapes are ASCII, so `i` is a char boundary.
            let char = input[i..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(DecodeError::InvalidCharacter { char, position: i });
        }
    }

    String::from_utf8(out).map_err(|e| {
        let first_bad = e.utf8_error().valid_up_to();
        DecodeError::InvalidEscape {
            position: origins.get(first_bad).copied().unwrap_or(0),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_passes_safe_text_through() {
        assert_eq!(percent_encode("abc-XYZ_0.9"), "abc-XYZ_0.9");
        assert_eq!(percent_encode("-_.!~*'():@&=+$,/;"), "-_.!~*'():@&=+$,/;");
    }

    #[test]
    fn encode_escapes_space_as_uppercase_hex() {
        assert_eq!(percent_encode("/a b"), "/a%20b");
    }

    #[test]
    fn encode_escapes_reserved_delimiters() {
        assert_eq!(percent_encode("a?b#c"), "a%3Fb%23c");
        assert_eq!(percent_encode("%"), "%25");
    }

    #[test]
    fn encode_escapes_multibyte_bytewise() {
        // U+00E9 is 0xC3 0xA9 in UTF-8
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn decode_plain_text() {
        assert_eq!(percent_decode("/a/b").unwrap(), "/a/b");
    }

    #[test]
    fn decode_escape() {
        assert_eq!(percent_decode("%41%20%42").unwrap(), "A B");
    }

    #[test]
    fn decode_multibyte_escape_sequence() {
        assert_eq!(percent_decode("%C3%A9").unwrap(), "é");
    }

    #[test]
    fn decode_truncated_escape_fails() {
        assert!(matches!(
            percent_decode("%2"),
            Err(DecodeError::InvalidEscape { position: 0 })
        ));
        assert!(matches!(
            percent_decode("abc%"),
            Err(DecodeError::InvalidEscape { position: 3 })
        ));
    }

    #[test]
    fn decode_non_hex_escape_fails() {
        assert!(matches!(
            percent_decode("%GG"),
            Err(DecodeError::InvalidEscape { position: 0 })
        ));
    }

    #[test]
    fn decode_unsafe_literal_fails() {
        assert!(matches!(
            percent_decode("a b"),
            Err(DecodeError::InvalidCharacter { char: ' ', position: 1 })
        ));
        assert!(matches!(
            percent_decode("a#b"),
            Err(DecodeError::InvalidCharacter { char: '#', position: 1 })
        ));
    }

    #[test]
    fn decode_literal_non_ascii_fails() {
        assert!(matches!(
            percent_decode("é"),
            Err(DecodeError::InvalidCharacter { char: 'é', position: 0 })
        ));
    }

    #[test]
    fn decode_invalid_utf8_sequence_fails() {
        // A lone continuation byte cannot form a character.
        assert!(matches!(
            percent_decode("ab%FF"),
            Err(DecodeError::InvalidEscape { position: 2 })
        ));
    }

    #[test]
    fn decode_inverts_encode() {
        for input in ["/a b", "é", "100% sure", "x?y#z", ""] {
            assert_eq!(percent_decode(&percent_encode(input)).unwrap(), input);
        }
    }

    #[test]
    fn encode_inverts_decode_on_wire_text() {
        // Holds whenever every escape encodes a byte the encoder would
        // itself escape.
        for wire in ["plain-text", "a%20b", "/p:q@r", "%C3%A9x"] {
            assert_eq!(percent_encode(&percent_decode(wire).unwrap()), wire);
        }
    }
}
