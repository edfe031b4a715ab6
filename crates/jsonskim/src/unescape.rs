//! Decoding of JSON string content into owned text.
//!
//! The skipper only measures strings; this module materializes one,
//! translating the fixed escape table and `\uXXXX` sequences (including
//! UTF-16 surrogate pairs) into characters. Hex digits are validated
//! here, not in the skipper.

use alloc::string::String;

use bstr::ByteSlice;

use crate::error::{Error, Result, err};

/// Decodes the content between the quotes of `text`, which must begin at
/// the opening quote.
pub(crate) fn unescape(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.first(), Some(&b'"'));
    let mut out = String::new();
    let mut i = 1;
    loop {
        let Some(rest) = bytes.get(i..) else {
            return err(Error::UnterminatedString);
        };
        let Some(off) = rest.find_byteset(b"\"\\") else {
            return err(Error::UnterminatedString);
        };
        out.push_str(&text[i..i + off]);
        i += off;
        if bytes[i] == b'"' {
            return Ok(out);
        }
        i = escape_into(text, i, &mut out)?;
    }
}

/// Decodes the escape sequence at `pos` (the backslash) into `out` and
/// returns the position one past it.
fn escape_into(text: &str, pos: usize, out: &mut String) -> Result<usize> {
    let decoded = match text.as_bytes().get(pos + 1).copied() {
        Some(b'u') => return unicode_escape_into(text, pos, out),
        Some(b'\\') => '\\',
        Some(b'"') => '"',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000C}',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(other) => return err(Error::InvalidEscape(char::from(other))),
        None => return err(Error::UnterminatedString),
    };
    out.push(decoded);
    Ok(pos + 2)
}

/// Decodes the `\uXXXX` escape at `pos`, consuming a second escape when
/// the first names a UTF-16 high surrogate.
fn unicode_escape_into(text: &str, pos: usize, out: &mut String) -> Result<usize> {
    let unit = hex_unit(text, pos)?;
    if let Some(ch) = char::from_u32(u32::from(unit)) {
        out.push(ch);
        return Ok(pos + 6);
    }
    // from_u32 rejects exactly the surrogate range; a high half must be
    // followed by a low half to form a scalar.
    if (0xD800..=0xDBFF).contains(&unit)
        && text.as_bytes().get(pos + 6..pos + 8) == Some(br"\u".as_slice())
    {
        let low = hex_unit(text, pos + 6)?;
        if (0xDC00..=0xDFFF).contains(&low) {
            let combined = 0x10000 + (u32::from(unit - 0xD800) << 10) + u32::from(low - 0xDC00);
            if let Some(ch) = char::from_u32(combined) {
                out.push(ch);
                return Ok(pos + 12);
            }
        }
    }
    err(Error::MalformedString)
}

/// Reads the four hex digits of the `\uXXXX` escape starting at `pos`.
fn hex_unit(text: &str, pos: usize) -> Result<u16> {
    let Some(digits) = text.get(pos + 2..pos + 6) else {
        return err(Error::UnterminatedString);
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return err(Error::MalformedString);
    }
    match u16::from_str_radix(digits, 16) {
        Ok(unit) => Ok(unit),
        Err(_) => err(Error::MalformedString),
    }
}
