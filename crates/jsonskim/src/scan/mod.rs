//! Lexical skipper: measures a JSON value's textual extent in place.
//!
//! Every routine here is a pure function of `(text, pos)` that returns
//! the position one past the value starting at `pos`, without building
//! any parsed representation of its contents. The skipper is a
//! *recognizer*, not a validator: it matches delimiters and trusts
//! well-formedness in between, detecting only unterminated
//! containers/strings, bad escape selectors, bad literals, and empty
//! numbers.
//!
//! All positions are byte offsets. Structural characters are ASCII, and
//! the delimiter searches stop only on ASCII bytes, so every returned
//! offset is a UTF-8 boundary of the source text.

use bstr::ByteSlice;

use crate::error::{Error, Result, err};

/// Bytes that may separate array elements: comma plus the whitespace set.
const SEPARATORS: &[u8] = b", \t\r\n\x0C\x08";
/// Bytes that may sit between a key's closing quote and its value.
const KEY_VALUE_GAP: &[u8] = b" \t\r\n\x0C\x08:";
/// The characters a number token is drawn from.
const NUMBER_RUN: &[u8] = b"+-0123456789.eE";

/// Dispatches on the byte at `pos` to the matching skip routine.
pub(crate) fn skip_value(text: &[u8], pos: usize) -> Result<usize> {
    match text.get(pos).copied() {
        Some(b'{') => skip_object(text, pos),
        Some(b'[') => skip_array(text, pos),
        Some(b'"') => skip_string(text, pos),
        Some(b't' | b'f' | b'n') => skip_literal(text, pos),
        _ => skip_number(text, pos),
    }
}

/// Skips the object starting at `pos`, returning the position one past
/// its closing brace.
pub(crate) fn skip_object(text: &[u8], pos: usize) -> Result<usize> {
    if text.get(pos) != Some(&b'{') {
        return err(Error::NotAnObject);
    }
    let mut i = pos + 1;
    loop {
        match next_pair(text, i)? {
            PairStep::End(end) => return Ok(end),
            PairStep::Entry(pair) => i = skip_value(text, pair.value_start)?,
        }
    }
}

/// Skips the array starting at `pos`, returning the position one past
/// its closing bracket.
pub(crate) fn skip_array(text: &[u8], pos: usize) -> Result<usize> {
    if text.get(pos) != Some(&b'[') {
        return err(Error::NotAnArray);
    }
    let mut i = pos + 1;
    loop {
        i = next_element(text, i)?;
        if text[i] == b']' {
            return Ok(i + 1);
        }
        i = skip_value(text, i)?;
    }
}

/// Skips the string starting at `pos`, returning the position one past
/// its closing quote.
///
/// Escapes are fixed-width: the two-character selectors advance by 2,
/// `\u` advances by 6. Hex digits are not validated here; that happens
/// only when the string's content is materialized.
pub(crate) fn skip_string(text: &[u8], pos: usize) -> Result<usize> {
    if text.get(pos) != Some(&b'"') {
        return err(Error::NotAString);
    }
    let mut i = pos + 1;
    loop {
        let Some(rest) = text.get(i..) else {
            return err(Error::UnterminatedString);
        };
        let Some(off) = rest.find_byteset(b"\"\\") else {
            return err(Error::UnterminatedString);
        };
        i += off;
        if text[i] == b'"' {
            return Ok(i + 1);
        }
        i += match text.get(i + 1).copied() {
            Some(b'\\' | b'b' | b'f' | b'n' | b'r' | b't' | b'"') => 2,
            Some(b'u') => 6,
            Some(other) => return err(Error::InvalidEscape(char::from(other))),
            None => return err(Error::UnterminatedString),
        };
    }
}

/// Matches `true`, `false`, or `null` exactly at `pos`.
pub(crate) fn skip_literal(text: &[u8], pos: usize) -> Result<usize> {
    let literal: &[u8] = match text.get(pos) {
        Some(b't') => b"true",
        Some(b'f') => b"false",
        Some(b'n') => b"null",
        _ => return err(Error::MalformedLiteral),
    };
    if text[pos..].starts_with(literal) {
        Ok(pos + literal.len())
    } else {
        err(Error::MalformedLiteral)
    }
}

/// Consumes the maximal run of number characters starting at `pos`.
///
/// An empty run is an error. Anything drawn from the run set is accepted;
/// whether the run spells a meaningful number is the coercion layer's
/// concern.
pub(crate) fn skip_number(text: &[u8], pos: usize) -> Result<usize> {
    let Some(rest) = text.get(pos..) else {
        return err(Error::MalformedNumber);
    };
    let end = rest.find_not_byteset(NUMBER_RUN).map_or(text.len(), |off| pos + off);
    if end == pos {
        return err(Error::MalformedNumber);
    }
    Ok(end)
}

/// Advances past array element separators, stopping at the next
/// significant byte.
pub(crate) fn next_element(text: &[u8], pos: usize) -> Result<usize> {
    let Some(rest) = text.get(pos..) else {
        return err(Error::UnterminatedArray);
    };
    match rest.find_not_byteset(SEPARATORS) {
        Some(off) => Ok(pos + off),
        None => err(Error::UnterminatedArray),
    }
}

/// A key/value pair located inside an object body.
///
/// `key_start..key_end` covers the key's content between its quotes,
/// uninterpreted: keys are raw byte spans and escape sequences in them
/// are not decoded.
pub(crate) struct Pair {
    pub key_start: usize,
    pub key_end: usize,
    pub value_start: usize,
}

/// Outcome of one step of the object walk.
pub(crate) enum PairStep {
    /// The next pair, with the value not yet skipped.
    Entry(Pair),
    /// The closing brace was reached; carries the position one past it.
    End(usize),
}

/// Locates the next key/value pair at or after `pos` inside an object
/// body, or the object's end.
pub(crate) fn next_pair(text: &[u8], pos: usize) -> Result<PairStep> {
    let Some(rest) = text.get(pos..) else {
        return err(Error::UnterminatedObject);
    };
    let Some(off) = rest.find_byteset(b"\"}") else {
        return err(Error::UnterminatedObject);
    };
    let at = pos + off;
    if text[at] == b'}' {
        return Ok(PairStep::End(at + 1));
    }
    let key_start = at + 1;
    let Some(klen) = text[key_start..].find_byte(b'"') else {
        return err(Error::UnterminatedString);
    };
    let key_end = key_start + klen;
    let Some(voff) = text[key_end + 1..].find_not_byteset(KEY_VALUE_GAP) else {
        return err(Error::UnterminatedObject);
    };
    Ok(PairStep::Entry(Pair {
        key_start,
        key_end,
        value_start: key_end + 1 + voff,
    }))
}
