use thiserror::Error;

/// Shorthand for the crate's fallible operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error kinds surfaced by scanning, lookup, indexing, and coercion.
///
/// Every kind is a plain value; chained operations short-circuit through
/// `?` rather than threading a shared flag. "Field absent" and "field
/// present but malformed" are distinguishable by kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A numeric scan consumed no characters, a 32-bit parse overflowed,
    /// or negative text was coerced to an unsigned integer.
    #[error("malformed number")]
    MalformedNumber,
    /// A string scan ran off the end of the buffer before its closing
    /// quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// The character after `\` was not one of the eight supported escape
    /// selectors.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\u` escape carried non-hex digits or named an invalid scalar.
    #[error("malformed string")]
    MalformedString,
    /// A `t`/`f`/`n` token did not spell `true`, `false`, or `null`.
    #[error("malformed literal")]
    MalformedLiteral,
    /// An object scan ran off the end of the buffer, or a key had no
    /// following value.
    #[error("unterminated object")]
    UnterminatedObject,
    /// An array scan ran off the end of the buffer.
    #[error("unterminated array")]
    UnterminatedArray,
    /// A lookup was attempted on a span that does not start with `{`.
    #[error("value is not an object")]
    NotAnObject,
    /// An array operation was attempted on a span that does not start
    /// with `[`.
    #[error("value is not an array")]
    NotAnArray,
    /// A string coercion was attempted on a span that does not start
    /// with `"`.
    #[error("value is not a string")]
    NotAString,
    /// No top-level key matched the requested field name.
    #[error("field not found")]
    FieldNotFound,
    /// The array's closing bracket was reached before the requested
    /// ordinal.
    #[error("array index out of bounds")]
    IndexOutOfBounds,
}

/// Builds the failing branch for `kind`, honoring the abort hook.
///
/// With the `panic-on-error` feature enabled the host has asked for
/// failures to unwind at the point of detection; the error's display text
/// becomes the panic payload.
pub(crate) fn err<T>(kind: Error) -> Result<T> {
    #[cfg(feature = "panic-on-error")]
    panic!("{kind}");

    #[cfg(not(feature = "panic-on-error"))]
    Err(kind)
}
