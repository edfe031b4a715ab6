//! Span-backed value references and the lookup/index protocol.
//!
//! A [`JsonValue`] is a borrowed window onto the document text covering
//! exactly one value. Lookup and indexing run the skipper once at match
//! time, so every span handed out is already trimmed to the value's true
//! extent and can be consumed without re-scanning.

use alloc::string::String;

use crate::{
    error::{Error, Result, err},
    scan::{self, PairStep},
    unescape,
};

/// Parses a document into its root value reference.
///
/// This is the identity operation: the whole text is the root value.
/// Nothing is validated here; malformed input surfaces from the first
/// operation that scans it.
#[must_use]
pub fn parse(doc: &str) -> JsonValue<'_> {
    JsonValue { text: doc }
}

/// A non-owning view over the text of a single JSON value.
///
/// The span begins at the value's first character and extends exactly to
/// its last. References are `Copy`, stateless, and valid for as long as
/// the underlying document; they confer no ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonValue<'doc> {
    text: &'doc str,
}

impl<'doc> JsonValue<'doc> {
    /// The raw text this reference covers.
    #[must_use]
    pub fn text(&self) -> &'doc str {
        self.text
    }

    fn bytes(&self) -> &'doc [u8] {
        self.text.as_bytes()
    }

    fn slice(&self, start: usize, end: usize) -> JsonValue<'doc> {
        JsonValue {
            text: &self.text[start..end],
        }
    }

    /// Finds `field` among the object's top-level keys and returns the
    /// matched value's span.
    ///
    /// Keys are compared as raw text, length and content; escape
    /// sequences are not interpreted on either side. The first match
    /// wins. Pairs walked over on the way must scan cleanly, and the
    /// matched value is bounded by running the skipper over it once.
    pub fn lookup(&self, field: &str) -> Result<JsonValue<'doc>> {
        let text = self.bytes();
        if text.first() != Some(&b'{') {
            return err(Error::NotAnObject);
        }
        let needle = field.as_bytes();
        let mut i = 1;
        loop {
            match scan::next_pair(text, i)? {
                PairStep::End(_) => return err(Error::FieldNotFound),
                PairStep::Entry(pair) => {
                    let value_end = scan::skip_value(text, pair.value_start)?;
                    if &text[pair.key_start..pair.key_end] == needle {
                        return Ok(self.slice(pair.value_start, value_end));
                    }
                    i = value_end;
                }
            }
        }
    }

    /// Looks up `field` and coerces it to a signed 32-bit integer.
    pub fn lookup_i32(&self, field: &str) -> Result<i32> {
        self.lookup(field)?.as_i32()
    }

    /// Looks up `field` and coerces it to an unsigned 32-bit integer.
    pub fn lookup_u32(&self, field: &str) -> Result<u32> {
        self.lookup(field)?.as_u32()
    }

    /// Looks up `field` and materializes its string content.
    pub fn lookup_string(&self, field: &str) -> Result<String> {
        self.lookup(field)?.as_string()
    }

    /// Looks up `field` and checks it is array-shaped.
    pub fn lookup_array(&self, field: &str) -> Result<JsonArray<'doc>> {
        self.lookup(field)?.as_array()
    }

    /// Whether `field` names a top-level key.
    ///
    /// Absence is `Ok(false)`; any other lookup failure propagates.
    pub fn has_field(&self, field: &str) -> Result<bool> {
        match self.lookup(field) {
            Ok(_) => Ok(true),
            Err(Error::FieldNotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether `field` names a top-level key holding an array.
    pub fn has_array_field(&self, field: &str) -> Result<bool> {
        match self.lookup(field) {
            Ok(value) => value.is_array(),
            Err(Error::FieldNotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Parses the span's leading `-?[0-9]+` run as a signed 32-bit
    /// integer.
    ///
    /// Trailing non-integer text is ignored, so `12.5` coerces to `12`
    /// and `1e3` to `1`. A run that does not fit in 32 bits is an error
    /// rather than a wrap.
    pub fn as_i32(&self) -> Result<i32> {
        match self.integer_run(true)?.parse() {
            Ok(n) => Ok(n),
            Err(_) => err(Error::MalformedNumber),
        }
    }

    /// Parses the span's leading digit run as an unsigned 32-bit
    /// integer.
    ///
    /// Negative text is rejected outright; it is never reinterpreted as
    /// a large positive value.
    pub fn as_u32(&self) -> Result<u32> {
        match self.integer_run(false)?.parse() {
            Ok(n) => Ok(n),
            Err(_) => err(Error::MalformedNumber),
        }
    }

    fn integer_run(&self, signed: bool) -> Result<&'doc str> {
        let text = self.bytes();
        let mut end = usize::from(signed && text.first() == Some(&b'-'));
        while text.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end == 0 || (end == 1 && text[0] == b'-') {
            return err(Error::MalformedNumber);
        }
        Ok(&self.text[..end])
    }

    /// Materializes the string's content with escape sequences decoded.
    ///
    /// This is the one operation (besides the builder) that allocates:
    /// unescaping cannot be expressed as a sub-span of the document.
    pub fn as_string(&self) -> Result<String> {
        if self.bytes().first() != Some(&b'"') {
            return err(Error::NotAString);
        }
        unescape::unescape(self.text)
    }

    /// Checks the span is array-shaped and rewraps it.
    pub fn as_array(&self) -> Result<JsonArray<'doc>> {
        if self.is_array()? {
            Ok(JsonArray(*self))
        } else {
            err(Error::NotAnArray)
        }
    }

    /// Single-character sniff for `[`. An empty span is an error.
    pub fn is_array(&self) -> Result<bool> {
        match self.bytes().first() {
            Some(b) => Ok(*b == b'['),
            None => err(Error::NotAnArray),
        }
    }

    /// Single-character sniff for `{`. An empty span is an error.
    pub fn is_object(&self) -> Result<bool> {
        match self.bytes().first() {
            Some(b) => Ok(*b == b'{'),
            None => err(Error::NotAnObject),
        }
    }
}

/// A value reference known to be array-shaped.
///
/// Produced only by the array shape checks, so the leading `[` is a type
/// invariant rather than a per-call test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonArray<'doc>(JsonValue<'doc>);

impl<'doc> JsonArray<'doc> {
    /// The underlying value reference.
    #[must_use]
    pub fn as_value(&self) -> JsonValue<'doc> {
        self.0
    }

    /// Counts the array's top-level elements.
    ///
    /// Literal `true`/`false`/`null` members are walked over but not
    /// counted. This asymmetry is inherited behavior, kept deliberately;
    /// see the crate docs.
    pub fn size(&self) -> Result<usize> {
        let text = self.0.bytes();
        let mut i = 1;
        let mut count = 0;
        loop {
            i = scan::next_element(text, i)?;
            match text[i] {
                b']' => return Ok(count),
                b't' | b'f' | b'n' => i = scan::skip_literal(text, i)?,
                _ => {
                    i = scan::skip_value(text, i)?;
                    count += 1;
                }
            }
        }
    }

    /// Returns the element at which the running count reaches `index`.
    ///
    /// The closing bracket is checked first, so an exhausted walk is
    /// always `IndexOutOfBounds`. Because literal members do not advance
    /// the count (see [`size`]), a literal sitting where the count
    /// matches is returned, and elements after it shift accordingly.
    ///
    /// [`size`]: JsonArray::size
    pub fn index(&self, index: usize) -> Result<JsonValue<'doc>> {
        let text = self.0.bytes();
        let mut i = 1;
        let mut count = 0;
        loop {
            i = scan::next_element(text, i)?;
            if text[i] == b']' {
                return err(Error::IndexOutOfBounds);
            }
            if count == index {
                let end = scan::skip_value(text, i)?;
                return Ok(self.0.slice(i, end));
            }
            match text[i] {
                b't' | b'f' | b'n' => i = scan::skip_literal(text, i)?,
                _ => {
                    i = scan::skip_value(text, i)?;
                    count += 1;
                }
            }
        }
    }
}
