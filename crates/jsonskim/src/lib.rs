//! Minimal, allocation-free JSON navigation.
//!
//! `jsonskim` locates values inside a raw JSON text buffer by field name
//! or array index without building an in-memory tree. [`parse`] is the
//! identity operation — the whole text is the root [`JsonValue`] — and
//! every lookup narrows that view to the matched value's exact span.
//! Only [`JsonValue::as_string`] and the builder allocate.
//!
//! ```
//! use jsonskim::parse;
//!
//! let doc = parse(r#"{"id": 7, "tags": ["x", "y"]}"#);
//! assert_eq!(doc.lookup_i32("id"), Ok(7));
//!
//! let tags = doc.lookup_array("tags")?;
//! assert_eq!(tags.size(), Ok(2));
//! assert_eq!(tags.index(0)?.text(), r#""x""#);
//! # Ok::<(), jsonskim::Error>(())
//! ```
//!
//! The engine is a *recognizer*, not a validator: it matches delimiters
//! and trusts well-formedness in between, so it accepts some malformed
//! documents that a full parser would reject. Two behaviors are kept
//! deliberately from the engine this one descends from:
//!
//! - [`JsonArray::size`] and [`JsonArray::index`] walk over literal
//!   `true`/`false`/`null` members without counting them;
//! - [`JsonBuilder`] writes keys and values verbatim, with no escaping,
//!   and object keys are matched without unescaping on lookup.
//!
//! With the `panic-on-error` cargo feature, every detected error panics
//! at its point of origin instead of returning; the default is plain
//! [`Result`] values.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod backend;
mod builder;
mod error;
mod scan;
mod unescape;
mod value;

#[cfg(test)]
mod tests;

pub use backend::{JsonBackend, ObjectBuilder, SpanBackend};
pub use builder::{JsonBuilder, Scalar};
pub use error::{Error, Result};
pub use value::{JsonArray, JsonValue, parse};
