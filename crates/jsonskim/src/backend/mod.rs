//! Capability interface over swappable JSON navigation engines.
//!
//! Code written against [`JsonBackend`] can migrate to a different JSON
//! engine by supplying another implementation; the operation set is
//! exactly the one the span engine exposes. Lifetime-carrying associated
//! types let an implementation hand out borrowed views into the caller's
//! document.

mod span;

pub use span::SpanBackend;

use alloc::string::String;

use crate::{builder::Scalar, error::Result};

/// The full operation set of a JSON navigation engine.
pub trait JsonBackend {
    /// A reference to a single JSON value inside a document.
    type Value<'doc>: Copy;
    /// A value reference known to be array-shaped.
    type Array<'doc>: Copy;
    /// The engine's flat-object builder.
    type Builder: ObjectBuilder;

    /// Roots a document. For span engines this is the identity
    /// operation.
    fn parse<'doc>(&self, doc: &'doc str) -> Self::Value<'doc>;

    /// Finds a top-level field's value.
    fn lookup<'doc>(&self, value: Self::Value<'doc>, field: &str) -> Result<Self::Value<'doc>>;

    /// Whether `field` names a top-level key.
    fn has_field(&self, value: Self::Value<'_>, field: &str) -> Result<bool>;

    /// Whether `field` names a top-level key holding an array.
    fn has_array_field(&self, value: Self::Value<'_>, field: &str) -> Result<bool>;

    /// Coerces a value to a signed 32-bit integer.
    fn as_i32(&self, value: Self::Value<'_>) -> Result<i32>;

    /// Coerces a value to an unsigned 32-bit integer.
    fn as_u32(&self, value: Self::Value<'_>) -> Result<u32>;

    /// Materializes a string value's content.
    fn as_string(&self, value: Self::Value<'_>) -> Result<String>;

    /// Checks a value is array-shaped.
    fn as_array<'doc>(&self, value: Self::Value<'doc>) -> Result<Self::Array<'doc>>;

    /// Whether the value is array-shaped.
    fn is_array(&self, value: Self::Value<'_>) -> Result<bool>;

    /// Whether the value is object-shaped.
    fn is_object(&self, value: Self::Value<'_>) -> Result<bool>;

    /// Counts an array's top-level elements.
    fn array_size(&self, array: Self::Array<'_>) -> Result<usize>;

    /// Returns an array element by ordinal.
    fn index_array<'doc>(
        &self,
        array: Self::Array<'doc>,
        index: usize,
    ) -> Result<Self::Value<'doc>>;

    /// Creates a fresh builder for one flat object.
    fn builder(&self) -> Self::Builder;
}

/// Builder capability: one flat object per instance.
pub trait ObjectBuilder {
    /// Opens the object.
    fn begin_object(&mut self);

    /// Appends a string-valued field.
    fn add_string(&mut self, key: &str, value: &str);

    /// Appends a field holding an array of scalars.
    fn add_array(&mut self, key: &str, items: &[Scalar<'_>]);

    /// Closes the object.
    fn end_object(&mut self);

    /// Consumes the builder, returning the finished text.
    fn finish(self) -> String;
}
