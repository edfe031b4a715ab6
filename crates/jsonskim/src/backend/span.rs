use alloc::string::String;

use super::{JsonBackend, ObjectBuilder};
use crate::{
    builder::{JsonBuilder, Scalar},
    error::Result,
    value::{JsonArray, JsonValue, parse},
};

/// The native engine: zero-copy spans over the caller's buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpanBackend;

impl JsonBackend for SpanBackend {
    type Value<'doc> = JsonValue<'doc>;
    type Array<'doc> = JsonArray<'doc>;
    type Builder = JsonBuilder;

    fn parse<'doc>(&self, doc: &'doc str) -> JsonValue<'doc> {
        parse(doc)
    }

    fn lookup<'doc>(&self, value: Self::Value<'doc>, field: &str) -> Result<Self::Value<'doc>> {
        value.lookup(field)
    }

    fn has_field(&self, value: JsonValue<'_>, field: &str) -> Result<bool> {
        value.has_field(field)
    }

    fn has_array_field(&self, value: JsonValue<'_>, field: &str) -> Result<bool> {
        value.has_array_field(field)
    }

    fn as_i32(&self, value: JsonValue<'_>) -> Result<i32> {
        value.as_i32()
    }

    fn as_u32(&self, value: JsonValue<'_>) -> Result<u32> {
        value.as_u32()
    }

    fn as_string(&self, value: JsonValue<'_>) -> Result<String> {
        value.as_string()
    }

    fn as_array<'doc>(&self, value: Self::Value<'doc>) -> Result<Self::Array<'doc>> {
        value.as_array()
    }

    fn is_array(&self, value: JsonValue<'_>) -> Result<bool> {
        value.is_array()
    }

    fn is_object(&self, value: JsonValue<'_>) -> Result<bool> {
        value.is_object()
    }

    fn array_size(&self, array: JsonArray<'_>) -> Result<usize> {
        array.size()
    }

    fn index_array<'doc>(&self, array: Self::Array<'doc>, index: usize) -> Result<Self::Value<'doc>> {
        array.index(index)
    }

    fn builder(&self) -> JsonBuilder {
        JsonBuilder::new()
    }
}

impl ObjectBuilder for JsonBuilder {
    fn begin_object(&mut self) {
        JsonBuilder::begin_object(self);
    }

    fn add_string(&mut self, key: &str, value: &str) {
        JsonBuilder::add_string(self, key, value);
    }

    fn add_array(&mut self, key: &str, items: &[Scalar<'_>]) {
        JsonBuilder::add_array(self, key, items);
    }

    fn end_object(&mut self) {
        JsonBuilder::end_object(self);
    }

    fn finish(self) -> String {
        JsonBuilder::finish(self)
    }
}
