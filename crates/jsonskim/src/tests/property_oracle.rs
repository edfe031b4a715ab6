//! Property tests that pit the span engine against a full JSON parser.
//!
//! Documents are generated as `serde_json` trees, serialized, and then
//! navigated with this crate; the tree is the oracle for what every
//! lookup should see. Keys are kept escape-free and unique so that raw
//! key comparison matches the serialized text.

use alloc::{
    format,
    string::{String, ToString},
};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use serde_json::{Map, Number, Value};

use crate::{Error, parse, scan};

#[derive(Clone, Debug)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut map = Map::new();
        for n in 0..(usize::arbitrary(g) % 6) {
            map.insert(key(g, n), value(g, 2));
        }
        Doc(Value::Object(map))
    }
}

fn key(g: &mut Gen, n: usize) -> String {
    let stem = g
        .choose(&["id", "name", "count", "tag", "flag", "data"])
        .unwrap();
    format!("{stem}{n}")
}

fn value(g: &mut Gen, depth: usize) -> Value {
    let pick = u8::arbitrary(g) % if depth == 0 { 4 } else { 6 };
    match pick {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Number(Number::from(i64::arbitrary(g))),
        3 => Value::String(String::arbitrary(g)),
        4 => Value::Array(
            (0..(usize::arbitrary(g) % 4))
                .map(|_| value(g, depth - 1))
                .collect(),
        ),
        _ => {
            let mut map = Map::new();
            for n in 0..(usize::arbitrary(g) % 4) {
                map.insert(key(g, n), value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

#[test]
fn skip_consumes_exactly_the_serialized_document() {
    fn prop(doc: Doc) -> bool {
        let text = doc.0.to_string();
        scan::skip_value(text.as_bytes(), 0) == Ok(text.len())
    }

    QuickCheck::new().tests(300).quickcheck(prop as fn(Doc) -> bool);
}

#[test]
fn lookup_agrees_with_the_full_parser() {
    fn prop(doc: Doc) -> bool {
        let text = doc.0.to_string();
        let root = parse(&text);
        let Value::Object(map) = &doc.0 else {
            return false;
        };
        let members_agree = map.iter().all(|(k, expected)| match root.lookup(k) {
            Ok(span) => {
                serde_json::from_str::<Value>(span.text()).is_ok_and(|v| &v == expected)
            }
            Err(_) => false,
        });
        members_agree && root.lookup("absent-key") == Err(Error::FieldNotFound)
    }

    QuickCheck::new().tests(300).quickcheck(prop as fn(Doc) -> bool);
}

#[test]
fn size_counts_exactly_the_non_literal_elements() {
    fn prop(doc: Doc) -> bool {
        let text = doc.0.to_string();
        let root = parse(&text);
        let Value::Object(map) = &doc.0 else {
            return false;
        };
        map.iter()
            .filter_map(|(k, v)| v.as_array().map(|items| (k, items)))
            .all(|(k, items)| {
                let expected = items
                    .iter()
                    .filter(|v| !v.is_null() && !v.is_boolean())
                    .count();
                root.lookup_array(k).is_ok_and(|a| a.size() == Ok(expected))
            })
    }

    QuickCheck::new().tests(300).quickcheck(prop as fn(Doc) -> bool);
}
