// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Generic XML tree decoding
//!
//! NUnit result files are first decoded into a schema-less tree of
//! [`serde_json::Value`]s, where attributes and child elements are folded into a
//! single mapping keyed by attribute or tag name:
//!
//! - an element with neither attributes nor children becomes its text,
//! - an element with attributes or children becomes an object, with any text
//!   content stored under [`TEXT_KEY`],
//! - repeated child tags become an array in document order.
//!
//! The result is ambiguous about cardinality: a suite with one child case
//! holds an object under `test-case`, a suite with two holds an array.
//! [`canonicalize`] removes that ambiguity for the fields that are
//! collections in the NUnit schema.
//!
//! # Example
//!
//! ```
//! use nunit_results::xml::{canonicalize, parse_document};
//!
//! let mut tree = parse_document(r#"<test-suite name="A"><test-case name="x"/></test-suite>"#)
//!     .unwrap();
//! canonicalize(&mut tree);
//! assert!(tree["test-suite"][0]["test-case"].is_array());
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use crate::error::ResultsError;

/// Key under which text content of a mixed element is stored
pub const TEXT_KEY: &str = "#text";

/// Fields that may occur once or many times under the same parent
pub const COLLECTION_FIELDS: &[&str] = &["test-suite", "test-case", "property"];

/// An element whose end tag has not been seen yet
struct Frame {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, ResultsError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            insert_field(&mut fields, key, Value::String(value));
        }
        Ok(Self {
            name,
            fields,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let Frame {
            name,
            mut fields,
            text,
        } = self;
        if fields.is_empty() {
            return (name, Value::String(text));
        }
        if !text.is_empty() {
            fields.insert(TEXT_KEY.to_string(), Value::String(text));
        }
        (name, Value::Object(fields))
    }
}

/// Insert a field, turning repeated keys into an array
fn insert_field(fields: &mut Map<String, Value>, key: String, value: Value) {
    match fields.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(key, value);
        }
    }
}

/// Decode an XML document into a generic tree
///
/// The returned value is an object keyed by the document's root element name.
///
/// # Errors
///
/// Returns `ResultsError::Xml` if the reader rejects the document and
/// `ResultsError::MalformedXml` if elements are left unclosed.
pub fn parse_document(xml: &str) -> Result<Value, ResultsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = Map::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => stack.push(Frame::open(&e)?),
            Event::Empty(e) => {
                let (name, value) = Frame::open(&e)?.close();
                match stack.last_mut() {
                    Some(parent) => insert_field(&mut parent.fields, name, value),
                    None => insert_field(&mut document, name, value),
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| ResultsError::MalformedXml {
                    message: "end tag without a matching start tag".to_string(),
                })?;
                let (name, value) = frame.close();
                match stack.last_mut() {
                    Some(parent) => insert_field(&mut parent.fields, name, value),
                    None => insert_field(&mut document, name, value),
                }
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            // Declarations, comments and processing instructions carry no results
            _ => (),
        }
    }

    if let Some(frame) = stack.last() {
        return Err(ResultsError::MalformedXml {
            message: format!("unclosed element <{}>", frame.name),
        });
    }

    Ok(Value::Object(document))
}

/// Normalize every collection field to an array of objects
///
/// A single occurrence becomes a one-element array, existing arrays keep
/// their order, and scalar entries (elements that had no attributes or
/// children) are lifted into objects. Applying it twice is the same as
/// applying it once.
pub fn canonicalize(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields.iter_mut() {
                if COLLECTION_FIELDS.contains(&key.as_str()) {
                    into_records(field);
                }
                canonicalize(field);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(canonicalize),
        _ => (),
    }
}

fn into_records(field: &mut Value) {
    if !field.is_array() {
        let single = field.take();
        *field = Value::Array(vec![single]);
    }
    if let Value::Array(items) = field {
        for item in items.iter_mut() {
            lift_scalar(item);
        }
    }
}

fn lift_scalar(item: &mut Value) {
    let lifted = match &mut *item {
        Value::Object(_) => return,
        Value::Null => Map::new(),
        Value::String(text) if text.is_empty() => Map::new(),
        other => {
            let mut fields = Map::new();
            fields.insert(TEXT_KEY.to_string(), other.take());
            fields
        }
    };
    *item = Value::Object(lifted);
}
