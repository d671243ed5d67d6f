//! Conversion between request/response JSON and BSON documents

use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// Render a BSON value as plain JSON.
///
/// ObjectIds become their 24-character hex string and dates become RFC 3339
/// strings with millisecond precision; every other value uses relaxed extended JSON.
pub fn to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => {
            Value::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc.into_iter().map(|(k, v)| (k, to_json(v))).collect();
    Value::Object(map)
}

/// Interpret a request body as a document to store.
///
/// The conversion is structural: keys starting with `$` are kept as ordinary
/// field names, never read as extended JSON.
pub fn to_document(body: Value) -> Result<Document> {
    match body {
        Value::Object(map) => Ok(object_to_document(map)),
        other => Err(Error::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn object_to_document(map: Map<String, Value>) -> Document {
    let mut doc = Document::new();
    for (key, value) in map {
        doc.insert(key, to_bson(value));
    }
    doc
}

fn to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(to_bson).collect()),
        Value::Object(map) => Bson::Document(object_to_document(map)),
    }
}

// Integers take the narrowest BSON integer type; anything else is a double
fn number_to_bson(n: &Number) -> Bson {
    match n.as_i64() {
        Some(i) => match i32::try_from(i) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(i),
        },
        None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
