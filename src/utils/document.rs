use std::collections::BTreeMap;

use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::utils::error::CustomError;

/// The value kinds a stored field may hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Null,
}

pub type Fields = BTreeMap<String, FieldValue>;

/// A document as it leaves the API: string identity plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: ObjectId, fields: Fields) -> Self {
        Record {
            id: id.to_hex(),
            fields,
        }
    }

    /// Builds a record from a raw store document, normalising `_id` to a string.
    pub fn from_document(mut doc: Document) -> Self {
        let id = match doc.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let mut fields = Fields::new();
        for (key, value) in doc {
            match field_from_bson(value) {
                Some(v) => {
                    fields.insert(key, v);
                }
                None => log::warn!("Dropping field {:?} of document {}: unsupported type", key, id),
            }
        }

        Record { id, fields }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl TryFrom<Value> for FieldValue {
    type Error = &'static str;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(FieldValue::Text(s)),
            // Stored as Int64 or Double, so larger unsigned values would not read back the same.
            Value::Number(n) if n.is_u64() && n.as_i64().is_none() => {
                Err("an integer outside the signed 64-bit range")
            }
            Value::Number(n) => Ok(FieldValue::Number(n)),
            Value::Null => Ok(FieldValue::Null),
            Value::Bool(_) => Err("boolean"),
            Value::Array(_) => Err("array"),
            Value::Object(_) => Err("object"),
        }
    }
}

impl From<FieldValue> for Bson {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => Bson::String(s),
            FieldValue::Null => Bson::Null,
            FieldValue::Number(n) => match n.as_i64() {
                Some(i) => Bson::Int64(i),
                None => n.as_f64().map(Bson::Double).unwrap_or(Bson::Null),
            },
        }
    }
}

fn field_from_bson(value: Bson) -> Option<FieldValue> {
    match value {
        Bson::String(s) => Some(FieldValue::Text(s)),
        Bson::Int32(i) => Some(FieldValue::Number(i.into())),
        Bson::Int64(i) => Some(FieldValue::Number(i.into())),
        Bson::Double(f) => Some(Number::from_f64(f).map_or(FieldValue::Null, FieldValue::Number)),
        Bson::Null => Some(FieldValue::Null),
        Bson::DateTime(dt) => dt.try_to_rfc3339_string().ok().map(FieldValue::Text),
        Bson::ObjectId(oid) => Some(FieldValue::Text(oid.to_hex())),
        _ => None,
    }
}

pub fn fields_to_document(fields: Fields) -> Document {
    fields
        .into_iter()
        .map(|(key, value)| (key, Bson::from(value)))
        .collect()
}

/// Parses a raw request body into document fields.
///
/// Empty bodies, malformed JSON, non-object JSON and unsupported value kinds
/// each produce their own 400.
pub fn parse_fields(body: &[u8]) -> Result<Fields, CustomError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CustomError::BadRequestError("Empty request body".into()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|_| CustomError::BadRequestError("Invalid JSON".into()))?;

    let Value::Object(map) = value else {
        return Err(CustomError::ValidationError("JSON must be an object".into()));
    };

    let mut fields = Fields::new();
    for (key, value) in map {
        if key == "_id" || key.starts_with('$') {
            return Err(CustomError::ValidationError(format!(
                "Field {:?} may not be set by the client",
                key
            )));
        }
        // `$set` would read a dotted name as a path into a sub-document.
        if key.is_empty() || key.contains('.') {
            return Err(CustomError::ValidationError(format!(
                "Field name {:?} must be non-empty and contain no '.'",
                key
            )));
        }
        let field = FieldValue::try_from(value).map_err(|kind| {
            CustomError::ValidationError(format!(
                "Field {:?} must be a string, number or null, got {}",
                key, kind
            ))
        })?;
        fields.insert(key, field);
    }

    Ok(fields)
}

/// Resolves an identifier, keeping "missing" and "malformed" apart.
pub fn parse_identifier(raw: Option<&str>) -> Result<ObjectId, CustomError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CustomError::BadRequestError("Missing id".into()))?;

    ObjectId::parse_str(raw)
        .map_err(|_| CustomError::InvalidIdError(format!("{:?} is not a valid id", raw)))
}
