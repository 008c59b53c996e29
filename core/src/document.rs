//! Schema-flexible documents and the typed-record boundary.
//!
//! A [`Document`] is a JSON object paired with its [`DocId`]. Collections
//! store documents; callers that want structure decode them into typed
//! records at the fetch boundary via [`Document::decode`], where missing or
//! malformed required fields surface as [`DocumentError`] instead of
//! leaking partially-shaped data into domain code.

use crate::id::DocId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Reserved field name under which a document exposes its id.
pub const ID_FIELD: &str = "_id";

/// Errors raised at the document boundary.
///
/// These are invalid-input errors: they mean the caller handed the store
/// (or the store handed the caller) a record that is structurally broken.
/// A foreign key that points at nothing is NOT one of these; dangling
/// references are represented as absence, never as an error.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// An id token with the wrong length or alphabet.
    #[error("invalid document id: {0:?}")]
    InvalidId(String),

    /// A document body that is not a JSON object.
    #[error("document body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A record that could not be serialized into a document body.
    #[error("failed to serialize record: {0}")]
    Serialize(String),

    /// A record embedded an `_id` different from the id the operation
    /// addresses.
    #[error("embedded _id {embedded} conflicts with target id {target}")]
    IdMismatch {
        /// The `_id` the record carried.
        embedded: DocId,
        /// The id the operation addressed.
        target: DocId,
    },

    /// A typed decode that failed (missing field, wrong type, bad id).
    #[error("failed to decode document {id}: {message}")]
    Decode {
        /// Id of the document that failed to decode.
        id: DocId,
        /// Underlying serde error message.
        message: String,
    },
}

/// A document: one JSON object stored in a named collection.
///
/// The id lives outside the field map and is injected under [`ID_FIELD`]
/// whenever the document is viewed as a single JSON value, mirroring how
/// document stores surface `_id`.
///
/// # Examples
///
/// ```
/// use paperbase_core::Document;
/// use serde_json::json;
///
/// let doc = Document::from_value(None, json!({"name": "Laptop", "price": 1200}))?;
/// assert_eq!(doc.get("name"), Some(&json!("Laptop")));
/// # Ok::<(), paperbase_core::DocumentError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    id: DocId,
    fields: Map<String, Value>,
}

impl Document {
    /// Create a document from an id and a field map.
    #[must_use]
    pub const fn new(id: DocId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Build a document from any JSON value.
    ///
    /// The value must serialize to a JSON object. If the object carries an
    /// [`ID_FIELD`] entry it becomes the document id (and is removed from
    /// the field map); otherwise `id` is used, and a fresh id is generated
    /// when neither is present.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] for non-object values and
    /// [`DocumentError::InvalidId`] if an embedded `_id` is malformed.
    pub fn from_value(id: Option<DocId>, value: Value) -> Result<Self, DocumentError> {
        let Value::Object(mut fields) = value else {
            return Err(DocumentError::NotAnObject(json_type_name(&value)));
        };

        let id = match fields.remove(ID_FIELD) {
            Some(Value::String(s)) => DocId::parse(&s)?,
            Some(other) => return Err(DocumentError::InvalidId(other.to_string())),
            None => id.unwrap_or_else(DocId::generate),
        };

        Ok(Self { id, fields })
    }

    /// Serialize any record into a document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] if `record` does not
    /// serialize to a JSON object, or [`DocumentError::InvalidId`] if it
    /// carries a malformed `_id`.
    pub fn from_record<T: Serialize>(id: Option<DocId>, record: &T) -> Result<Self, DocumentError> {
        let value =
            serde_json::to_value(record).map_err(|e| DocumentError::Serialize(e.to_string()))?;
        Self::from_value(id, value)
    }

    /// This document's id.
    #[must_use]
    pub const fn id(&self) -> &DocId {
        &self.id
    }

    /// Look up a field. Returns `None` for absent fields; `_id` is not in
    /// the field map (use [`Document::id`]).
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, returning whether the stored value changed.
    ///
    /// The [`ID_FIELD`] is immutable and silently ignored here.
    pub fn set(&mut self, field: &str, value: Value) -> bool {
        if field == ID_FIELD {
            return false;
        }
        match self.fields.get(field) {
            Some(existing) if *existing == value => false,
            _ => {
                self.fields.insert(field.to_string(), value);
                true
            }
        }
    }

    /// Borrow the raw field map (without `_id`).
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// View the document as a single JSON object including its `_id`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert(ID_FIELD.to_string(), Value::String(self.id.as_str().to_string()));
        Value::Object(fields)
    }

    /// Decode this document into a typed record.
    ///
    /// The record sees the document as one JSON object with `_id` included,
    /// so typed ids map naturally via `#[serde(rename = "_id")]`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Decode`] when a required field is missing
    /// or has the wrong type, the structural violation the caller must
    /// not silently absorb.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DocumentError> {
        serde_json::from_value(self.to_value()).map_err(|e| DocumentError::Decode {
            id: self.id.clone(),
            message: e.to_string(),
        })
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
