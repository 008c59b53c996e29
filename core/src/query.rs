//! Filters and update patches for collection operations.
//!
//! This is deliberately not a query planner. [`Filter`] covers the
//! predicates the store actually needs (match everything, field equality,
//! and the two numeric range checks) and [`Update`] covers the set-fields
//! patch. Anything fancier belongs to the caller, over fetched documents.

use crate::document::{Document, ID_FIELD};
use serde_json::Value;

/// A predicate over documents.
///
/// A filter never errors: a missing field or a type mismatch simply makes
/// the predicate false for that document.
///
/// # Examples
///
/// ```
/// use paperbase_core::{Document, Filter};
/// use serde_json::json;
///
/// let doc = Document::from_value(None, json!({"name": "Diana", "age": 18}))?;
/// assert!(Filter::eq("name", "Diana").matches(&doc));
/// assert!(Filter::gte("age", 18).matches(&doc));
/// assert!(!Filter::lt("age", 18).matches(&doc));
/// # Ok::<(), paperbase_core::DocumentError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Field equals a value. Matching on `_id` compares against the
    /// document id.
    Eq {
        /// Field to compare.
        field: String,
        /// Value the field must equal.
        value: Value,
    },
    /// Numeric field is greater than or equal to a value.
    Gte {
        /// Field to compare.
        field: String,
        /// Lower bound (inclusive).
        value: Value,
    },
    /// Numeric field is strictly less than a value.
    Lt {
        /// Field to compare.
        field: String,
        /// Upper bound (exclusive).
        value: Value,
    },
}

impl Filter {
    /// Equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Greater-than-or-equal filter (numeric fields).
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gte {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Strictly-less-than filter (numeric fields).
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lt {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Filter matching a single document by id.
    #[must_use]
    pub fn by_id(id: &crate::DocId) -> Self {
        Self::eq(ID_FIELD, id.as_str())
    }

    /// Evaluate this filter against a document.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Eq { field, value } => {
                if field == ID_FIELD {
                    value.as_str() == Some(doc.id().as_str())
                } else {
                    doc.get(field) == Some(value)
                }
            }
            Self::Gte { field, value } => compare_numeric(doc, field, value, |f, v| f >= v),
            Self::Lt { field, value } => compare_numeric(doc, field, value, |f, v| f < v),
        }
    }
}

/// Numeric comparison helper: false when either side is absent or not a
/// number, mirroring how document stores skip type-mismatched documents.
fn compare_numeric(doc: &Document, field: &str, value: &Value, cmp: fn(f64, f64) -> bool) -> bool {
    match (doc.get(field).and_then(Value::as_f64), value.as_f64()) {
        (Some(field_value), Some(bound)) => cmp(field_value, bound),
        _ => false,
    }
}

/// A set-fields patch applied to matched documents.
///
/// Fields named in the patch are written (added or replaced); all other
/// fields are left untouched. The document id cannot be patched.
///
/// # Examples
///
/// ```
/// use paperbase_core::Update;
///
/// let patch = Update::new().set("name", "Selvakumar").set("age", 25);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    fields: Vec<(String, Value)>,
}

impl Update {
    /// An empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to set.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Whether the patch names no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Apply the patch in place, returning whether any stored value
    /// actually changed.
    pub fn apply(&self, doc: &mut Document) -> bool {
        let mut changed = false;
        for (field, value) in &self.fields {
            changed |= doc.set(field, value.clone());
        }
        changed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::DocId;
    use serde_json::json;

    fn employee(name: &str, age: u32) -> Document {
        Document::from_value(None, json!({"name": name, "age": age})).unwrap()
    }

    #[test]
    fn all_matches_everything() {
        assert!(Filter::All.matches(&employee("Selva", 24)));
    }

    #[test]
    fn eq_on_fields() {
        let doc = employee("Narumugai", 8);
        assert!(Filter::eq("name", "Narumugai").matches(&doc));
        assert!(!Filter::eq("name", "Diana").matches(&doc));
        assert!(Filter::eq("age", 8).matches(&doc));
    }

    #[test]
    fn eq_on_missing_field_is_false() {
        assert!(!Filter::eq("salary", 1000).matches(&employee("Selva", 24)));
    }

    #[test]
    fn by_id_matches_document_id() {
        let id = DocId::parse("67c3395ead7e2ec403b79447").unwrap();
        let doc = Document::from_value(
            Some(id.clone()),
            json!({"name": "Selva"}),
        )
        .unwrap();
        assert!(Filter::by_id(&id).matches(&doc));
        assert!(!Filter::by_id(&DocId::generate()).matches(&doc));
    }

    #[test]
    fn range_filters_match_adults() {
        let adult = employee("Diana", 18);
        let minor = employee("Narumugai", 8);
        assert!(Filter::gte("age", 18).matches(&adult));
        assert!(!Filter::gte("age", 18).matches(&minor));
        assert!(Filter::lt("age", 18).matches(&minor));
        assert!(!Filter::lt("age", 18).matches(&adult));
    }

    #[test]
    fn range_on_non_numeric_field_is_false() {
        let doc = employee("Selva", 24);
        assert!(!Filter::gte("name", 18).matches(&doc));
        assert!(!Filter::lt("name", 18).matches(&doc));
    }

    #[test]
    fn update_sets_and_reports_modification() {
        let mut doc = employee("Selva", 24);
        let patch = Update::new().set("name", "Selvakumar").set("age", 25);
        assert!(patch.apply(&mut doc));
        assert_eq!(doc.get("name"), Some(&json!("Selvakumar")));
        assert_eq!(doc.get("age"), Some(&json!(25)));

        // Re-applying the same patch changes nothing
        assert!(!patch.apply(&mut doc));
    }

    #[test]
    fn update_cannot_touch_id() {
        let mut doc = employee("Selva", 24);
        let before = doc.id().clone();
        let patch = Update::new().set("_id", "67c3395ead7e2ec403b79447");
        assert!(!patch.apply(&mut doc));
        assert_eq!(doc.id(), &before);
    }
}
