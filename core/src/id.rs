//! Opaque document identifiers.
//!
//! Every document in a collection is addressed by a [`DocId`]: a 24-character
//! lowercase hex token, the shape object ids take in common document stores.
//! The token is opaque: the store only ever compares ids for equality and
//! never interprets the bytes behind the hex.

use crate::document::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of the hex representation of a document id.
pub const DOC_ID_LEN: usize = 24;

/// Opaque identifier for a document.
///
/// Ids are 24 lowercase hex characters. They are generated randomly on
/// insert when the caller does not supply one, and validated for shape
/// (length and alphabet) when parsed from untrusted input such as a URL
/// path segment. Beyond that shape check the value is never interpreted.
///
/// # Examples
///
/// ```
/// use paperbase_core::DocId;
///
/// let id = DocId::parse("67c3395ead7e2ec403b79447")?;
/// assert_eq!(id.as_str(), "67c3395ead7e2ec403b79447");
///
/// let fresh = DocId::generate();
/// assert_ne!(fresh, id);
/// # Ok::<(), paperbase_core::DocumentError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Generate a fresh random id.
    ///
    /// Backed by a v4 UUID truncated to the 24-hex id shape; collisions are
    /// as unlikely as the underlying 96 bits of randomness allow.
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..DOC_ID_LEN].to_string())
    }

    /// Parse an id from its hex representation.
    ///
    /// Uppercase hex is accepted and normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidId`] if the input is not exactly
    /// 24 hex characters.
    pub fn parse(s: &str) -> Result<Self, DocumentError> {
        if s.len() == DOC_ID_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(DocumentError::InvalidId(s.to_string()))
        }
    }

    /// The hex representation of this id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocId {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}
