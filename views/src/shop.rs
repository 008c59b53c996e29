//! Typed records for the shop collections.
//!
//! These are the structured counterparts of the schema-flexible documents
//! in `customers`, `products`, and `orders`. Each record decodes from a
//! [`Document`] at the fetch boundary; a missing or mistyped required
//! field fails there as [`ViewError::InvalidInput`] instead of leaking a
//! half-shaped record into the join.

use crate::ViewError;
use paperbase_core::{DocId, Document};
use serde::{Deserialize, Serialize};

/// A customer record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    #[serde(rename = "_id")]
    pub id: DocId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// A product record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: DocId,
    /// Display name.
    pub name: String,
    /// Unit price in the store's base currency unit.
    pub price: i64,
}

/// An order referencing a customer and a sequence of products by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    #[serde(rename = "_id")]
    pub id: DocId,
    /// Order total.
    pub amount: i64,
    /// Foreign key into `customers`. May dangle.
    pub customer_id: DocId,
    /// Foreign keys into `products`, in the order they were bought.
    /// Entries may dangle.
    pub product_ids: Vec<DocId>,
}

/// The join-view output: an order with its references resolved.
///
/// A transient, derived record: built fresh on each resolution call and
/// never persisted. Owns deep copies of the referenced records, so
/// mutating one enriched order never affects another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedOrder {
    /// Order identifier.
    #[serde(rename = "_id")]
    pub id: DocId,
    /// Order total.
    pub amount: i64,
    /// The original customer reference, kept for traceability.
    pub customer_id: DocId,
    /// The original product references, kept for traceability.
    pub product_ids: Vec<DocId>,
    /// The referenced customer, or `None` when the reference dangles.
    pub customer: Option<Customer>,
    /// The referenced products that exist, in `product_ids` order.
    /// Dangling references are omitted.
    pub products: Vec<Product>,
}

impl Customer {
    /// Decode a customer from its document.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidInput`] when required fields are
    /// missing or mistyped.
    pub fn from_document(doc: &Document) -> Result<Self, ViewError> {
        Ok(doc.decode()?)
    }
}

impl Product {
    /// Decode a product from its document.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidInput`] when required fields are
    /// missing or mistyped.
    pub fn from_document(doc: &Document) -> Result<Self, ViewError> {
        Ok(doc.decode()?)
    }
}

impl Order {
    /// Decode an order from its document.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidInput`] when required fields are
    /// missing or mistyped. This is the well-formedness check orders must
    /// pass before they reach the resolver.
    pub fn from_document(doc: &Document) -> Result<Self, ViewError> {
        Ok(doc.decode()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_decodes_from_document() {
        let doc = Document::from_value(
            None,
            json!({
                "_id": "67c33a10ad7e2ec403b7944c",
                "amount": 2000,
                "customer_id": "67c3395ead7e2ec403b79447",
                "product_ids": ["67c339f8ad7e2ec403b7944a", "67c339d5ad7e2ec403b79449"],
            }),
        )
        .unwrap();

        let order = Order::from_document(&doc).unwrap();
        assert_eq!(order.amount, 2000);
        assert_eq!(order.product_ids.len(), 2);
        assert_eq!(order.customer_id.as_str(), "67c3395ead7e2ec403b79447");
    }

    #[test]
    fn order_missing_required_field_is_invalid_input() {
        let doc = Document::from_value(
            None,
            json!({"amount": 2000, "product_ids": []}),
        )
        .unwrap();
        let err = Order::from_document(&doc).unwrap_err();
        assert!(matches!(err, ViewError::InvalidInput(_)));
    }

    #[test]
    fn order_with_malformed_reference_is_invalid_input() {
        let doc = Document::from_value(
            None,
            json!({
                "amount": 2000,
                "customer_id": "not-a-valid-id",
                "product_ids": [],
            }),
        )
        .unwrap();
        let err = Order::from_document(&doc).unwrap_err();
        assert!(matches!(err, ViewError::InvalidInput(_)));
    }

    #[test]
    fn customer_round_trips_through_serde() {
        let customer = Customer {
            id: DocId::parse("67c3395ead7e2ec403b79447").unwrap(),
            name: "Selvakumar".to_string(),
            email: "vselva1@gmail.com".to_string(),
        };
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["_id"], json!("67c3395ead7e2ec403b79447"));
        let back: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(back, customer);
    }
}
