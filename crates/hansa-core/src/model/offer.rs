//! Offer entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A fixed-price sales offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// The offer identity; `None` signals an insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<i64>,

    /// The entity version, for optimistic locking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Creation timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Modification timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,

    /// The article category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The article condition rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    /// The article name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The article description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The article manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// The article manufacture year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<i32>,

    /// The article serial, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    /// The sales price in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,

    /// The postage fee in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postage: Option<i64>,

    /// Whether the offer can currently be ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    /// Server-maintained attribute map ("seller-reference",
    /// "avatar-reference", "order-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Offer {
    /// Returns the seller's person identity, if present.
    pub fn seller_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "seller-reference")
    }

    /// Returns the referenced avatar document identity, if any.
    pub fn avatar_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "avatar-reference")
    }

    /// Returns the identity of the order placed on this offer, if any.
    pub fn order_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "order-reference")
    }
}
