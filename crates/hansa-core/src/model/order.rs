//! Order entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Offer;

/// An order placed on an offer.
///
/// Orders are created implicitly by the server when an offer is ordered;
/// the client advances them by patching the tracking reference (departure)
/// or patching with an empty body (arrival confirmation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The order identity.
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

    /// The server-assigned lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Payment timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payed: Option<i64>,

    /// Departure timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departed: Option<i64>,

    /// Arrival timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrived: Option<i64>,

    /// The carrier tracking reference, once departed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_reference: Option<String>,

    /// The ordered offer, embedded by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,

    /// Server-maintained attribute map ("buyer-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Returns the buyer's person identity, if present.
    pub fn buyer_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "buyer-reference")
    }
}
