//! Auction and bid entity models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An auction listing.
///
/// Status transitions (OPEN, SEALED, CLOSED) are driven by the server based
/// on the closure timestamp; the client only reads them back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    /// The auction identity; `None` signals an insert.
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

    /// The asking price in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asking_price: Option<i64>,

    /// The closure timestamp in ms since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure: Option<i64>,

    /// Whether bids are currently hidden from other bidders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed: Option<bool>,

    /// Server-maintained attribute map ("seller-reference", "bid-count",
    /// "avatar-reference", "status").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Auction {
    /// Returns the seller's person identity, if present.
    pub fn seller_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "seller-reference")
    }

    /// Returns the referenced avatar document identity, if any.
    pub fn avatar_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "avatar-reference")
    }

    /// Returns the number of bids on this auction, if present.
    pub fn bid_count(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "bid-count")
    }

    /// Returns the server-assigned auction status, if present.
    pub fn status(&self) -> Option<AuctionStatus> {
        let status = self.attributes.get("status")?.as_str()?;
        serde_json::from_value(Value::String(status.to_string())).ok()
    }
}

/// The server-driven auction lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuctionStatus {
    /// Accepting bids, bids visible.
    Open,
    /// Accepting bids, bids hidden.
    Sealed,
    /// No longer accepting bids.
    Closed,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionStatus::Open => write!(f, "OPEN"),
            AuctionStatus::Sealed => write!(f, "SEALED"),
            AuctionStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

/// The requester's role relative to an auction or offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Seller,
    Bidder,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Seller => write!(f, "SELLER"),
            Role::Bidder => write!(f, "BIDDER"),
        }
    }
}

/// A bid on an auction, keyed by auction and bidder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// The bid identity.
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

    /// The bid amount in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Server-maintained attribute map ("bidder-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bid {
    /// Returns the bidder's person identity, if present.
    pub fn bidder_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "bidder-reference")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_from_attributes() {
        let auction: Auction = serde_json::from_value(json!({
            "identity": 42,
            "attributes": { "status": "SEALED", "seller-reference": 7, "bid-count": 3 }
        }))
        .unwrap();
        assert_eq!(auction.status(), Some(AuctionStatus::Sealed));
        assert_eq!(auction.seller_reference(), Some(7));
        assert_eq!(auction.bid_count(), Some(3));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let payload = json!({
            "identity": 42,
            "askingPrice": 12_500,
            "provenance": "estate sale"
        });
        let auction: Auction = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(auction.asking_price, Some(12_500));
        assert_eq!(serde_json::to_value(&auction).unwrap(), payload);
    }
}
