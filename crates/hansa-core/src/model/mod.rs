//! Entity models exchanged with the web-services.
//!
//! Entities are JSON records; the client validates only the identifying
//! fields it needs to address requests. Every entity carries the common
//! envelope (identity, version, created/modified timestamps, attributes map)
//! plus its own payload fields; fields the server sets that this client does
//! not model are preserved through the flattened `extra` map.
//!
//! Conventions: identities are integers, monetary amounts are integer cents,
//! timestamps are milliseconds since the Unix epoch.

mod auction;
mod catalog;
mod document;
mod offer;
mod order;
mod person;

pub use auction::{Auction, AuctionStatus, Bid, Role};
pub use catalog::{AccessPlan, Flick, Season, Series};
pub use document::Document;
pub use offer::Offer;
pub use order::Order;
pub use person::{Account, Address, Group, Name, Person, Phone};

use serde_json::{Map, Value};

/// Reads an integer reference (e.g. "seller-reference") from an entity's
/// attributes map.
pub(crate) fn attribute_reference(attributes: &Map<String, Value>, key: &str) -> Option<i64> {
    attributes.get(key).and_then(Value::as_i64)
}
