//! Person entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A registered person (seller, bidder, buyer, or editor).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// The person identity; `None` signals an insert.
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

    /// The login email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The authorization group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,

    /// The person's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,

    /// The postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// The bank account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    /// The phone numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,

    /// Server-maintained attribute map (e.g. "avatar-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    /// Returns the referenced avatar document identity, if any.
    pub fn avatar_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "avatar-reference")
    }

    /// Returns whether this person belongs to the ADMIN group.
    pub fn is_admin(&self) -> bool {
        self.group == Some(Group::Admin)
    }
}

/// A person's authorization group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Group {
    /// Administrative access to all resources.
    Admin,
    /// Regular account.
    User,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Admin => write!(f, "ADMIN"),
            Group::User => write!(f, "USER"),
        }
    }
}

/// A person's name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forename: Option<String>,
}

/// A postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A bank account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// A phone record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// The phone number.
    pub number: String,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn group_wire_format() {
        assert_eq!(serde_json::to_value(Group::Admin).unwrap(), json!("ADMIN"));
        assert_eq!(
            serde_json::from_value::<Group>(json!("USER")).unwrap(),
            Group::User
        );
    }

    #[test]
    fn avatar_reference_from_attributes() {
        let person: Person = serde_json::from_value(json!({
            "identity": 7,
            "attributes": { "avatar-reference": 12 }
        }))
        .unwrap();
        assert_eq!(person.avatar_reference(), Some(12));
    }

    #[test]
    fn insert_payload_omits_identity() {
        let person = Person {
            email: Some("alice@example.com".into()),
            ..Person::default()
        };
        let value = serde_json::to_value(&person).unwrap();
        assert!(value.get("identity").is_none());
        assert_eq!(value["email"], json!("alice@example.com"));
    }
}
