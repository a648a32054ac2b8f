//! Document entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for a binary document (avatar, cover, attachment).
///
/// The binary content itself is transferred separately; other entities
/// reference a document through `avatar-reference`/`cover-reference`
/// attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The document identity; `None` signals an insert.
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

    /// Content hash (hex SHA-256).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Content media type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Content size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// Human-readable description, usually the original filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Server-maintained attribute map.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
