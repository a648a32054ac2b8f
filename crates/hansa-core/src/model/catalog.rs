//! Media catalogue entity models (series, seasons, flicks, access plans).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A media series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// The series identity; `None` signals an insert.
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

    /// The series title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The first release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    /// The announced number of seasons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_total: Option<i32>,

    /// Server-maintained attribute map ("cover-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    /// Returns the referenced cover document identity, if any.
    pub fn cover_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "cover-reference")
    }
}

/// A season within a series, addressed by ordinal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// The season identity; `None` signals an insert.
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

    /// The season ordinal within its series (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i32>,

    /// The release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    /// The announced number of episodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_total: Option<i32>,

    /// Server-maintained attribute map ("series-reference",
    /// "cover-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Season {
    /// Returns the parent series identity, if present.
    pub fn series_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "series-reference")
    }

    /// Returns the referenced cover document identity, if any.
    pub fn cover_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "cover-reference")
    }
}

/// A single flick (movie or episode), optionally with a recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flick {
    /// The flick identity; `None` signals an insert.
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

    /// The flick title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The episode ordinal within its season, if episodic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i32>,

    /// The release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    /// The genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// The producers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producers: Option<String>,

    /// The directors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directors: Option<String>,

    /// The credited actors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,

    /// The portrayed characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    /// The synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,

    /// Server-maintained attribute map ("season-reference",
    /// "avatar-reference", "recording-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Flick {
    /// Returns the parent season identity, if present.
    pub fn season_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "season-reference")
    }

    /// Returns the referenced avatar document identity, if any.
    pub fn avatar_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "avatar-reference")
    }

    /// Returns whether a recording is associated with this flick.
    pub fn recorded(&self) -> bool {
        super::attribute_reference(&self.attributes, "recording-reference").is_some()
    }
}

/// An access plan rented by a person, keyed by its tenant reference.
///
/// The record shape is service-defined beyond the envelope; the client
/// needs only the "tenant-reference" attribute to address the upsert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPlan {
    /// The access plan identity; `None` signals an insert.
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

    /// Server-maintained attribute map ("tenant-reference").
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Rental and entitlement fields; service-defined.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccessPlan {
    /// Returns the renting person's identity, if present.
    pub fn tenant_reference(&self) -> Option<i64> {
        super::attribute_reference(&self.attributes, "tenant-reference")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flick_recorded_from_attributes() {
        let flick: Flick = serde_json::from_value(json!({
            "identity": 3,
            "attributes": { "recording-reference": 77 }
        }))
        .unwrap();
        assert!(flick.recorded());

        let flick: Flick = serde_json::from_value(json!({ "identity": 4 })).unwrap();
        assert!(!flick.recorded());
    }

    #[test]
    fn access_plan_tenant_reference() {
        let plan: AccessPlan = serde_json::from_value(json!({
            "attributes": { "tenant-reference": 9 },
            "rentalBegin": 1_700_000_000_000i64
        }))
        .unwrap();
        assert_eq!(plan.tenant_reference(), Some(9));
        assert_eq!(plan.extra["rentalBegin"], json!(1_700_000_000_000i64));
    }
}
