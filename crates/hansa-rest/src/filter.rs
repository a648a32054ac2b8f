//! Query-filter types for the list-returning service operations.
//!
//! Each filter maps one-to-one onto URL query parameters using the services'
//! fixed kebab-case naming scheme. Unset (`None`) fields are omitted from the
//! query string entirely; multi-valued filters are joined with commas into a
//! single parameter.

use serde::{Serialize, Serializer};

use hansa_core::model::{AuctionStatus, Role};

/// Pagination controls shared by all list-returning operations.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Paging {
    /// The offset of the first result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_offset: Option<u32>,
    /// The maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_limit: Option<u32>,
}

impl Paging {
    /// Paging with both bounds set.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            paging_offset: Some(offset),
            paging_limit: Some(limit),
        }
    }
}

/// Filters for document queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DocumentFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
}

/// Filters for people queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersonFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// Filters for top-level auction queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuctionFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_manufacture_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_manufacture_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_closure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_closure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_asking_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_asking_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Auction states to match; empty matches all.
    #[serde(
        rename = "status",
        serialize_with = "join_states",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub states: Vec<AuctionStatus>,
}

/// Filters for a person's auctions (seller or bidder view).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersonAuctionFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Auction states to match; empty matches all.
    #[serde(
        rename = "status",
        serialize_with = "join_states",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub states: Vec<AuctionStatus>,
}

/// Filters for a person's offers.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersonOfferFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Filters for top-level offer queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OfferFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_manufacture_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_manufacture_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_postage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_postage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Filters for series queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeriesFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_season_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_season_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_season_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_season_count: Option<i32>,
}

/// Filters for season queries.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeasonFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_episode_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_episode_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_episode_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_episode_count: Option<i32>,
}

/// Filters for flick queries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlickFilter {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_season_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_season_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_title_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producers_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis_fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded: Option<bool>,
}

/// Auction detail lookups always request the embedded bid data.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct DetailQuery {
    pub detailed: bool,
}

/// Serializes a status list as a single comma-joined parameter value.
fn join_states<S: Serializer>(states: &[AuctionStatus], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = states
        .iter()
        .map(AuctionStatus::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Serialize>(filter: &T) -> String {
        serde_urlencoded::to_string(filter).unwrap()
    }

    #[test]
    fn empty_filter_encodes_to_nothing() {
        assert_eq!(encode(&AuctionFilter::default()), "");
        assert_eq!(encode(&DocumentFilter::default()), "");
        assert_eq!(encode(&FlickFilter::default()), "");
    }

    #[test]
    fn set_parameters_use_kebab_case_keys() {
        let filter = DocumentFilter {
            paging: Paging::new(0, 25),
            min_created: Some(1_000),
            type_fragment: Some("image/".into()),
            ..DocumentFilter::default()
        };
        assert_eq!(
            encode(&filter),
            "paging-offset=0&paging-limit=25&min-created=1000&type-fragment=image%2F"
        );
    }

    #[test]
    fn single_parameter_appears_exactly_once() {
        let filter = AuctionFilter {
            category: Some("ART".into()),
            ..AuctionFilter::default()
        };
        assert_eq!(encode(&filter), "category=ART");
    }

    #[test]
    fn states_join_with_commas_into_one_parameter() {
        let filter = AuctionFilter {
            states: vec![AuctionStatus::Open, AuctionStatus::Sealed],
            ..AuctionFilter::default()
        };
        assert_eq!(encode(&filter), "status=OPEN%2CSEALED");
    }

    #[test]
    fn role_encodes_upper_case() {
        let filter = PersonAuctionFilter {
            role: Some(Role::Seller),
            ..PersonAuctionFilter::default()
        };
        assert_eq!(encode(&filter), "role=SELLER");
    }

    #[test]
    fn bool_parameters_stringify() {
        let filter = PersonOfferFilter {
            paging: Paging::default(),
            available: Some(true),
        };
        assert_eq!(encode(&filter), "available=true");
    }
}
