//! hansa-core - Core types for the hansa marketplace/media service clients.
//!
//! This crate provides the validated primitive types, the entity models,
//! and the unified error taxonomy shared by the REST client crates.
//!
//! # Example
//!
//! ```
//! use hansa_core::{ServiceUrl, model::Auction};
//!
//! # fn example() -> Result<(), hansa_core::Error> {
//! let origin = ServiceUrl::new("https://broker.example.com:8040")?;
//! assert_eq!(origin.resource_url(&["auctions"]),
//!            "https://broker.example.com:8040/services/auctions");
//!
//! let auction = Auction {
//!     name: Some("Art deco lamp".into()),
//!     asking_price: Some(12_500),
//!     ..Auction::default()
//! };
//! assert!(auction.identity.is_none());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod types;

// Re-export primary types at crate root for convenience
pub use error::Error;
pub use types::{AccessKey, ServiceUrl, Upload};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
