//! REST clients for the hansa broker and tube web-services.
//!
//! The two services expose the same resource-oriented wire contract under
//! `/services/...` but differ in how requests are authorized:
//! [`BrokerClient`] relies on a session cookie established by signing on,
//! while [`TubeClient`] stamps a fixed access key onto every request. Both
//! are thin façades over a shared [`RestClient`] transport.
//!
//! # Example
//!
//! ```no_run
//! use hansa_core::ServiceUrl;
//! use hansa_rest::{BrokerClient, OfferFilter};
//!
//! # async fn example() -> Result<(), hansa_core::Error> {
//! let origin = ServiceUrl::new("https://broker.example.com:8040")?;
//! let broker = BrokerClient::new(origin);
//!
//! let requester = broker.find_requester("ines@example.com", "changeit").await?;
//! println!("signed on as {}", requester.email.as_deref().unwrap_or("?"));
//!
//! let offers = broker.query_offers(&OfferFilter::default()).await?;
//! println!("{} offers on the board", offers.len());
//! # Ok(())
//! # }
//! ```

pub mod broker;
pub mod client;
pub mod filter;
pub mod tube;

pub use broker::BrokerClient;
pub use client::{Authorization, RestClient};
pub use filter::{
    AuctionFilter, DocumentFilter, FlickFilter, OfferFilter, Paging, PersonAuctionFilter,
    PersonFilter, PersonOfferFilter, SeasonFilter, SeriesFilter,
};
pub use tube::TubeClient;
