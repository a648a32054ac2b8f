//! Core client types.
//!
//! These types enforce wire-contract invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod access_key;
mod service_url;
mod upload;

pub use access_key::AccessKey;
pub use service_url::ServiceUrl;
pub use upload::Upload;
