//! Remote candidate lookup
//!
//! The `LookupService` trait is the seam to the remote endpoint. The
//! `FetchCoordinator` runs lookups on a tokio runtime and guarantees that only
//! the single live request can ever deliver a result.

mod coordinator;
mod http;
mod normalize;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::LookupError;

pub use coordinator::{FetchCoordinator, FetchEvent};
pub use http::HttpLookup;
pub use normalize::normalize_payload;

/// Future resolved by a lookup: the raw JSON payload
pub type LookupFuture = BoxFuture<'static, Result<Value, LookupError>>;

/// A free-text query endpoint
///
/// `lookup` is called synchronously when a search starts; the returned future
/// is driven on the coordinator's runtime and may be dropped before it
/// resolves.
pub trait LookupService: Send + Sync {
    fn lookup(&self, query: &str) -> LookupFuture;
}
