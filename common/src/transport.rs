//! HTTP collaborator consumed by the console flows.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Issues GET requests and decodes JSON bodies.
///
/// Implementations must map every non-success status to
/// [`FetchError::Status`]; no retries are expected.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}
