pub mod album;
pub mod bucket;
mod client;
mod error;
pub mod file;
pub mod resources;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// One wire operation: knows its method, endpoint, and body, and the
/// response model it decodes into. An empty success body decodes to the
/// response's default value.
pub trait ApiRequest {
    type Response: DeserializeOwned + Default;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}

/// Extend the base URL with additional path segments. The base may carry a
/// path prefix of its own, which `Url::join` would clobber.
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> Url {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .expect("base URL is a valid API root")
        .pop_if_empty()
        .extend(segments);
    url
}
