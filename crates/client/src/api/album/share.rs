use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::GeneralResponse;

/// GET `/album/share/{token}`. On success the response description carries
/// the public share URL.
#[derive(Debug, Clone)]
pub struct ShareAlbumRequest {
    pub token: String,
}

impl ApiRequest for ShareAlbumRequest {
    type Response = GeneralResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["album", "share", &self.token]))
    }
}

/// GET `/album/revoke/{token}`. Invalidates the public token; a new share
/// mints a different one.
#[derive(Debug, Clone)]
pub struct RevokeAlbumRequest {
    pub token: String,
}

impl ApiRequest for RevokeAlbumRequest {
    type Response = GeneralResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["album", "revoke", &self.token]))
    }
}
