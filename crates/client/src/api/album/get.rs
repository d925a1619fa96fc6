use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::AlbumResponse;

/// GET `/album/{token}`. Accepts either the private or the public album
/// token.
#[derive(Debug, Clone)]
pub struct GetAlbumRequest {
    pub token: String,
}

impl ApiRequest for GetAlbumRequest {
    type Response = AlbumResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["album", &self.token]))
    }
}
