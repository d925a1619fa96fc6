use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::AlbumResponse;

/// POST `/album/{bucketToken}` with the album name as a JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAlbumRequest {
    #[serde(skip_serializing)]
    pub bucket_token: String,
    pub name: String,
}

impl ApiRequest for CreateAlbumRequest {
    type Response = AlbumResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .post(endpoint(base_url, &["album", &self.bucket_token]))
            .json(&self)
    }
}
