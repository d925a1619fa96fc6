use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::AlbumResponse;

/// POST `/album/{token}/associate`: move existing files into an album.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateFilesRequest {
    #[serde(skip_serializing)]
    pub album_token: String,
    pub file_tokens: Vec<String>,
}

impl ApiRequest for AssociateFilesRequest {
    type Response = AlbumResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .post(endpoint(base_url, &["album", &self.album_token, "associate"]))
            .json(&self)
    }
}

/// POST `/album/{token}/disassociate`: take files back out of an album.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateFilesRequest {
    #[serde(skip_serializing)]
    pub album_token: String,
    pub file_tokens: Vec<String>,
}

impl ApiRequest for DisassociateFilesRequest {
    type Response = AlbumResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .post(endpoint(
                base_url,
                &["album", &self.album_token, "disassociate"],
            ))
            .json(&self)
    }
}
