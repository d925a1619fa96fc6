use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::GeneralResponse;

/// DELETE `/album/{token}?deleteFiles={bool}`. With `delete_files` the
/// album's files are removed from the vault as well, not just the album.
#[derive(Debug, Clone)]
pub struct DeleteAlbumRequest {
    pub token: String,
    pub delete_files: bool,
}

impl ApiRequest for DeleteAlbumRequest {
    type Response = GeneralResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let mut url = endpoint(base_url, &["album", &self.token]);
        url.query_pairs_mut()
            .append_pair("deleteFiles", &self.delete_files.to_string());
        client.delete(url)
    }
}
