use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::endpoint;

/// POST `/album/download/{token}` with a JSON array of file indices to
/// include; an empty array selects the whole album. The response body is a
/// zip archive, not JSON, so this request is sent outside the generic call
/// path.
#[derive(Debug, Clone)]
pub struct DownloadAlbumRequest {
    pub token: String,
    pub file_indexes: Vec<u32>,
}

impl DownloadAlbumRequest {
    pub(crate) fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .post(endpoint(base_url, &["album", "download", &self.token]))
            .json(&self.file_indexes)
    }
}
