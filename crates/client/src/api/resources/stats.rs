use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::FileStatsResponse;

/// GET `/resources/stats/files`: service-wide record count and total size.
#[derive(Debug, Clone, Copy)]
pub struct FileStatsRequest;

impl ApiRequest for FileStatsRequest {
    type Response = FileStatsResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["resources", "stats", "files"]))
    }
}
