use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::FileResponse;

/// GET `/{token}?formatted={bool}`. With `formatted` the service renders
/// the retention period as a human-readable string instead of a raw
/// number.
#[derive(Debug, Clone)]
pub struct InfoRequest {
    pub token: String,
    pub formatted: bool,
}

impl ApiRequest for InfoRequest {
    type Response = FileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let mut url = endpoint(base_url, &[&self.token]);
        url.query_pairs_mut()
            .append_pair("formatted", &self.formatted.to_string());
        client.get(url)
    }
}
