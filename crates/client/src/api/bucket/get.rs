use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::BucketResponse;

/// POST `/bucket/get` with the token in a JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct GetBucketRequest {
    pub bucket_token: String,
}

impl ApiRequest for GetBucketRequest {
    type Response = BucketResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.post(endpoint(base_url, &["bucket", "get"])).json(&self)
    }
}
