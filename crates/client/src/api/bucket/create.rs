use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::BucketResponse;

/// GET `/bucket/create`. The service mints a new bucket token.
#[derive(Debug, Clone, Copy)]
pub struct CreateBucketRequest;

impl ApiRequest for CreateBucketRequest {
    type Response = BucketResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["bucket", "create"]))
    }
}
