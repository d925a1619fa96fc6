use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::restrictions::Restriction;

/// GET `/resources/restrictions`: the upload rules currently in force.
#[derive(Debug, Clone, Copy)]
pub struct GetRestrictionsRequest;

impl ApiRequest for GetRestrictionsRequest {
    type Response = Vec<Restriction>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &["resources", "restrictions"]))
    }
}
