use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiRequest};
use crate::models::FileResponse;

/// Settings a file update can change. Unset fields are omitted from the
/// request and stay as they are on the server; `hide_filename` is always
/// sent.
#[derive(Debug, Clone, Default)]
pub struct FileUpdate {
    pub password: Option<String>,
    pub previous_password: Option<String>,
    pub custom_expiry: Option<String>,
    pub hide_filename: bool,
}

impl FileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or, with a previous password, change) the file password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn previous_password(mut self, password: impl Into<String>) -> Self {
        self.previous_password = Some(password.into());
        self
    }

    pub fn custom_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.custom_expiry = Some(expiry.into());
        self
    }

    pub fn hide_filename(mut self, hide: bool) -> Self {
        self.hide_filename = hide;
        self
    }
}

/// PATCH `/{token}` with a form-encoded body.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub token: String,
    pub update: FileUpdate,
}

impl ApiRequest for UpdateRequest {
    type Response = FileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let url = endpoint(base_url, &[&self.token]);
        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(password) = self.update.password {
            form.push(("password", password));
        }
        if let Some(previous) = self.update.previous_password {
            form.push(("previousPassword", previous));
        }
        if let Some(expiry) = self.update.custom_expiry {
            form.push(("customExpiry", expiry));
        }
        form.push(("hideFilename", self.update.hide_filename.to_string()));
        client.patch(url).form(&form)
    }
}
