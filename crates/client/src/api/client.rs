use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::Client;
use url::Url;

use super::album::{
    AssociateFilesRequest, CreateAlbumRequest, DeleteAlbumRequest, DisassociateFilesRequest,
    DownloadAlbumRequest, GetAlbumRequest, RevokeAlbumRequest, ShareAlbumRequest,
};
use super::bucket::{CreateBucketRequest, GetBucketRequest};
use super::error::check_response;
use super::file::{FileUpdate, InfoRequest, UpdateRequest, UploadRequest};
use super::resources::{FileStatsRequest, GetRestrictionsRequest};
use super::{endpoint, ApiError, ApiRequest};
use crate::models::{
    AlbumResponse, BucketResponse, FileResponse, FileStatsResponse, GeneralResponse,
};
use crate::restrictions::{Restriction, RestrictionSet};
use crate::upload::FileUpload;

/// Production vault host.
pub const DEFAULT_BASE_URL: &str = "https://vault.sh/rest";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the vault API.
///
/// Holds the HTTP client, the API root, and the cached upload restriction
/// set. Clones share the restriction cache; separate clients are fully
/// isolated from each other.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    restrictions: Arc<RwLock<Option<RestrictionSet>>>,
}

impl ApiClient {
    /// Client against the production vault host.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(Url::parse(DEFAULT_BASE_URL)?)
    }

    /// Client against a custom API root.
    pub fn with_base_url(base_url: Url) -> Result<Self, ApiError> {
        Self::with_config(base_url, DEFAULT_TIMEOUT)
    }

    /// Client from the environment: `VAULT_API_URL` overrides the API root
    /// when set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = match std::env::var("VAULT_API_URL") {
            Ok(value) => Url::parse(&value)?,
            Err(_) => Url::parse(DEFAULT_BASE_URL)?,
        };
        Self::with_base_url(base_url)
    }

    /// Client with an explicit request timeout. The timeout bounds every
    /// operation; dropping an operation's future aborts it early.
    pub fn with_config(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize(base_url),
            client,
            restrictions: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Underlying HTTP client for custom requests.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Send one wire operation: build, send, translate errors, decode. An
    /// empty success body decodes to the response model's default value.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let response = request
            .build_request(&self.base_url, &self.client)
            .send()
            .await?;
        let response = check_response(response, false).await?;
        let body = response.text().await?;
        if body.is_empty() {
            return Ok(T::Response::default());
        }
        serde_json::from_str(&body).map_err(|_| ApiError::Deserialization(body))
    }

    // --- restrictions ---

    /// Fetch the current upload restrictions and replace the cached set.
    /// This is the only path that populates the cache.
    pub async fn get_restrictions(&self) -> Result<RestrictionSet, ApiError> {
        tracing::debug!("fetching upload restrictions");
        let rules: Vec<Restriction> = self.call(GetRestrictionsRequest).await?;
        let set = RestrictionSet::new(rules);
        *self.restrictions.write() = Some(set.clone());
        Ok(set)
    }

    /// Discard the cached restriction set. The next upload refetches.
    pub fn clear_restrictions(&self) {
        *self.restrictions.write() = None;
    }

    /// Cached set if still fresh, otherwise a refetch. Concurrent uploads
    /// may both refetch a stale cache; the last write wins.
    async fn current_restrictions(&self) -> Result<RestrictionSet, ApiError> {
        let cached = {
            let guard = self.restrictions.read();
            guard.as_ref().filter(|set| !set.is_expired()).cloned()
        };
        match cached {
            Some(set) => Ok(set),
            None => self.get_restrictions().await,
        }
    }

    // --- files ---

    /// Upload a file. The candidate is validated against the (fresh)
    /// restriction set first; a violation fails here and no request is
    /// issued.
    pub async fn upload_file(&self, upload: FileUpload) -> Result<FileResponse, ApiError> {
        let restrictions = self.current_restrictions().await?;
        restrictions.validate(&upload)?;
        tracing::debug!(filename = ?upload.filename(), "uploading file");
        let request = UploadRequest::resolve(upload).await?;
        self.call(request).await
    }

    /// Fetch a file's metadata. With `formatted` the retention period comes
    /// back human-readable.
    pub async fn file_info(&self, token: &str, formatted: bool) -> Result<FileResponse, ApiError> {
        self.call(InfoRequest {
            token: token.to_string(),
            formatted,
        })
        .await
    }

    /// Change a file's password, expiry, or filename visibility.
    pub async fn update_file(
        &self,
        token: &str,
        update: FileUpdate,
    ) -> Result<FileResponse, ApiError> {
        self.call(UpdateRequest {
            token: token.to_string(),
            update,
        })
        .await
    }

    /// Delete a file. The service answers with the literal body `"true"`
    /// on success.
    pub async fn delete_file(&self, token: &str) -> Result<bool, ApiError> {
        let response = self
            .client
            .delete(endpoint(&self.base_url, &[token]))
            .send()
            .await?;
        let response = check_response(response, false).await?;
        Ok(response.text().await? == "true")
    }

    /// Download a file's content. A record holding only a token resolves
    /// its URL via a metadata fetch first. The password, when given, is
    /// sent in the `x-password` header; a 403 always surfaces as
    /// [`ApiError::PasswordIncorrect`].
    pub async fn get_file(
        &self,
        file: &FileResponse,
        password: Option<&str>,
    ) -> Result<Bytes, ApiError> {
        let url = match file.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => {
                let token = file
                    .token
                    .as_deref()
                    .filter(|token| !token.is_empty())
                    .ok_or(ApiError::MissingDownloadTarget)?;
                let info = self.file_info(token, false).await?;
                info.url
                    .filter(|url| !url.is_empty())
                    .ok_or(ApiError::MissingDownloadTarget)?
            }
        };
        tracing::debug!(%url, "downloading file");
        let mut request = self.client.get(&url);
        if let Some(password) = password {
            request = request.header("x-password", password);
        }
        let response = request.send().await?;
        let response = check_response(response, true).await?;
        Ok(response.bytes().await?)
    }

    // --- buckets ---

    pub async fn create_bucket(&self) -> Result<BucketResponse, ApiError> {
        self.call(CreateBucketRequest).await
    }

    pub async fn get_bucket(&self, token: &str) -> Result<BucketResponse, ApiError> {
        self.call(GetBucketRequest {
            bucket_token: token.to_string(),
        })
        .await
    }

    /// Delete a bucket and everything in it. Same literal `"true"`
    /// convention as file deletion.
    pub async fn delete_bucket(&self, token: &str) -> Result<bool, ApiError> {
        let response = self
            .client
            .delete(endpoint(&self.base_url, &["bucket", token]))
            .send()
            .await?;
        let response = check_response(response, false).await?;
        Ok(response.text().await? == "true")
    }

    // --- albums ---

    pub async fn create_album(
        &self,
        bucket_token: &str,
        name: &str,
    ) -> Result<AlbumResponse, ApiError> {
        self.call(CreateAlbumRequest {
            bucket_token: bucket_token.to_string(),
            name: name.to_string(),
        })
        .await
    }

    pub async fn get_album(&self, token: &str) -> Result<AlbumResponse, ApiError> {
        self.call(GetAlbumRequest {
            token: token.to_string(),
        })
        .await
    }

    /// Delete an album, optionally deleting its files as well. Returns the
    /// service's success flag.
    pub async fn delete_album(&self, token: &str, delete_files: bool) -> Result<bool, ApiError> {
        let response: GeneralResponse = self
            .call(DeleteAlbumRequest {
                token: token.to_string(),
                delete_files,
            })
            .await?;
        Ok(response.success)
    }

    pub async fn associate_files(
        &self,
        album_token: &str,
        file_tokens: &[String],
    ) -> Result<AlbumResponse, ApiError> {
        self.call(AssociateFilesRequest {
            album_token: album_token.to_string(),
            file_tokens: file_tokens.to_vec(),
        })
        .await
    }

    pub async fn disassociate_files(
        &self,
        album_token: &str,
        file_tokens: &[String],
    ) -> Result<AlbumResponse, ApiError> {
        self.call(DisassociateFilesRequest {
            album_token: album_token.to_string(),
            file_tokens: file_tokens.to_vec(),
        })
        .await
    }

    /// Share an album publicly. Returns the public URL from the response
    /// description.
    pub async fn share_album(&self, token: &str) -> Result<String, ApiError> {
        let response: GeneralResponse = self
            .call(ShareAlbumRequest {
                token: token.to_string(),
            })
            .await?;
        Ok(response.description)
    }

    /// Revoke an album's public share. Returns the service's success flag.
    pub async fn revoke_album(&self, token: &str) -> Result<bool, ApiError> {
        let response: GeneralResponse = self
            .call(RevokeAlbumRequest {
                token: token.to_string(),
            })
            .await?;
        Ok(response.success)
    }

    /// Download an album as a zip archive. `file_indexes` filters which
    /// files are included; empty means all of them.
    pub async fn download_album(
        &self,
        token: &str,
        file_indexes: &[u32],
    ) -> Result<Bytes, ApiError> {
        let request = DownloadAlbumRequest {
            token: token.to_string(),
            file_indexes: file_indexes.to_vec(),
        };
        let response = request
            .build_request(&self.base_url, &self.client)
            .send()
            .await?;
        let response = check_response(response, false).await?;
        Ok(response.bytes().await?)
    }

    // --- stats ---

    pub async fn file_stats(&self) -> Result<FileStatsResponse, ApiError> {
        self.call(FileStatsRequest).await
    }
}

/// Trim any trailing slash so endpoint building never produces doubled
/// separators.
fn normalize(mut base_url: Url) -> Url {
    let trimmed = base_url.path().trim_end_matches('/').to_string();
    base_url.set_path(&trimmed);
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slash() {
        let base = normalize(Url::parse("https://vault.sh/rest/").unwrap());
        assert_eq!(base.path(), "/rest");
    }

    #[test]
    fn test_default_base_url_parses() {
        let client = ApiClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }
}
