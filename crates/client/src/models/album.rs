use serde::{Deserialize, Serialize};

use super::file::FileResponse;

/// Album summary carried on file records and bucket listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumInfo {
    pub token: Option<String>,
    pub public_token: Option<String>,
    pub name: Option<String>,
    pub bucket: Option<String>,
    pub date_created: i64,
}

/// Full album record including its files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumResponse {
    pub token: Option<String>,
    pub bucket_token: Option<String>,
    pub public_token: Option<String>,
    pub name: Option<String>,
    pub files: Vec<FileResponse>,
}
