use serde::{Deserialize, Serialize};

use super::album::AlbumInfo;

/// Per-file option flags as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    pub hide_filename: bool,
    pub one_time_download: bool,
    pub protected: bool,
}

/// File metadata returned by upload, info, and update operations.
///
/// Every field is optional on the wire; a successful upload or info fetch
/// always populates `token` and `url` together. `retention_period` decodes
/// from either a numeric or a string wire token and keeps its exact decimal
/// form (the `formatted` info flag switches the service to a human-readable
/// string like `"10 minutes"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileResponse {
    pub token: Option<String>,
    pub url: Option<String>,
    pub bucket: Option<String>,
    #[serde(
        with = "super::string_or_number::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub retention_period: Option<String>,
    pub views: Option<u32>,
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumInfo>,
    pub options: Option<FileOptions>,
}
