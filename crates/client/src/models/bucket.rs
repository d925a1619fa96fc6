use serde::{Deserialize, Serialize};

use super::album::AlbumInfo;
use super::file::FileResponse;

/// Bucket record: an access token plus the files and albums it holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketResponse {
    pub token: Option<String>,
    pub files: Vec<FileResponse>,
    pub albums: Vec<AlbumInfo>,
}
