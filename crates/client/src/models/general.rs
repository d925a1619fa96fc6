use serde::{Deserialize, Serialize};

/// Generic success/description payload used by album management endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralResponse {
    pub success: bool,
    pub description: String,
}

/// Structured error body the service returns on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub name: String,
    pub status: u16,
    pub message: String,
}

/// Service-wide file statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileStatsResponse {
    pub record_count: u64,
    pub record_size: u64,
}
