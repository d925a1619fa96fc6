// Wire models for vault API responses.
pub mod album;
pub mod bucket;
pub mod file;
pub mod general;
pub mod string_or_number;

pub use album::{AlbumInfo, AlbumResponse};
pub use bucket::BucketResponse;
pub use file::{FileOptions, FileResponse};
pub use general::{ErrorResponse, FileStatsResponse, GeneralResponse};
