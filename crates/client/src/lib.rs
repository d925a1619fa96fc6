/**
 * API surface: the client, the per-operation
 *  request types, and error translation.
 */
pub mod api;
/**
 * Wire models for the vault's responses, including
 *  the string-or-number decoding retention periods
 *  and restriction values need.
 */
pub mod models;
/**
 * Server-declared upload restrictions: the cached
 *  rule set and pre-flight validation.
 */
pub mod restrictions;
/**
 * Upload construction: target classification
 *  (URL / path / buffer) and upload options.
 */
pub mod upload;

pub mod prelude {
    pub use crate::api::file::FileUpdate;
    pub use crate::api::{ApiClient, ApiError};
    pub use crate::models::{
        AlbumInfo, AlbumResponse, BucketResponse, FileOptions, FileResponse, FileStatsResponse,
        GeneralResponse,
    };
    pub use crate::restrictions::{Restriction, RestrictionKind, RestrictionSet};
    pub use crate::upload::{FileUpload, UploadSource};
}
