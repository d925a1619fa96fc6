pub mod associate;
pub mod create;
pub mod delete;
pub mod download;
pub mod get;
pub mod share;

pub use associate::{AssociateFilesRequest, DisassociateFilesRequest};
pub use create::CreateAlbumRequest;
pub use delete::DeleteAlbumRequest;
pub use download::DownloadAlbumRequest;
pub use get::GetAlbumRequest;
pub use share::{RevokeAlbumRequest, ShareAlbumRequest};
