pub mod info;
pub mod update;
pub mod upload;

pub use info::InfoRequest;
pub use update::{FileUpdate, UpdateRequest};
pub use upload::UploadRequest;
