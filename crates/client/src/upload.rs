use std::io;
use std::path::{Path, PathBuf};

/// Where the bytes of an upload come from.
///
/// A string target is classified once, at construction: anything whose
/// lowercase form starts with `http://` or `https://` is a remote URL the
/// service fetches itself; everything else is a local path.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Remote URL the service downloads on its side.
    Url(String),
    /// Local file, read at upload time. A leading `~` expands to the
    /// platform home directory.
    Path(PathBuf),
    /// In-memory buffer with an explicit filename.
    Buffer { data: Vec<u8>, filename: String },
}

/// A single upload: a source plus the options the service accepts.
///
/// Options left unset are omitted from the request and the server default
/// applies. The password travels in the request body, never the query
/// string.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub source: UploadSource,
    pub bucket_token: Option<String>,
    pub expires: Option<String>,
    pub password: Option<String>,
    pub hide_filename: Option<bool>,
    pub one_time_download: Option<bool>,
}

impl FileUpload {
    /// Build an upload from a string target, classifying it as a remote URL
    /// or a local path.
    pub fn from_target(target: impl Into<String>) -> Self {
        let target = target.into();
        let lower = target.to_lowercase();
        let source = if lower.starts_with("http://") || lower.starts_with("https://") {
            UploadSource::Url(target)
        } else {
            UploadSource::Path(PathBuf::from(target))
        };
        Self::from_source(source)
    }

    /// Build an upload from an in-memory buffer.
    pub fn from_buffer(data: Vec<u8>, filename: impl Into<String>) -> Self {
        Self::from_source(UploadSource::Buffer {
            data,
            filename: filename.into(),
        })
    }

    fn from_source(source: UploadSource) -> Self {
        Self {
            source,
            bucket_token: None,
            expires: None,
            password: None,
            hide_filename: None,
            one_time_download: None,
        }
    }

    /// Upload into an existing bucket.
    pub fn bucket(mut self, token: impl Into<String>) -> Self {
        self.bucket_token = Some(token.into());
        self
    }

    /// Expiry in the service's grammar, e.g. `"10m"` or `"1d"`.
    pub fn expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn hide_filename(mut self, hide: bool) -> Self {
        self.hide_filename = Some(hide);
        self
    }

    pub fn one_time_download(mut self, once: bool) -> Self {
        self.one_time_download = Some(once);
        self
    }

    pub fn is_url(&self) -> bool {
        matches!(self.source, UploadSource::Url(_))
    }

    /// Query parameters in their fixed order. Flags set explicitly are sent
    /// even when false; unset flags are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(expires) = &self.expires {
            pairs.push(("expires", expires.clone()));
        }
        if let Some(hide) = self.hide_filename {
            pairs.push(("hide_filename", hide.to_string()));
        }
        if let Some(once) = self.one_time_download {
            pairs.push(("one_time_download", once.to_string()));
        }
        pairs
    }

    /// Filename the service will see: the buffer's explicit name, or the
    /// final component of a local path. Remote URLs carry no filename.
    pub fn filename(&self) -> Option<String> {
        match &self.source {
            UploadSource::Url(_) => None,
            UploadSource::Path(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.to_string()),
            UploadSource::Buffer { filename, .. } => Some(filename.clone()),
        }
    }

    /// Local path with any home-directory shorthand expanded.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match &self.source {
            UploadSource::Path(path) => Some(expand_home(path)),
            _ => None,
        }
    }

    /// Byte length of the candidate, when the client can know it: the
    /// buffer's length, or the file's size on disk. `None` for remote URLs.
    pub fn content_length(&self) -> io::Result<Option<u64>> {
        match &self.source {
            UploadSource::Url(_) => Ok(None),
            UploadSource::Path(path) => {
                let metadata = std::fs::metadata(expand_home(path))?;
                Ok(Some(metadata.len()))
            }
            UploadSource::Buffer { data, .. } => Ok(Some(data.len() as u64)),
        }
    }

    /// MIME type guessed from the filename extension, falling back to
    /// `application/octet-stream`. `None` for remote URLs.
    pub fn mime_type(&self) -> Option<String> {
        let filename = self.filename()?;
        Some(
            mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string(),
        )
    }
}

/// Expand a leading `~` or `~/` to the platform home directory. Paths
/// without the shorthand, and systems without a resolvable home, pass
/// through unchanged.
fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
