use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{endpoint, ApiError, ApiRequest};
use crate::models::FileResponse;
use crate::upload::{FileUpload, UploadSource};

/// PUT `/{bucketToken?}` with the upload options as query parameters.
/// Remote URL uploads send a form-encoded body; local files and buffers
/// send a multipart body with a `file` part and, when set, a `password`
/// field.
#[derive(Debug)]
pub struct UploadRequest {
    upload: FileUpload,
    content: Option<Vec<u8>>,
}

impl UploadRequest {
    /// Resolve the upload's byte source. Local paths are read here, after
    /// validation has passed, so the file handle is scoped to this call.
    pub(crate) async fn resolve(upload: FileUpload) -> Result<Self, ApiError> {
        let content = match upload.resolved_path() {
            Some(path) => Some(tokio::fs::read(path).await?),
            None => None,
        };
        Ok(Self { upload, content })
    }
}

impl ApiRequest for UploadRequest {
    type Response = FileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let UploadRequest { upload, content } = self;

        let mut url = match upload.bucket_token.as_deref() {
            Some(bucket) => endpoint(base_url, &[bucket]),
            None => endpoint(base_url, &[]),
        };
        let pairs = upload.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }

        let filename = upload.filename();
        let request = client.put(url);
        match upload.source {
            UploadSource::Url(target) => {
                let mut form = vec![("url", target)];
                if let Some(password) = upload.password {
                    form.push(("password", password));
                }
                request.form(&form)
            }
            UploadSource::Buffer { data, .. } => multipart(
                request,
                data,
                filename.unwrap_or_else(|| "file".to_string()),
                upload.password,
            ),
            UploadSource::Path(_) => multipart(
                request,
                content.unwrap_or_default(),
                filename.unwrap_or_else(|| "file".to_string()),
                upload.password,
            ),
        }
    }
}

fn multipart(
    request: RequestBuilder,
    data: Vec<u8>,
    filename: String,
    password: Option<String>,
) -> RequestBuilder {
    let mut form = Form::new().part("file", Part::bytes(data).file_name(filename));
    if let Some(password) = password {
        form = form.text("password", password);
    }
    request.multipart(form)
}
