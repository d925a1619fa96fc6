use reqwest::StatusCode;

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{name} ({status}): {message}")]
    HttpStatus {
        status: StatusCode,
        name: String,
        message: String,
    },
    #[error("Password is incorrect")]
    PasswordIncorrect,
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
    #[error("Restriction violated: {0}")]
    RestrictionViolated(String),
    #[error("Restriction type {0} is not implemented")]
    RestrictionNotImplemented(String),
    #[error("File record has neither a url nor a token")]
    MissingDownloadTarget,
}

/// Translate a completed response into the domain error taxonomy. Success
/// passes through untouched. A 403 on the download path always means a
/// wrong or missing password; the body is not consulted. Any other failure
/// decodes the service's structured error body, or surfaces the raw body
/// text when it does not parse.
pub(crate) async fn check_response(
    response: reqwest::Response,
    download: bool,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if download && status == StatusCode::FORBIDDEN {
        return Err(ApiError::PasswordIncorrect);
    }
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => Err(ApiError::HttpStatus {
            status,
            name: error.name,
            message: error.message,
        }),
        Err(_) => Err(ApiError::Deserialization(body)),
    }
}
