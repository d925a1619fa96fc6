//! Shared test utilities for the vault client integration tests
#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use url::Url;
use vault_client::api::ApiClient;

/// Mock server plus a client pointed at it.
pub async fn setup() -> (ServerGuard, ApiClient) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let server = mockito::Server::new_async().await;
    let base_url = Url::parse(&server.url()).unwrap();
    let client = ApiClient::with_base_url(base_url).unwrap();
    (server, client)
}

/// Permissive restriction set: a 512 MiB size cap and a denylist no test
/// fixture trips over.
pub const OPEN_RESTRICTIONS: &str = r#"[{"type":"MAX_FILE_SIZE","value":536870912},{"type":"BANNED_MIME_TYPE","value":"application/x-dosexec,application/x-executable"}]"#;

/// Upload response with a numeric retention period.
pub const FILE_RESPONSE_NUMERIC: &str = r#"{"url":"https://vault.sh/f/something","token":"test-token","retentionPeriod":100,"options":{"protected":false}}"#;

pub async fn mock_restrictions(server: &mut ServerGuard, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", "/resources/restrictions")
        .with_status(200)
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}
