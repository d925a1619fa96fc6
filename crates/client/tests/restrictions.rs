//! Integration tests for restriction cache lifecycle: fetch counts, clear,
//! and error propagation.

mod common;

use vault_client::api::ApiError;
use vault_client::restrictions::RestrictionKind;
use vault_client::upload::FileUpload;

#[tokio::test]
async fn test_get_restrictions_returns_rules() {
    let (mut server, client) = common::setup().await;
    common::mock_restrictions(&mut server, common::OPEN_RESTRICTIONS, 1).await;

    let set = client.get_restrictions().await.unwrap();

    assert_eq!(set.rules().len(), 2);
    assert_eq!(set.rules()[0].kind, RestrictionKind::MaxFileSize);
    assert_eq!(set.rules()[0].value, "536870912");
    assert_eq!(set.rules()[1].kind, RestrictionKind::BannedMimeType);
}

#[tokio::test]
async fn test_upload_after_fetch_does_not_refetch() {
    let (mut server, client) = common::setup().await;
    let restrictions =
        common::mock_restrictions(&mut server, common::OPEN_RESTRICTIONS, 1).await;
    server
        .mock("PUT", "/")
        .with_status(200)
        .with_body(common::FILE_RESPONSE_NUMERIC)
        .create_async()
        .await;

    client.get_restrictions().await.unwrap();
    let upload = FileUpload::from_buffer(b"contents".to_vec(), "test.png");
    client.upload_file(upload).await.unwrap();

    // one fetch total: the upload reused the cached set
    restrictions.assert_async().await;
}

#[tokio::test]
async fn test_cleared_cache_refetches_exactly_once() {
    let (mut server, client) = common::setup().await;
    let restrictions =
        common::mock_restrictions(&mut server, common::OPEN_RESTRICTIONS, 2).await;
    server
        .mock("PUT", "/")
        .with_status(200)
        .with_body(common::FILE_RESPONSE_NUMERIC)
        .expect(2)
        .create_async()
        .await;

    let upload = FileUpload::from_buffer(b"contents".to_vec(), "test.png");
    client.upload_file(upload.clone()).await.unwrap();

    client.clear_restrictions();
    client.upload_file(upload).await.unwrap();

    restrictions.assert_async().await;
}

#[tokio::test]
async fn test_restriction_fetch_failure_fails_upload() {
    let (mut server, client) = common::setup().await;
    server
        .mock("GET", "/resources/restrictions")
        .with_status(500)
        .with_body(r#"{"name":"INTERNAL_ERROR","message":"restrictions unavailable","status":500}"#)
        .create_async()
        .await;
    let put = server.mock("PUT", "/").expect(0).create_async().await;

    let upload = FileUpload::from_buffer(b"contents".to_vec(), "test.png");
    let err = client.upload_file(upload).await.unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus { .. }));
    put.assert_async().await;
}

#[tokio::test]
async fn test_file_stats() {
    let (mut server, client) = common::setup().await;
    server
        .mock("GET", "/resources/stats/files")
        .with_status(200)
        .with_body(r#"{"recordCount":1420,"recordSize":28860366525}"#)
        .create_async()
        .await;

    let stats = client.file_stats().await.unwrap();

    assert_eq!(stats.record_count, 1420);
    assert_eq!(stats.record_size, 28860366525);
}

#[tokio::test]
async fn test_clones_share_the_cache() {
    let (mut server, client) = common::setup().await;
    let restrictions =
        common::mock_restrictions(&mut server, common::OPEN_RESTRICTIONS, 1).await;
    server
        .mock("PUT", "/")
        .with_status(200)
        .with_body(common::FILE_RESPONSE_NUMERIC)
        .create_async()
        .await;

    client.get_restrictions().await.unwrap();
    let clone = client.clone();
    let upload = FileUpload::from_buffer(b"contents".to_vec(), "test.png");
    clone.upload_file(upload).await.unwrap();

    restrictions.assert_async().await;
}
