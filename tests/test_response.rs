use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use staticd::http::resource;
use staticd::http::response::{Body, Response, StatusCode};

fn scratch_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("staticd-response-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_not_found_response() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.content_length, 15);
    assert_eq!(response.mime, "text/plain");
    assert!(response.last_modified.is_none());
    match response.body {
        Body::Bytes(ref bytes) => assert_eq!(&bytes[..], b"404 Not Found\r\n"),
        Body::Stream(_) => panic!("expected an in-memory body"),
    }
}

#[test]
fn test_bad_request_response() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.content_length, 17);
    assert_eq!(response.mime, "text/plain");
    assert!(response.last_modified.is_none());
    match response.body {
        Body::Bytes(ref bytes) => assert_eq!(&bytes[..], b"400 Bad Request\r\n"),
        Body::Stream(_) => panic!("expected an in-memory body"),
    }
}

#[test]
fn test_canned_response_date_is_current() {
    let response = Response::not_found();
    let age = response.date.elapsed().unwrap();
    assert!(age < Duration::from_secs(5));
}

#[tokio::test]
async fn test_response_from_resource() {
    let root = scratch_root("from-resource");
    fs::write(root.join("page.html"), b"<p>hi</p>\n").unwrap();
    let meta = fs::metadata(root.join("page.html")).unwrap();

    let resource = resource::resolve(&root, "/page.html").await.unwrap();
    let response = Response::from_resource(resource);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_length, 10);
    assert_eq!(response.mime, "text/html");
    assert_eq!(response.last_modified.unwrap(), meta.modified().unwrap());
    assert!(matches!(response.body, Body::Stream(_)));
}

#[tokio::test]
async fn test_response_for_directory_uses_index_mime() {
    let root = scratch_root("dir-mime");
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/index.html"), b"<html></html>\n").unwrap();

    let resource = resource::resolve(&root, "/docs").await.unwrap();
    let response = Response::from_resource(resource);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.mime, "text/html");
    assert_eq!(response.content_length, 14);
}

#[tokio::test]
async fn test_response_mime_follows_resolved_extension() {
    let root = scratch_root("ext-mime");
    fs::write(root.join("data.bin"), b"\x00\x01\x02").unwrap();

    let resource = resource::resolve(&root, "/data.bin").await.unwrap();
    let response = Response::from_resource(resource);

    assert_eq!(response.mime, "application/octet-stream");
    assert_eq!(response.content_length, 3);
}
