use std::time::SystemTime;

use bytes::Bytes;
use tokio::fs::File;

use crate::http::mime;
use crate::http::resource::Resource;

const NOT_FOUND_MSG: &[u8] = b"404 Not Found\r\n";
const BAD_REQUEST_MSG: &[u8] = b"400 Bad Request\r\n";

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `Forbidden` (403): Access denied
/// - `NotFound` (404): Resource not found
///
/// The set is closed on purpose: every variant has a reason phrase, so a
/// status the writer cannot name cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Where the response body comes from.
///
/// Exactly one of the two is ever populated: canned messages live in
/// memory, file content is streamed from its open handle.
pub enum Body {
    /// In-memory bytes; their length is the content length by construction.
    Bytes(Bytes),
    /// An open file to be copied verbatim onto the connection.
    Stream(File),
}

/// A structured HTTP response ready for serialization.
///
/// Built by one of the constructors below, consumed by the writer, then
/// dropped; the drop also releases a stream body's file handle on every
/// path. `content_length` always equals the number of body bytes the writer
/// is expected to transfer.
pub struct Response {
    pub status: StatusCode,
    pub date: SystemTime,
    pub content_length: u64,
    pub body: Body,
    pub last_modified: Option<SystemTime>,
    pub mime: &'static str,
}

impl Response {
    /// Creates the 200 response serving a resolved resource.
    ///
    /// The content type comes from the final resolved path, so a directory
    /// request rewritten to `index.html` is served as HTML.
    pub fn from_resource(resource: Resource) -> Self {
        let mime = mime::for_path(&resource.path);
        Response {
            status: StatusCode::Ok,
            date: SystemTime::now(),
            content_length: resource.len,
            body: Body::Stream(resource.file),
            last_modified: Some(resource.modified),
            mime,
        }
    }

    /// Creates the fixed 404 response.
    pub fn not_found() -> Self {
        Self::canned(StatusCode::NotFound, NOT_FOUND_MSG)
    }

    /// Creates the fixed 400 response.
    pub fn bad_request() -> Self {
        Self::canned(StatusCode::BadRequest, BAD_REQUEST_MSG)
    }

    fn canned(status: StatusCode, msg: &'static [u8]) -> Self {
        Response {
            status,
            date: SystemTime::now(),
            content_length: msg.len() as u64,
            body: Body::Bytes(Bytes::from_static(msg)),
            last_modified: None,
            mime: mime::from_extension("txt"),
        }
    }
}
