use std::io;

use thiserror::Error;

/// Everything that can go wrong while handling one connection.
///
/// `MalformedRequest` and `NotFound` are recovered locally and surfaced to
/// the client as 400 and 404. `Stream` and `ShortBody` cannot be converted
/// into a response; they are logged and the connection closes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The client's request line was absent, empty, or outside the grammar.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The requested path could not be opened or stat'ed under the root.
    #[error("not found: {path}: {source}")]
    NotFound { path: String, source: io::Error },

    /// Read or write failure on the connection itself.
    #[error("stream error: {0}")]
    Stream(#[from] io::Error),

    /// A stream body transferred a different number of bytes than the
    /// response declared in Content-Length.
    #[error("declared content length {declared} but transferred {transferred} bytes")]
    ShortBody { declared: u64, transferred: u64 },
}
