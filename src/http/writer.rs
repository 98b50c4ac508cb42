use std::time::SystemTime;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::error::HttpError;
use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";
const SERVER_ID: &str = concat!("staticd/", env!("CARGO_PKG_VERSION"));

// fmt_http_date panics on times before the Unix epoch; pre-epoch file
// mtimes clamp to it instead.
fn http_date(time: SystemTime) -> String {
    httpdate::fmt_http_date(time.max(SystemTime::UNIX_EPOCH))
}

fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in fixed order
    buf.extend_from_slice(format!("Date: {}\r\n", http_date(resp.date)).as_bytes());
    buf.extend_from_slice(format!("Server: {SERVER_ID}\r\n").as_bytes());
    if let Some(modified) = resp.last_modified {
        buf.extend_from_slice(format!("Last-Modified: {}\r\n", http_date(modified)).as_bytes());
    }
    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.mime).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.content_length).as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Serializes a response onto the output stream and flushes it.
///
/// Consuming the response releases a stream body's file handle whether the
/// write succeeds or not. A stream body that yields a different byte count
/// than the declared Content-Length fails with [`HttpError::ShortBody`];
/// the connection itself stays open, closing it is the caller's job.
pub async fn write_response<W>(response: Response, writer: &mut W) -> Result<(), HttpError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&serialize_head(&response)).await?;

    match response.body {
        Body::Bytes(ref bytes) => {
            writer.write_all(bytes).await?;
        }
        Body::Stream(mut file) => {
            let transferred = tokio::io::copy(&mut file, writer).await?;
            if transferred != response.content_length {
                return Err(HttpError::ShortBody {
                    declared: response.content_length,
                    transferred,
                });
            }
        }
    }

    writer.flush().await?;
    Ok(())
}
