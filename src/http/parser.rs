use once_cell::sync::Lazy;
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::HttpError;
use crate::http::request::{Method, Request};

// Request-line grammar. The path class admits word characters, dots and
// slashes only; note it does not reject `..` segments.
static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(GET) (/[A-Za-z0-9_./]*) HTTP/[0-9]\.[0-9]$").expect("request line pattern")
});

// Lines longer than this are treated as malformed.
const MAX_LINE_BYTES: u64 = 64 * 1024;

/// Reads one request off a line-oriented stream.
///
/// Consumes the request line plus every header line up to the blank
/// separator (or end of stream); headers are discarded unread.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    read_line(reader, &mut line).await?;

    let first = strip_line_ending(&line);
    if first.is_empty() {
        return Err(HttpError::MalformedRequest("empty request line".to_string()));
    }
    let first = std::str::from_utf8(first)
        .map_err(|_| HttpError::MalformedRequest("request line is not valid UTF-8".to_string()))?;

    let caps = REQUEST_LINE
        .captures(first)
        .ok_or_else(|| HttpError::MalformedRequest(format!("invalid request line [{first}]")))?;
    let method = Method::from_str(&caps[1])
        .ok_or_else(|| HttpError::MalformedRequest(format!("unsupported method [{}]", &caps[1])))?;
    let request = Request {
        method,
        path: caps[2].to_string(),
    };

    loop {
        line.clear();
        let n = read_line(reader, &mut line).await?;
        if n == 0 {
            // end of stream terminates the header section
            break;
        }
        if line.iter().all(|b| b.is_ascii_whitespace()) {
            // blank separator line
            break;
        }
    }

    Ok(request)
}

async fn read_line<R>(reader: &mut R, line: &mut Vec<u8>) -> Result<usize, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = (&mut *reader).take(MAX_LINE_BYTES + 1);
    let n = limited.read_until(b'\n', line).await?;
    if n as u64 > MAX_LINE_BYTES {
        return Err(HttpError::MalformedRequest(format!(
            "line longer than {MAX_LINE_BYTES} bytes"
        )));
    }
    Ok(n)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
