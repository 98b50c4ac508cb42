//! MIME type detection based on file extensions.

use std::path::Path;

/// Content type served when no table entry matches.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Maps a file extension (without the leading dot) to a content type.
///
/// The table is fixed at compile time and the lookup is exact: keys are
/// lowercase, so `HTML` does not match `html` and falls back to
/// [`OCTET_STREAM`], as does any extension the table does not know.
///
/// # Example
///
/// ```
/// # use staticd::http::mime;
/// assert_eq!(mime::from_extension("html"), "text/html");
/// assert_eq!(mime::from_extension("png"), "image/png");
/// assert_eq!(mime::from_extension("xyz"), "application/octet-stream");
/// ```
pub fn from_extension(ext: &str) -> &'static str {
    match ext {
        "html" | "htm" => "text/html",
        "js" => "application/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        "wma" => "audio/x-ms-wma",
        "txt" | "log" => "text/plain",
        "ttf" => "application/x-font-ttf",
        "tex" => "application/x-tex",
        "sh" => "application/x-sh",
        "py" => "text/x-python",
        "png" => "image/png",
        "pdf" => "application/pdf",
        "mpeg" | "mpa" => "video/mpeg",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "jpg" | "jpeg" => "image/jpeg",
        "java" => "text/x-java-source",
        "jar" => "application/java-archive",
        "gif" => "image/gif",
        "cpp" => "text/x-c",
        "bmp" => "image/bmp",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "ico" => "image/x-icon",
        _ => OCTET_STREAM,
    }
}

/// Looks up the content type for a path's file extension.
///
/// The extension is everything after the final `.` of the file name, so a
/// file literally named `.html` counts as HTML. Names without a dot (or
/// non-UTF-8 names) get [`OCTET_STREAM`].
pub fn for_path(path: &Path) -> &'static str {
    let name = path.file_name().and_then(|n| n.to_str());
    match name.and_then(|n| n.rsplit_once('.')) {
        Some((_, ext)) => from_extension(ext),
        None => OCTET_STREAM,
    }
}
