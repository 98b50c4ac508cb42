use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tokio::fs::File;

use crate::http::error::HttpError;

// A directory can itself be named index.html, so the rewrite can repeat;
// past this many appends the lookup is classified as not found.
const MAX_INDEX_APPENDS: usize = 8;

/// An opened file together with the metadata the response needs.
///
/// The handle is exclusively owned and closes on drop; `path` is the final
/// resolved path after any rewrite to `index.html`, which is what the
/// content type is derived from.
#[derive(Debug)]
pub struct Resource {
    pub file: File,
    pub len: u64,
    pub modified: SystemTime,
    pub path: PathBuf,
}

/// Resolves a request path to a [`Resource`] under `root`.
///
/// Any open or stat failure classifies as [`HttpError::NotFound`]. A path
/// that names a directory is retried with `index.html` appended. The
/// request path's leading slashes are stripped before joining so that it
/// stays relative to the root; the grammar's character filter does not
/// reject `..` segments, and neither does this function.
pub async fn resolve(root: &Path, request_path: &str) -> Result<Resource, HttpError> {
    let mut path = root.join(request_path.trim_start_matches('/'));

    for _ in 0..MAX_INDEX_APPENDS {
        let file = File::open(&path).await.map_err(|e| not_found(&path, e))?;
        let meta = file.metadata().await.map_err(|e| not_found(&path, e))?;

        if meta.is_dir() {
            path.push("index.html");
            continue;
        }

        let modified = meta.modified().map_err(|e| not_found(&path, e))?;
        return Ok(Resource {
            file,
            len: meta.len(),
            modified,
            path,
        });
    }

    Err(not_found(
        &path,
        io::Error::other("too many directory index rewrites"),
    ))
}

fn not_found(path: &Path, source: io::Error) -> HttpError {
    HttpError::NotFound {
        path: path.display().to_string(),
        source,
    }
}
