use crate::util::sanitize_path;
use mime_guess::{Mime, MimeGuess};
use std::fs::Metadata;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::PathBuf;
use tokio::fs::{self, File};

/// The result of `resolve_path`.
///
/// Covers all the possible 'normal' scenarios encountered when serving static files.
#[derive(Debug)]
pub enum ResolveResult {
    /// The request was not a `GET` or `HEAD` request.
    MethodNotMatched,
    /// The requested file does not exist.
    NotFound,
    /// The requested file could not be accessed.
    PermissionDenied,
    /// A directory was requested as a file.
    IsDirectory,
    /// The requested file was found.
    Found(File, Metadata, Mime),
}

/// Some IO errors are expected when serving files, and mapped to a regular result here.
fn map_open_err(err: IoError) -> Result<ResolveResult, IoError> {
    match err.kind() {
        IoErrorKind::NotFound => Ok(ResolveResult::NotFound),
        IoErrorKind::PermissionDenied => Ok(ResolveResult::PermissionDenied),
        _ => Err(err),
    }
}

/// Resolve a request path by trying to find the file in the given root.
///
/// This root may be absolute or relative. The request path is mapped onto the filesystem by
/// percent-decoding it, normalizing away any components that would escape the root, and
/// appending the result to the root path. Directories are not served; a path that resolves to
/// one is reflected as `IsDirectory` in the result.
///
/// The returned future may error for unexpected IO errors, passing on the `std::io::Error`.
/// Certain expected IO errors are handled, though, and simply reflected in the result. These
/// are `NotFound` and `PermissionDenied`.
///
/// Note that it is up to the caller to check the request method; the `MethodNotMatched` variant
/// is never produced here.
pub async fn resolve_path(
    root: impl Into<PathBuf>,
    request_path: &str,
) -> Result<ResolveResult, IoError> {
    let mut full_path = root.into();
    full_path.push(sanitize_path(request_path));

    let metadata = match fs::metadata(&full_path).await {
        Ok(metadata) => metadata,
        Err(err) => return map_open_err(err),
    };

    if metadata.is_dir() {
        return Ok(ResolveResult::IsDirectory);
    }

    let file = match File::open(&full_path).await {
        Ok(file) => file,
        Err(err) => return map_open_err(err),
    };

    let mime = MimeGuess::from_path(&full_path).first_or_octet_stream();
    Ok(ResolveResult::Found(file, metadata, mime))
}
