use std::env;
use std::path::{Component, Path, PathBuf};

#[inline]
pub(crate) fn decode_percents(string: &str) -> String {
    percent_encoding::percent_decode_str(string)
        .decode_utf8_lossy()
        .into_owned()
}

/// Percent-decode a request path and normalize it to a relative path that cannot leave the
/// serving root: `..` pops components already collected, and root or prefix components are
/// dropped outright.
pub(crate) fn sanitize_path(request_path: &str) -> PathBuf {
    let request_path = PathBuf::from(decode_percents(request_path));
    request_path
        .components()
        .fold(PathBuf::new(), |mut result, p| match p {
            Component::Normal(x) => {
                // Parse again to prevent a malicious component containing
                // a Windows drive letter, e.g.: `/anypath/c:/windows/win.ini`
                if Path::new(&x)
                    .components()
                    .all(|c| matches!(c, Component::Normal(_)))
                {
                    result.push(x);
                }
                result
            }
            Component::ParentDir => {
                result.pop();
                result
            }
            _ => result,
        })
}

/// Normalize a configured root to an absolute path, joining the current directory when
/// relative. The path is not required to exist.
pub(crate) fn absolute_path(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    if path.is_absolute() {
        path
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    }
}
