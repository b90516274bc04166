use http::{header, response::Builder};

/// The `Cache-Control` value sent when caching is disabled.
pub const NO_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Add headers that tell clients and proxies not to cache the response.
///
/// This sets `Cache-Control`, plus the `Pragma` and `Expires` equivalents for HTTP/1.0 clients
/// and proxies. When caching is left enabled, no cache headers are set at all, and freshness is
/// governed by the validators (`Last-Modified` / `ETag`) alone.
pub fn apply_no_cache(res: Builder) -> Builder {
    res.header(header::CACHE_CONTROL, NO_CACHE_CONTROL)
        .header(header::PRAGMA, "no-cache")
        .header(header::EXPIRES, "0")
}
