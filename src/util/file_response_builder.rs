use super::FileBytesStream;
use crate::cache::apply_no_cache;
use http::{header, Method, Request, Response, Result, StatusCode};
use httpdate::{fmt_http_date, parse_http_date};
use hyper::Body;
use mime_guess::Mime;
use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs::File;

/// Utility to build responses for serving a `tokio::fs::File`.
///
/// This struct allows direct access to its fields, but these fields are typically initialized by
/// the accessors, using the builder pattern. The fields are basically a bunch of settings that
/// determine the response details.
#[derive(Clone, Debug, Default)]
pub struct FileResponseBuilder {
    /// Whether to send headers that disable client-side caching.
    pub no_cache: bool,
    /// Whether this is a `HEAD` request, with no response body.
    pub is_head: bool,
    /// The parsed value of the `If-Modified-Since` request header.
    pub if_modified_since: Option<SystemTime>,
}

impl FileResponseBuilder {
    /// Create a new builder with a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for the given request.
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let mut builder = Self::new();
        builder.method(req.method());
        builder.if_modified_since_header(req.headers().get(header::IF_MODIFIED_SINCE));
        builder
    }

    /// Send headers that disable client-side caching.
    pub fn no_cache(&mut self, value: bool) -> &mut Self {
        self.no_cache = value;
        self
    }

    /// Build responses for the given request method.
    pub fn method(&mut self, value: &Method) -> &mut Self {
        self.is_head = *value == Method::HEAD;
        self
    }

    /// Build responses for the given `If-Modified-Since` request header value.
    pub fn if_modified_since_header(&mut self, value: Option<&header::HeaderValue>) -> &mut Self {
        self.if_modified_since = value
            .and_then(|v| v.to_str().ok())
            .and_then(|v| parse_http_date(v).ok());
        self
    }

    /// Build a response for the given file, its metadata, and content type.
    pub fn build(&self, file: File, metadata: Metadata, content_type: Mime) -> Result<Response<Body>> {
        let mut res = Response::builder();

        // Set `Last-Modified` and check `If-Modified-Since`.
        if let Ok(modified) = metadata.modified() {
            // Truncate to second precision before comparison, because the `Last-Modified` we
            // serve is also truncated through the HTTP date format.
            match self.if_modified_since {
                Some(v) if unix_secs(modified) <= unix_secs(v) => {
                    let mut not_modified = Response::builder().status(StatusCode::NOT_MODIFIED);
                    if self.no_cache {
                        not_modified = apply_no_cache(not_modified);
                    }
                    return not_modified.body(Body::empty());
                }
                _ => {}
            }

            let mtime = modified.duration_since(UNIX_EPOCH).unwrap_or_default();
            res = res
                .header(header::LAST_MODIFIED, fmt_http_date(modified))
                .header(
                    header::ETAG,
                    format!(
                        "W/\"{0:x}-{1:x}.{2:x}\"",
                        metadata.len(),
                        mtime.as_secs(),
                        mtime.subsec_nanos()
                    ),
                );
        }

        // Build remaining headers.
        res = res
            .header(header::CONTENT_LENGTH, metadata.len().to_string())
            .header(header::CONTENT_TYPE, content_type.to_string());
        if self.no_cache {
            res = apply_no_cache(res);
        }

        // Stream the body.
        res.body(if self.is_head {
            Body::empty()
        } else {
            FileBytesStream::new(file).into_body()
        })
    }
}

fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
