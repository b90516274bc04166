use crate::resolve::ResolveResult;
use crate::util::FileResponseBuilder;
use http::{Request, Response, Result, StatusCode};
use hyper::Body;

/// Utility to build the default response for a resolved request.
#[derive(Clone, Debug, Default)]
pub struct ResponseBuilder {
    /// Whether to send headers that disable client-side caching.
    pub no_cache: bool,
}

impl ResponseBuilder {
    /// Create a new response builder with a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send headers that disable client-side caching.
    pub fn no_cache(&mut self, value: bool) -> &mut Self {
        self.no_cache = value;
        self
    }

    /// Build a response for the given request and `resolve_path` result.
    ///
    /// Error responses carry an empty body; directory requests are indistinguishable from
    /// missing files, because directories are never listed or served.
    pub fn build<B>(&self, req: &Request<B>, result: ResolveResult) -> Result<Response<Body>> {
        match result {
            ResolveResult::MethodNotMatched => Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .body(Body::empty()),
            ResolveResult::NotFound | ResolveResult::IsDirectory => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::empty()),
            ResolveResult::PermissionDenied => Response::builder()
                .status(StatusCode::FORBIDDEN)
                .body(Body::empty()),
            ResolveResult::Found(file, metadata, content_type) => {
                let mut file_response = FileResponseBuilder::from_request(req);
                file_response.no_cache(self.no_cache);
                file_response.build(file, metadata, content_type)
            }
        }
    }
}
