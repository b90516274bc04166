use crate::resolve::{resolve_path, ResolveResult};
use crate::response_builder::ResponseBuilder;
use crate::util::absolute_path;
use http::{Method, Request, Response};
use hyper::{service::Service, Body};
use std::future::Future;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// High-level interface for serving per-user morgue files.
///
/// All morgue files live under a single root directory, one subdirectory per user, so a request
/// for user `alice` and path `morgue-alice.txt` reads `{root}/alice/morgue-alice.txt`. The user
/// directory is not checked for existence up front; a user that never played simply has no
/// directory, and the request resolves to an empty 404.
///
/// This struct also implements the `hyper::service::Service` trait, which simply wraps
/// `Morgue::serve`.
#[derive(Clone, Debug)]
pub struct Morgue {
    root: PathBuf,
    /// Whether to send headers that disable client-side caching.
    pub no_cache: bool,
}

impl Morgue {
    /// Create a new instance of `Morgue` with the given root directory.
    ///
    /// The path is normalized to an absolute path, against the current directory when relative.
    /// It is not validated; a root that doesn't exist serves nothing but 404s.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: absolute_path(root),
            no_cache: false,
        }
    }

    /// Replace the root directory, overwriting the previous value.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.root = absolute_path(root);
        self
    }

    /// Send headers that disable client-side caching.
    pub fn no_cache(&mut self, value: bool) -> &mut Self {
        self.no_cache = value;
        self
    }

    /// The root directory morgue files are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serve a request whose URL path has the shape `/{user}/{file path}`, relative to
    /// wherever the morgue routes are mounted.
    pub async fn serve<B>(&self, request: &Request<B>) -> Result<Response<Body>, IoError> {
        let path = request.uri().path();
        let path = path.strip_prefix('/').unwrap_or(path);
        let (user, file_path) = match path.split_once('/') {
            Some(pair) => pair,
            None => (path, ""),
        };
        self.serve_user(user, file_path, request).await
    }

    /// Serve a morgue file for a specific user, with the user and file path already split out,
    /// as when routing extracted them.
    ///
    /// The two are joined back into a single relative path before resolving, so the served file
    /// is always `{root}/{user}/{path}`, sanitized as a whole.
    pub async fn serve_user<B>(
        &self,
        user: &str,
        path: &str,
        request: &Request<B>,
    ) -> Result<Response<Body>, IoError> {
        let mut response = ResponseBuilder::new();
        response.no_cache(self.no_cache);

        match *request.method() {
            Method::GET | Method::HEAD => {}
            _ => {
                return Ok(response
                    .build(request, ResolveResult::MethodNotMatched)
                    .expect("unable to build response"))
            }
        }

        debug!(user, path, "serving morgue file");

        let result = resolve_path(&self.root, &format!("{}/{}", user, path)).await?;
        Ok(response
            .build(request, result)
            .expect("unable to build response"))
    }
}

impl Service<Request<Body>> for Morgue {
    type Response = Response<Body>;
    type Error = IoError;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, IoError>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let service = self.clone();
        Box::pin(async move { service.serve(&request).await })
    }
}
