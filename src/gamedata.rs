use crate::resolve::{resolve_path, ResolveResult};
use crate::response_builder::ResponseBuilder;
use crate::util::{absolute_path, decode_percents};
use http::{Method, Request, Response};
use hyper::{service::Service, Body};
use std::collections::HashMap;
use std::future::Future;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// High-level interface for serving versioned game client assets.
///
/// Each supported client version is registered with the directory its assets live in, and
/// requests of the form `/{version}/{path}` are served from the matching directory. The
/// registry is plain owned state: register everything before the server starts, then clone the
/// instance into each connection's service. Requests for versions that were never registered
/// get an empty 404, without touching the filesystem.
///
/// This struct also implements the `hyper::service::Service` trait, which simply wraps
/// `GameData::serve`.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    versions: HashMap<String, PathBuf>,
    /// Whether to send headers that disable client-side caching.
    pub no_cache: bool,
}

impl GameData {
    /// Create a new instance of `GameData` with an empty version registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the asset directory for a client version.
    ///
    /// The path is normalized to an absolute path, against the current directory when relative.
    /// Registering a version that already exists overwrites the previous directory.
    pub fn add_version(&mut self, version: impl Into<String>, path: impl Into<PathBuf>) -> &mut Self {
        self.versions.insert(version.into(), absolute_path(path));
        self
    }

    /// Send headers that disable client-side caching.
    pub fn no_cache(&mut self, value: bool) -> &mut Self {
        self.no_cache = value;
        self
    }

    /// Look up the asset directory registered for a version.
    pub fn version_root(&self, version: &str) -> Option<&Path> {
        self.versions.get(version).map(PathBuf::as_path)
    }

    /// Serve a request whose URL path has the shape `/{version}/{asset path}`.
    ///
    /// The version segment is percent-decoded before lookup; the rest of the path is handed to
    /// `resolve_path` against the registered directory.
    pub async fn serve<B>(&self, request: &Request<B>) -> Result<Response<Body>, IoError> {
        let path = request.uri().path();
        let path = path.strip_prefix('/').unwrap_or(path);
        let (version, asset_path) = match path.split_once('/') {
            Some(pair) => pair,
            None => (path, ""),
        };
        let version = decode_percents(version);
        self.serve_version(&version, asset_path, request).await
    }

    /// Serve an asset for a specific version, with the version and asset path already split
    /// out, as when routing extracted them.
    pub async fn serve_version<B>(
        &self,
        version: &str,
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

        let root = match self.versions.get(version) {
            Some(root) => root,
            None => {
                debug!(version, "request for unregistered client version");
                return Ok(response
                    .build(request, ResolveResult::NotFound)
                    .expect("unable to build response"));
            }
        };

        let result = resolve_path(root, path).await?;
        Ok(response
            .build(request, result)
            .expect("unable to build response"))
    }
}

impl Service<Request<Body>> for GameData {
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
