#![crate_name = "hyper_gamedata"]
#![deny(missing_docs)]

//! Game client asset and morgue file serving for [Hyper 0.14](https://github.com/hyperium/hyper).
//!
//! This library exports two high-level services: `GameData`, which serves versioned client
//! assets, and `Morgue`, which serves per-user game-over dump files. Both sit on top of
//! lower-level interfaces for more control over responses.
//!
//! ## Basic usage
//!
//! `GameData` maps version identifiers to asset directories. Versions are registered up front,
//! and requests of the form `/{version}/{path}` are served from the matching directory. Requests
//! for versions that were never registered get an empty 404.
//!
//! ```rust
//! use hyper_gamedata::GameData;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Instance of `GameData` containing configuration.
//!     let mut game_data = GameData::new();
//!     game_data.add_version("0.31", "webserver/game_data/0.31");
//!
//!     // A dummy request, but normally obtained from Hyper.
//!     let request = http::Request::get("/0.31/game.js").body(()).unwrap();
//!
//!     // Serve the request.
//!     let response = game_data.serve(&request).await.unwrap();
//! }
//! ```
//!
//! `Morgue` serves files from one subdirectory per user beneath a single root, so a request for
//! user `alice` and path `morgue-alice.txt` reads `{root}/alice/morgue-alice.txt`:
//!
//! ```rust
//! use hyper_gamedata::Morgue;
//!
//! #[tokio::main]
//! async fn main() {
//!     let morgue = Morgue::new("server/morgue");
//!
//!     let request = http::Request::get("/alice/morgue-alice.txt").body(()).unwrap();
//!     let response = morgue.serve(&request).await.unwrap();
//! }
//! ```
//!
//! Typically, you'd store the service instances somewhere, such as in your own
//! `hyper::Service` implementation; both are cheap to clone. Both also implement
//! `hyper::service::Service` themselves, so they can be handed to a server builder directly.
//!
//! Setting `no_cache` on either service makes every served response carry headers that disable
//! client-side caching, for setups where assets change underneath a running server.
//!
//! ## Advanced usage
//!
//! The services are simple wrappers for `resolve_path` and `ResponseBuilder`. You can achieve
//! the same by doing something similar to the following:
//!
//! ```rust
//! use hyper_gamedata::{resolve_path, ResponseBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     // A dummy request, but normally obtained from Hyper.
//!     let request = http::Request::get("/morgue-alice.txt").body(()).unwrap();
//!
//!     // First, resolve the request path against a root directory.
//!     let result = resolve_path("server/morgue/alice", request.uri().path())
//!         .await
//!         .unwrap();
//!
//!     // Then, build a response based on the result.
//!     // The `ResponseBuilder` is typically a short-lived, per-request instance.
//!     let response = ResponseBuilder::new()
//!         .build(&request, result)
//!         .unwrap();
//! }
//! ```
//!
//! The `resolve_path` function tries to find the file under the root, and returns the
//! `ResolveResult` enum, which determines what kind of response should be sent. The
//! `ResponseBuilder` is then used to create a default response. It's useful to sit between
//! these two steps to override specific cases of `ResolveResult`, and fall back to the default
//! behavior if necessary.
//!
//! The `ResponseBuilder` in turn uses `FileResponseBuilder` to serve files that are found. The
//! `FileResponseBuilder` can also be used directly if you have an existing open
//! `tokio::fs::File` and want to serve it. It takes care of basic headers, 'not modified'
//! responses, and streaming the file in the body.
//!
//! Finally, there's `FileBytesStream`, which is used by `FileResponseBuilder` to stream the
//! file. This is a struct wrapping a `tokio::fs::File` and implementing a `futures::Stream`
//! that produces `Bytes`s. It can be used for streaming a file in a custom response.

mod cache;
mod gamedata;
mod morgue;
mod resolve;
mod response_builder;
mod util;

pub use crate::cache::*;
pub use crate::gamedata::*;
pub use crate::morgue::*;
pub use crate::resolve::*;
pub use crate::response_builder::*;
pub use crate::util::{FileBytesStream, FileResponseBuilder};
