// This example serves game client assets and per-user morgue files from a TOML config.
//
// Run `cargo run --example webtiles_server -- server.toml`, with a config such as:
//
//     bind = "127.0.0.1:3000"
//     no_cache = true
//     morgue_path = "server/morgue"
//
//     [versions]
//     "0.31" = "webserver/game_data/0.31"
//     "0.32" = "webserver/game_data/0.32"
//
// then fetch http://localhost:3000/0.31/... or http://localhost:3000/morgue/<user>/...

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::{env, fs};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use hyper_gamedata::{GameData, Morgue};
use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    bind: SocketAddr,
    #[serde(default)]
    no_cache: bool,
    morgue_path: String,
    versions: HashMap<String, String>,
}

async fn route(
    request: Request<Body>,
    game_data: GameData,
    morgue: Morgue,
) -> Result<Response<Body>, std::io::Error> {
    if let Some(rest) = request.uri().path().strip_prefix("/morgue/") {
        let (user, file_path) = rest.split_once('/').unwrap_or((rest, ""));
        let user = user.to_owned();
        let file_path = file_path.to_owned();
        morgue.serve_user(&user, &file_path, &request).await
    } else {
        game_data.serve(&request).await
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "server.toml".to_owned());
    let config: Config = toml::from_str(&fs::read_to_string(&config_path)?)?;

    let mut game_data = GameData::new();
    game_data.no_cache(config.no_cache);
    for (version, dir) in &config.versions {
        game_data.add_version(version.as_str(), dir);
    }

    let mut morgue = Morgue::new(&config.morgue_path);
    morgue.no_cache(config.no_cache);

    let make_service = make_service_fn(move |_| {
        let game_data = game_data.clone();
        let morgue = morgue.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |request| {
                route(request, game_data.clone(), morgue.clone())
            }))
        }
    });

    let server = Server::bind(&config.bind).serve(make_service);
    println!("Webtiles file server running on http://{}/", config.bind);

    server.await?;
    Ok(())
}
