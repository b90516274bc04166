use futures_util::future;
use hyper::service::make_service_fn;
use hyper_gamedata::{GameData, Morgue};

// These tests currently only demonstrate that the service instances can be
// used as hyper services directly.

#[tokio::test]
async fn game_data_usable_as_hyper_service() {
    let mut game_data = GameData::new();
    game_data.add_version("0.31", "webserver/game_data/0.31");

    let make_service = make_service_fn(move |_| {
        let game_data = game_data.clone();
        future::ok::<_, hyper::Error>(game_data)
    });

    // Bind to port "0" to allow the OS to pick one that's free, avoiding
    // the risk of collisions.
    let addr = ([127, 0, 0, 1], 0).into();
    let server = hyper::server::Server::bind(&addr).serve(make_service);

    // It's enough to show that this builds, so no need to execute anything.
    drop(server);
}

#[tokio::test]
async fn morgue_usable_as_hyper_service() {
    let morgue = Morgue::new("server/morgue");

    let make_service = make_service_fn(move |_| {
        let morgue = morgue.clone();
        future::ok::<_, hyper::Error>(morgue)
    });

    let addr = ([127, 0, 0, 1], 0).into();
    let server = hyper::server::Server::bind(&addr).serve(make_service);

    drop(server);
}
