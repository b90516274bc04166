use http::{header, Method, Request, Response, StatusCode};
use hyper::Body;
use hyper_gamedata::GameData;
use std::io::Write;
use std::{fs, str};
use tempdir::TempDir;

fn write_fixtures(dir: &TempDir, files: Vec<(&str, &str)>) {
    for (subpath, contents) in files {
        let fullpath = dir.path().join(subpath);
        fs::create_dir_all(fullpath.parent().unwrap())
            .and_then(|_| fs::File::create(fullpath))
            .and_then(|mut file| file.write(contents.as_bytes()))
            .expect("failed to write fixtures");
    }
}

async fn get(game_data: &GameData, path: &str) -> Response<Body> {
    let req = Request::builder()
        .uri(path)
        .body(())
        .expect("unable to build request");
    game_data.serve(&req).await.expect("unable to serve")
}

async fn read_body(res: Response<Body>) -> String {
    let bytes = hyper::body::to_bytes(res.into_body())
        .await
        .expect("unable to read body");
    str::from_utf8(&bytes).unwrap().to_owned()
}

#[tokio::test]
async fn unknown_version_returns_404_with_empty_body() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(&dir, vec![("file1.html", "this is file1")]);

    let mut game_data = GameData::new();
    game_data.add_version("0.31", dir.path());

    let res = get(&game_data, "/0.30/file1.html").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_body(res).await, "");
}

#[tokio::test]
async fn registered_versions_resolve_independently() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(
        &dir,
        vec![
            ("0.31/game.js", "this is 0.31"),
            ("0.32/game.js", "this is 0.32"),
        ],
    );

    let mut game_data = GameData::new();
    game_data
        .add_version("0.31", dir.path().join("0.31"))
        .add_version("0.32", dir.path().join("0.32"));

    let res = get(&game_data, "/0.31/game.js").await;
    assert_eq!(read_body(res).await, "this is 0.31");
    let res = get(&game_data, "/0.32/game.js").await;
    assert_eq!(read_body(res).await, "this is 0.32");
}

#[tokio::test]
async fn add_version_overwrites_existing_mapping() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(
        &dir,
        vec![("old/game.js", "old build"), ("new/game.js", "new build")],
    );

    let mut game_data = GameData::new();
    game_data.add_version("trunk", dir.path().join("old"));
    let res = get(&game_data, "/trunk/game.js").await;
    assert_eq!(read_body(res).await, "old build");

    game_data.add_version("trunk", dir.path().join("new"));
    let res = get(&game_data, "/trunk/game.js").await;
    assert_eq!(read_body(res).await, "new build");
}

#[tokio::test]
async fn add_version_stores_absolute_roots() {
    let mut game_data = GameData::new();
    game_data.add_version("0.31", "webserver/game_data/0.31");
    assert!(game_data.version_root("0.31").unwrap().is_absolute());
    assert!(game_data.version_root("0.30").is_none());
}

#[tokio::test]
async fn no_cache_sends_cache_headers() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(&dir, vec![("file1.html", "this is file1")]);

    let mut game_data = GameData::new();
    game_data.add_version("0.31", dir.path()).no_cache(true);

    let res = get(&game_data, "/0.31/file1.html").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(res.headers().get(header::PRAGMA).unwrap(), "no-cache");
    assert_eq!(res.headers().get(header::EXPIRES).unwrap(), "0");
}

#[tokio::test]
async fn cache_headers_off_by_default() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(&dir, vec![("file1.html", "this is file1")]);

    let mut game_data = GameData::new();
    game_data.add_version("0.31", dir.path());

    let res = get(&game_data, "/0.31/file1.html").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::CACHE_CONTROL).is_none());
    assert!(res.headers().get(header::PRAGMA).is_none());
    assert!(res.headers().get(header::EXPIRES).is_none());
}

#[tokio::test]
async fn head_matches_get_headers() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(&dir, vec![("file1.html", "this is file1")]);

    let mut game_data = GameData::new();
    game_data.add_version("0.31", dir.path()).no_cache(true);

    let get_res = get(&game_data, "/0.31/file1.html").await;

    let head_req = Request::builder()
        .method(Method::HEAD)
        .uri("/0.31/file1.html")
        .body(())
        .expect("unable to build request");
    let head_res = game_data.serve(&head_req).await.expect("unable to serve");

    assert_eq!(head_res.status(), get_res.status());
    assert_eq!(head_res.headers(), get_res.headers());
    assert_eq!(read_body(head_res).await, "");
}

#[tokio::test]
async fn serve_version_takes_split_route_params() {
    let dir = TempDir::new("hyper-gamedata-tests").unwrap();
    write_fixtures(&dir, vec![("game.js", "this is the game")]);

    let mut game_data = GameData::new();
    game_data.add_version("0.31", dir.path());

    let req = Request::builder()
        .uri("/ignored")
        .body(())
        .expect("unable to build request");
    let res = game_data
        .serve_version("0.31", "game.js", &req)
        .await
        .expect("unable to serve");
    assert_eq!(read_body(res).await, "this is the game");
}
