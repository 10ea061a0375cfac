use crate::db::{init_db, replace_catalog, Catalog, Database};
use crate::router::App;
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh database file path under the system temp dir.
pub fn temp_db_path(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);

    std::env::temp_dir()
        .join(format!("{prefix}_{}_{nanos}_{n}.sqlite", std::process::id()))
        .to_string_lossy()
        .to_string()
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let db = Database::new(temp_db_path("test_db"));

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// The bundled seed catalog.
pub fn seed_catalog() -> Catalog {
    serde_json::from_str(include_str!("../../data/seed.json")).expect("seed.json must parse")
}

/// An app over a fresh database holding the seed catalog.
pub fn seeded_app(admin_token: Option<&str>) -> App {
    let db = init_test_db();
    db.with_conn(|conn| replace_catalog(conn, &seed_catalog()))
        .expect("Failed to seed catalog");

    App {
        db,
        admin_token: admin_token.map(str::to_string),
        data_api_url: None,
    }
}

pub fn request(method: &str, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_body(method: &str, uri: &str, content_type: &str, body: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
