use crate::db::listings::get_listing;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, request, request_with_body, seeded_app};
use serde_json::Value;

const TOKEN: &str = "let-me-in";

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("response should be JSON")
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

fn with_bearer(mut req: astra::Request) -> astra::Request {
    req.headers_mut().insert(
        "Authorization",
        format!("Bearer {TOKEN}").parse().unwrap(),
    );
    req
}

#[test]
fn listings_endpoint_applies_filter_in_catalog_order() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/api/listings?category=industrial"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    assert_eq!(
        ids(&json_body(resp)),
        vec!["vhs-door", "sectional-door", "dock-leveler"]
    );
}

#[test]
fn listings_endpoint_without_criteria_returns_everything() {
    let app = seeded_app(None);

    let all = json_body(handle(request("GET", "/api/listings"), &app).unwrap());
    let same = json_body(handle(request("GET", "/api/listings?category=all&q="), &app).unwrap());

    assert_eq!(all.as_array().unwrap().len(), 5);
    assert_eq!(all, same);
}

#[test]
fn location_filter_resolves_location_id() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/api/listings?location=loc-abu-dhabi"), &app).unwrap();
    assert_eq!(ids(&json_body(resp)), vec!["sectional-door"]);

    let resp = handle(
        request("GET", "/api/listings?location=loc-dubai&q=DOOR"),
        &app,
    )
    .unwrap();
    assert_eq!(ids(&json_body(resp)), vec!["vhs-door"]);
}

#[test]
fn single_listing_and_missing_listing() {
    let app = seeded_app(None);

    let listing = json_body(handle(request("GET", "/api/listings/boom-barrier"), &app).unwrap());
    assert_eq!(listing["name"], "Automatic Boom Barrier");
    assert_eq!(listing["type"], "Security");

    let resp = respond(request("GET", "/api/listings/nope"), &app);
    assert_eq!(resp.status(), 404);
    assert_eq!(json_body(resp)["error"], "Not Found");
}

#[test]
fn locations_endpoint_lists_all_locations() {
    let app = seeded_app(None);

    let locations = json_body(handle(request("GET", "/api/locations"), &app).unwrap());

    assert_eq!(locations.as_array().unwrap().len(), 4);
    assert_eq!(locations[1]["name"], "Dubai Marina");

    let pune = json_body(handle(request("GET", "/api/locations/loc-pune"), &app).unwrap());
    assert_eq!(pune["name"], "Pune");
    assert_eq!(respond(request("GET", "/api/locations/nowhere"), &app).status(), 404);
}

#[test]
fn saving_a_listing_requires_the_admin_token() {
    let app = seeded_app(Some(TOKEN));
    let body = r#"{"id": "rapid-roll", "name": "Rapid Roll Door", "type": "Industrial"}"#;

    let resp = respond(
        request_with_body("POST", "/api/listings", "application/json", body),
        &app,
    );
    assert_eq!(resp.status(), 401);
    assert!(resp.headers().get("WWW-Authenticate").is_some());

    let resp = handle(
        with_bearer(request_with_body("POST", "/api/listings", "application/json", body)),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let saved = app
        .db
        .with_conn(|conn| get_listing(conn, "rapid-roll"))
        .unwrap()
        .expect("listing should be stored");
    assert_eq!(saved.name, "Rapid Roll Door");
}

#[test]
fn wrong_token_is_rejected() {
    let app = seeded_app(Some(TOKEN));

    let mut req = request("DELETE", "/api/listings/boom-barrier");
    req.headers_mut()
        .insert("Authorization", "Bearer guess".parse().unwrap());

    assert_eq!(respond(req, &app).status(), 401);
    assert!(app
        .db
        .with_conn(|conn| get_listing(conn, "boom-barrier"))
        .unwrap()
        .is_some());
}

#[test]
fn deleting_a_listing_twice_is_404_the_second_time() {
    let app = seeded_app(Some(TOKEN));

    let resp = handle(with_bearer(request("DELETE", "/api/listings/boom-barrier")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(json_body(resp)["deleted"], "boom-barrier");

    let resp = respond(with_bearer(request("DELETE", "/api/listings/boom-barrier")), &app);
    assert_eq!(resp.status(), 404);
}

#[test]
fn invalid_location_payload_is_400() {
    let app = seeded_app(None);

    let resp = respond(
        request_with_body("POST", "/api/locations", "application/json", "{not json"),
        &app,
    );
    assert_eq!(resp.status(), 400);

    let resp = respond(
        request_with_body(
            "POST",
            "/api/locations",
            "application/json",
            r#"{"id": "loc-x", "name": ""}"#,
        ),
        &app,
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn saved_location_takes_part_in_region_matching() {
    let app = seeded_app(None);

    let before = handle(request("GET", "/api/listings?region=dubai"), &app).unwrap();
    assert_eq!(
        ids(&json_body(before)),
        vec!["vhs-door", "boom-barrier", "sliding-gate"]
    );

    // Renaming Abu Dhabi pulls its linked listing into the Dubai region
    let resp = handle(
        request_with_body(
            "POST",
            "/api/locations",
            "application/json",
            r#"{"id": "loc-abu-dhabi", "name": "Abu Dhabi (Dubai branch)"}"#,
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let after = handle(request("GET", "/api/listings?region=dubai"), &app).unwrap();
    assert_eq!(
        ids(&json_body(after)),
        vec!["vhs-door", "boom-barrier", "sectional-door", "sliding-gate"]
    );
}
