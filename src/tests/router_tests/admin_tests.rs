use crate::db::listings::{get_listing, upsert_listing};
use crate::domain::Listing;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, request, request_with_body, seeded_app};
use base64::Engine;

const TOKEN: &str = "s3cret";

fn with_basic(mut req: astra::Request) -> astra::Request {
    let credentials = base64::engine::general_purpose::STANDARD.encode(format!("admin:{TOKEN}"));
    req.headers_mut().insert(
        "Authorization",
        format!("Basic {credentials}").parse().unwrap(),
    );
    req
}

#[test]
fn admin_requires_token_when_configured() {
    let app = seeded_app(Some(TOKEN));

    let resp = respond(request("GET", "/admin"), &app);
    assert_eq!(resp.status(), 401);
    assert_eq!(
        resp.headers().get("WWW-Authenticate").unwrap(),
        "Basic realm=\"admin\""
    );
}

#[test]
fn admin_page_loads_with_basic_auth() {
    let app = seeded_app(Some(TOKEN));

    let resp = handle(with_basic(request("GET", "/admin")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200, "Admin page should load");

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Vertical High Speed Door"));
    assert!(body.contains("No data API configured."));
}

#[test]
fn admin_is_open_without_configured_token() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/admin"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn sync_without_data_api_is_bad_request() {
    let app = seeded_app(None);

    let resp = respond(request("POST", "/admin/sync"), &app);
    assert_eq!(resp.status(), 400);
}

#[test]
fn dashboard_delete_redirects_back() {
    let app = seeded_app(Some(TOKEN));

    let resp = handle(with_basic(request("POST", "/admin/listings/vhs-door/delete")), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 302, "Should redirect after delete");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin"
    );
    assert!(app
        .db
        .with_conn(|conn| get_listing(conn, "vhs-door"))
        .unwrap()
        .is_none());
}

#[test]
fn enquiries_show_up_in_admin_and_export() {
    let app = seeded_app(Some(TOKEN));

    let submit = request_with_body(
        "POST",
        "/contact",
        "application/x-www-form-urlencoded",
        "name=Omar&email=omar%40example.com&message=Site+survey+please",
    );
    assert_eq!(handle(submit, &app).unwrap().status(), 200);

    let body = body_string(handle(with_basic(request("GET", "/admin")), &app).unwrap());
    assert!(body.contains("omar@example.com"));

    let leads: serde_json::Value =
        serde_json::from_str(&body_string(handle(with_basic(request("GET", "/api/leads")), &app).unwrap()))
            .unwrap();
    assert_eq!(leads[0]["name"], "Omar");

    let resp = handle(with_basic(request("GET", "/admin/leads.xlsx")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn dashboard_delete_form_targets_ids_with_reserved_characters() {
    let app = seeded_app(None);
    let listing = Listing::new("c+plus/2", "Crossplus Door");
    app.db.with_conn(|conn| upsert_listing(conn, &listing)).unwrap();

    let body = body_string(handle(request("GET", "/admin"), &app).unwrap());
    let action = "/admin/listings/c%2Bplus%2F2/delete";
    assert!(body.contains(&format!(r#"action="{action}""#)));

    let resp = handle(request("POST", action), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert!(app
        .db
        .with_conn(|conn| get_listing(conn, "c+plus/2"))
        .unwrap()
        .is_none());
}
