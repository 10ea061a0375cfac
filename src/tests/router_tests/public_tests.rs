use crate::db::leads::list_leads;
use crate::db::listings::{delete_listing, upsert_listing};
use crate::domain::Listing;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, request, request_with_body, seeded_app};

#[test]
fn home_page_features_listings_and_categories() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured products"));
    assert!(body.contains("Vertical High Speed Door"));
    assert!(body.contains("Loading Bay"));
}

#[test]
fn properties_page_filters_by_category() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/properties?category=security"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Automatic Boom Barrier"));
    assert!(body.contains("Cantilever Sliding Gate Operator"));
    assert!(!body.contains("Hydraulic Dock Leveler"));
    assert!(!body.contains("Vertical High Speed Door"));
}

#[test]
fn properties_page_without_matches_shows_empty_state() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/properties?q=escalator"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No results found."));
}

#[test]
fn region_page_combines_text_and_linked_locations() {
    let app = seeded_app(None);

    let body = body_string(handle(request("GET", "/regions/dubai"), &app).unwrap());

    // text match
    assert!(body.contains("Automatic Boom Barrier"));
    // text and id match
    assert!(body.contains("Vertical High Speed Door"));
    // only linked to "Dubai Marina"
    assert!(body.contains("Cantilever Sliding Gate Operator"));
    assert!(!body.contains("Insulated Sectional Overhead Door"));
    assert!(!body.contains("Hydraulic Dock Leveler"));
}

#[test]
fn region_name_with_spaces_is_decoded() {
    let app = seeded_app(None);

    let body = body_string(handle(request("GET", "/regions/Abu+Dhabi"), &app).unwrap());

    assert!(body.contains("Projects in Abu Dhabi"));
    assert!(body.contains("Insulated Sectional Overhead Door"));
}

#[test]
fn listing_detail_shows_enquiry_form_and_regions() {
    let app = seeded_app(None);

    let resp = handle(request("GET", "/properties/vhs-door"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Vertical High Speed Door"));
    assert!(body.contains("Enquire about this product"));
    assert!(body.contains(r#"value="vhs-door""#));
    assert!(body.contains(r#"href="/regions/Dubai""#));
}

#[test]
fn unknown_listing_is_404() {
    let app = seeded_app(None);

    let resp = respond(request("GET", "/properties/escalator"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));
}

#[test]
fn unknown_route_is_404() {
    let app = seeded_app(None);
    assert_eq!(respond(request("GET", "/blogs"), &app).status(), 404);
    assert_eq!(respond(request("PUT", "/properties"), &app).status(), 404);
}

#[test]
fn contact_form_stores_lead() {
    let app = seeded_app(None);

    let req = request_with_body(
        "POST",
        "/contact",
        "application/x-www-form-urlencoded",
        "name=Ana+Silva&email=ana%40example.com&phone=&message=Need+two+barriers&listing_id=boom-barrier",
    );
    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you, Ana Silva"));

    let leads = app.db.with_conn(|conn| list_leads(conn)).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "ana@example.com");
    assert_eq!(leads[0].phone, None);
    assert_eq!(leads[0].listing_id.as_deref(), Some("boom-barrier"));
}

#[test]
fn contact_form_without_email_is_rejected() {
    let app = seeded_app(None);

    let req = request_with_body(
        "POST",
        "/contact",
        "application/x-www-form-urlencoded",
        "name=Ana&message=hello",
    );
    let resp = respond(req, &app);
    assert_eq!(resp.status(), 400);

    let leads = app.db.with_conn(|conn| list_leads(conn)).unwrap();
    assert!(leads.is_empty());
}

#[test]
fn static_pages_load() {
    let app = seeded_app(None);

    for path in ["/about", "/contact"] {
        let resp = handle(request("GET", path), &app).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
    }

    let resp = handle(request("GET", "/health"), &app).unwrap();
    assert_eq!(body_string(resp), "ok");
}

/// First `href` on the page that points at a listing detail page.
fn first_detail_href(body: &str) -> String {
    let start = body.find(r#"href="/properties/"#).expect("no detail link") + r#"href=""#.len();
    let end = start + body[start..].find('"').unwrap();
    body[start..end].to_string()
}

#[test]
fn detail_links_survive_reserved_characters_in_ids() {
    let app = seeded_app(None);

    for id in ["c+plus", "rack/12?rev=2#a&b"] {
        let listing = Listing::new(id, "Crossplus Rapid Door");
        app.db.with_conn(|conn| upsert_listing(conn, &listing)).unwrap();

        let body = body_string(handle(request("GET", "/properties?q=crossplus"), &app).unwrap());
        let href = first_detail_href(&body);

        let resp = respond(request("GET", &href), &app);
        assert_eq!(resp.status(), 200, "{id} via {href}");
        assert!(body_string(resp).contains(&format!(r#"value="{}""#, id.replace('&', "&amp;"))));

        app.db.with_conn(|conn| delete_listing(conn, id)).unwrap();
    }
}
