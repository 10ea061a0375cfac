use crate::db::leads::list_leads;
use crate::db::listings::{delete_listing, get_listing, upsert_listing};
use crate::db::locations::{delete_location, get_location, upsert_location};
use crate::domain::{filter, FilterCriteria, Listing, Location};
use crate::errors::ServerError;
use crate::handlers::snapshot;
use crate::requests::{parse_json, parse_query};
use crate::responses::{json_response, ResultResp};
use crate::router::App;
use astra::Request;
use serde_json::json;

pub fn list_listings(req: &Request, app: &App) -> ResultResp {
    let criteria = FilterCriteria::from_params(&parse_query(req));
    let catalog = snapshot(app)?;
    let results = filter(&catalog.listings, &criteria, &catalog.locations);
    json_response(&results)
}

pub fn get_listing_json(app: &App, id: &str) -> ResultResp {
    let listing = app
        .db
        .with_conn(|conn| get_listing(conn, id))?
        .ok_or(ServerError::NotFound)?;
    json_response(&listing)
}

pub fn list_locations(app: &App) -> ResultResp {
    let locations = app
        .db
        .with_conn(|conn| crate::db::locations::list_locations(conn))?;
    json_response(&locations)
}

pub fn get_location_json(app: &App, id: &str) -> ResultResp {
    let location = app
        .db
        .with_conn(|conn| get_location(conn, id))?
        .ok_or(ServerError::NotFound)?;
    json_response(&location)
}

pub fn save_listing(mut req: Request, app: &App) -> ResultResp {
    let listing: Listing = parse_json(&mut req)?;
    app.db.with_conn(|conn| upsert_listing(conn, &listing))?;
    tracing::info!(id = %listing.id, "listing saved");
    json_response(&listing)
}

pub fn remove_listing(app: &App, id: &str) -> ResultResp {
    if !app.db.with_conn(|conn| delete_listing(conn, id))? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "listing deleted");
    json_response(&json!({ "deleted": id }))
}

pub fn save_location(mut req: Request, app: &App) -> ResultResp {
    let location: Location = parse_json(&mut req)?;
    app.db.with_conn(|conn| upsert_location(conn, &location))?;
    tracing::info!(id = %location.id, "location saved");
    json_response(&location)
}

pub fn remove_location(app: &App, id: &str) -> ResultResp {
    if !app.db.with_conn(|conn| delete_location(conn, id))? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "location deleted");
    json_response(&json!({ "deleted": id }))
}

pub fn leads(app: &App) -> ResultResp {
    let leads = app.db.with_conn(|conn| list_leads(conn))?;
    json_response(&leads)
}
