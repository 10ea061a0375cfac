use crate::db::leads::create_lead;
use crate::db::listings::get_listing;
use crate::db::locations::list_locations;
use crate::domain::{categories, filter, FilterCriteria, Location, NewLead};
use crate::errors::ServerError;
use crate::handlers::snapshot;
use crate::requests::{parse_form, parse_query};
use crate::responses::{html_response, ResultResp};
use crate::router::App;
use crate::templates::pages;
use astra::Request;
use chrono::Utc;

pub fn home(app: &App) -> ResultResp {
    let catalog = snapshot(app)?;
    let tabs = categories(&catalog.listings);
    html_response(pages::home_page(&catalog.listings, &tabs))
}

pub fn listings(req: &Request, app: &App) -> ResultResp {
    let criteria = FilterCriteria::from_params(&parse_query(req));
    let catalog = snapshot(app)?;

    let results = filter(&catalog.listings, &criteria, &catalog.locations);
    let tabs = categories(&catalog.listings);

    tracing::debug!(
        query = %criteria.query,
        category = %criteria.category,
        matched = results.len(),
        total = catalog.listings.len(),
        "filtered listings"
    );

    html_response(pages::properties_page(&pages::ListingsVm {
        criteria: &criteria,
        results,
        total: catalog.listings.len(),
        categories: &tabs,
        locations: &catalog.locations,
    }))
}

pub fn listing_detail(app: &App, id: &str) -> ResultResp {
    let (listing, locations) = app.db.with_conn(|conn| {
        let listing = get_listing(conn, id)?.ok_or(ServerError::NotFound)?;
        Ok((listing, list_locations(conn)?))
    })?;

    let linked: Vec<&Location> = locations
        .iter()
        .filter(|loc| listing.location_ids.contains(&loc.id))
        .collect();

    html_response(pages::property_page(&listing, &linked))
}

pub fn region(app: &App, name: &str) -> ResultResp {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::NotFound);
    }

    let catalog = snapshot(app)?;
    let criteria = FilterCriteria::default().with_region(name);
    let results = filter(&catalog.listings, &criteria, &catalog.locations);

    html_response(pages::region_page(name, &results))
}

pub fn submit_contact(mut req: Request, app: &App) -> ResultResp {
    let form = parse_form(&mut req)?;
    let field = |key: &str| form.get(key).map(String::as_str);

    let lead = NewLead::from_form(
        field("name"),
        field("email"),
        field("phone"),
        field("message"),
        field("listing_id"),
    )
    .map_err(ServerError::BadRequest)?;

    let now = Utc::now().naive_utc();
    let id = app.db.with_conn(|conn| create_lead(conn, &lead, now))?;
    tracing::info!(lead_id = id, listing_id = ?lead.listing_id, "enquiry received");

    html_response(pages::thanks_page(&lead.name))
}
