use crate::auth::require_admin;
use crate::config::Config;
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::{admin, api, public};
use crate::requests::decode_segment;
use crate::responses::{error_response, html_response, text_response, ResultResp};
use crate::templates::pages;
use astra::{Request, Response};
use std::time::Instant;

/// Everything a request handler needs. Shared read-only across workers.
pub struct App {
    pub db: Database,
    pub admin_token: Option<String>,
    pub data_api_url: Option<String>,
}

impl App {
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            admin_token: config.admin_token.clone(),
            data_api_url: config.data_api_url.clone(),
        }
    }
}

/// Entry point for the server: routes, then renders any error in the format
/// the caller expects.
pub fn respond(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let wants_json = path.starts_with("/api/");

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => error_response(err, wants_json),
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (method.as_str(), segments.as_slice()) {
        // Public pages
        ("GET", []) => public::home(app),
        ("GET", ["health"]) => text_response("ok"),
        ("GET", ["about"]) => html_response(pages::about_page()),
        ("GET", ["properties"]) => public::listings(&req, app),
        ("GET", ["properties", id]) => public::listing_detail(app, id),
        ("GET", ["regions", name]) => public::region(app, name),
        ("GET", ["contact"]) => html_response(pages::contact_page()),
        ("POST", ["contact"]) => public::submit_contact(req, app),

        // Public JSON
        ("GET", ["api", "listings"]) => api::list_listings(&req, app),
        ("GET", ["api", "listings", id]) => api::get_listing_json(app, id),
        ("GET", ["api", "locations"]) => api::list_locations(app),
        ("GET", ["api", "locations", id]) => api::get_location_json(app, id),

        // Admin JSON
        ("POST", ["api", "listings"]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            api::save_listing(req, app)
        }
        ("DELETE", ["api", "listings", id]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            api::remove_listing(app, id)
        }
        ("POST", ["api", "locations"]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            api::save_location(req, app)
        }
        ("DELETE", ["api", "locations", id]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            api::remove_location(app, id)
        }
        ("GET", ["api", "leads"]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            api::leads(app)
        }

        // Admin dashboard
        (_, ["admin", ..]) => {
            require_admin(&req, app.admin_token.as_deref())?;
            match (method.as_str(), &segments[1..]) {
                ("GET", []) => admin::dashboard(app),
                ("POST", ["sync"]) => admin::start_sync(app),
                ("GET", ["leads.xlsx"]) => admin::export_leads(app),
                ("POST", ["listings", id, "delete"]) => admin::delete_listing_form(app, id),
                ("POST", ["locations", id, "delete"]) => admin::delete_location_form(app, id),
                _ => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}
