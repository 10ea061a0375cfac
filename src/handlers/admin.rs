use crate::db::leads::list_leads;
use crate::db::listings::delete_listing;
use crate::db::locations::delete_location;
use crate::errors::ServerError;
use crate::handlers::snapshot;
use crate::responses::{html_response, redirect, xlsx_response, ResultResp};
use crate::router::App;
use crate::source::spawn_sync;
use crate::spreadsheets::leads_workbook;
use crate::templates::pages::{admin_page, AdminVm};

pub fn dashboard(app: &App) -> ResultResp {
    let catalog = snapshot(app)?;
    let leads = app.db.with_conn(|conn| list_leads(conn))?;

    html_response(admin_page(&AdminVm {
        listings: &catalog.listings,
        locations: &catalog.locations,
        leads: &leads,
        sync_enabled: app.data_api_url.is_some(),
    }))
}

pub fn start_sync(app: &App) -> ResultResp {
    let base_url = app
        .data_api_url
        .clone()
        .ok_or_else(|| ServerError::BadRequest("No data API configured".into()))?;

    spawn_sync(&app.db, base_url);
    redirect("/admin")
}

pub fn export_leads(app: &App) -> ResultResp {
    let leads = app.db.with_conn(|conn| list_leads(conn))?;
    let buffer = leads_workbook(&leads)?;
    xlsx_response(buffer, "enquiries.xlsx")
}

pub fn delete_listing_form(app: &App, id: &str) -> ResultResp {
    if !app.db.with_conn(|conn| delete_listing(conn, id))? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "listing deleted from dashboard");
    redirect("/admin")
}

pub fn delete_location_form(app: &App, id: &str) -> ResultResp {
    if !app.db.with_conn(|conn| delete_location(conn, id))? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "location deleted from dashboard");
    redirect("/admin")
}
