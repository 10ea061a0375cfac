// requests.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Request bodies larger than this are rejected.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Decoded query string. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    Ok(buf)
}

/// `application/x-www-form-urlencoded` body.
pub fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req)?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

pub fn parse_json<T: serde::de::DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let body = read_body(req)?;
    serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}

/// Decode one path segment (`%20` and `+` both become a space). Links are
/// built with `templates::components::path_segment`, its inverse.
pub fn decode_segment(segment: &str) -> String {
    form_urlencoded::parse(format!("v={segment}").as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}
