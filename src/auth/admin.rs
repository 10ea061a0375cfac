// src/auth/admin.rs
use crate::auth::token::{basic_password, tokens_match};
use crate::errors::ServerError;
use astra::Request;

/// Token carried by the request, from `Authorization: Bearer <token>` or
/// HTTP Basic (the password is the token, the user name is ignored).
fn presented_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Authorization")?.to_str().ok()?.trim();
    let (scheme, value) = header.split_once(' ')?;

    if scheme.eq_ignore_ascii_case("bearer") {
        Some(value.trim().to_string())
    } else if scheme.eq_ignore_ascii_case("basic") {
        basic_password(value)
    } else {
        None
    }
}

/// Gate for admin routes. With no token configured the admin surface is open.
pub fn require_admin(req: &Request, expected: Option<&str>) -> Result<(), ServerError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    match presented_token(req) {
        Some(token) if tokens_match(&token, expected) => Ok(()),
        Some(_) => {
            tracing::warn!(path = req.uri().path(), "rejected admin token");
            Err(ServerError::Unauthorized)
        }
        None => Err(ServerError::Unauthorized),
    }
}
