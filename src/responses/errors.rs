use crate::errors::ServerError;
use crate::templates::components::error::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a response: JSON for API callers, an HTML page
/// for everyone else.
pub fn error_response(err: ServerError, wants_json: bool) -> Response {
    let status = err.status();
    if status >= 500 {
        tracing::error!(status, error = %err, "request failed");
    } else {
        tracing::debug!(status, error = %err, "request rejected");
    }

    let (content_type, body) = if wants_json {
        let body = serde_json::json!({ "error": err.to_string() }).to_string();
        (mime::APPLICATION_JSON.as_ref().to_string(), body)
    } else {
        (
            mime::TEXT_HTML_UTF_8.as_ref().to_string(),
            error_page(status, &err.to_string()).into_string(),
        )
    };

    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type);

    if matches!(err, ServerError::Unauthorized) {
        builder = builder.header("WWW-Authenticate", "Basic realm=\"admin\"");
    }

    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
