use chrono::NaiveDateTime;
use serde::Serialize;

/// An enquiry stored in the `leads` table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A validated contact form submission, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<String>,
}

impl NewLead {
    /// Builds a lead from submitted form fields.
    /// Name, email and message are required; blank optional fields become `None`.
    pub fn from_form(
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        message: Option<&str>,
        listing_id: Option<&str>,
    ) -> Result<Self, String> {
        let required = |value: Option<&str>, field: &str| {
            value
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| format!("Missing or empty {field}"))
        };
        let optional = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let email = required(email, "email")?;
        if !email.contains('@') {
            return Err(format!("Invalid email address: {email}"));
        }

        Ok(NewLead {
            name: required(name, "name")?,
            email,
            phone: optional(phone),
            message: required(message, "message")?,
            listing_id: optional(listing_id),
        })
    }
}
