// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// A product, property, plot or project shown on the public site.
///
/// Records arrive from more than one source and not every source fills every
/// field, so everything except `id` is optional. An absent field never matches
/// a filter predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub name: String,

    // Free-text label, e.g. "Business Bay, Dubai"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    // Structured links to `Location` records
    #[serde(default)]
    pub location_ids: Vec<String>,

    // Classification tags
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Listing {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            location_ids: Vec::new(),
            listing_type: None,
            category: None,
            sub_category: None,
            description: None,
            image: None,
            price: None,
        }
    }

    /// Short label for cards: the first tag that is set.
    pub fn tag_label(&self) -> Option<&str> {
        self.listing_type
            .as_deref()
            .or(self.category.as_deref())
            .or(self.sub_category.as_deref())
    }
}
