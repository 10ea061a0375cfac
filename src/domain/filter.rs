// src/domain/filter.rs

use crate::domain::listing::Listing;
use crate::domain::location::Location;
use std::collections::{HashMap, HashSet};

/// Category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// The user-selected constraints for a listing view.
///
/// Every field is optional; an empty field imposes no constraint. Values are
/// kept as typed by the user and trimmed when the filter is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: String,
    pub location_id: Option<String>,
    pub region: Option<String>,
}

impl FilterCriteria {
    /// Reads `q`, `category`, `location` and `region` from decoded query parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(|v| v.trim().to_string());

        Self {
            query: get("q").unwrap_or_default(),
            category: get("category").unwrap_or_default(),
            location_id: get("location").filter(|v| !v.is_empty()),
            region: get("region").filter(|v| !v.is_empty()),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The category to filter on, or `None` for empty / "all".
    pub fn active_category(&self) -> Option<&str> {
        let category = self.category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(category)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive containment. `needle` must already be lowercase.
fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| contains_lowered(value, needle))
}

/// A geographic constraint resolved against the known locations.
///
/// Listings link to places inconsistently: some only mention the place in their
/// free-text `location`, some only carry a structured id. A scope therefore
/// matches on either.
#[derive(Debug)]
struct RegionScope {
    name: Option<String>,
    location_ids: HashSet<String>,
}

impl RegionScope {
    /// Every location whose name contains `region` belongs to the scope.
    fn for_region(region: &str, locations: &[Location]) -> Self {
        let name = region.to_lowercase();
        let location_ids = locations
            .iter()
            .filter(|loc| contains_lowered(&loc.name, &name))
            .map(|loc| loc.id.clone())
            .collect();

        Self {
            name: Some(name),
            location_ids,
        }
    }

    /// A single selected location. An id missing from `locations` still
    /// matches listings linked to it, just not by text.
    fn for_location(location_id: &str, locations: &[Location]) -> Self {
        let name = locations
            .iter()
            .find(|loc| loc.id == location_id)
            .map(|loc| loc.name.trim().to_lowercase())
            .filter(|name| !name.is_empty());

        Self {
            name,
            location_ids: HashSet::from([location_id.to_string()]),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        let by_text = match &self.name {
            Some(name) => field_contains(listing.location.as_deref(), name),
            None => false,
        };

        by_text
            || listing
                .location_ids
                .iter()
                .any(|id| self.location_ids.contains(id))
    }
}

/// Criteria compiled once per filtering pass: needles lowercased, region
/// names resolved to location ids.
#[derive(Debug)]
struct ListingFilter {
    query: Option<String>,
    category: Option<String>,
    scopes: Vec<RegionScope>,
}

impl ListingFilter {
    fn new(criteria: &FilterCriteria, locations: &[Location]) -> Self {
        let query = Some(criteria.query.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let category = criteria.active_category().map(str::to_lowercase);

        let mut scopes = Vec::new();
        if let Some(id) = non_blank(criteria.location_id.as_deref()) {
            scopes.push(RegionScope::for_location(id, locations));
        }
        if let Some(region) = non_blank(criteria.region.as_deref()) {
            scopes.push(RegionScope::for_region(region, locations));
        }

        Self {
            query,
            category,
            scopes,
        }
    }

    /// True when the listing satisfies every active criterion.
    fn matches(&self, listing: &Listing) -> bool {
        self.matches_category(listing)
            && self.matches_query(listing)
            && self.scopes.iter().all(|scope| scope.matches(listing))
    }

    // Loose on purpose: tags are inconsistent across records ("Security" vs
    // "Security Systems"), so containment rather than equality.
    fn matches_category(&self, listing: &Listing) -> bool {
        let Some(category) = &self.category else {
            return true;
        };

        field_contains(listing.listing_type.as_deref(), category)
            || field_contains(listing.sub_category.as_deref(), category)
    }

    fn matches_query(&self, listing: &Listing) -> bool {
        let Some(query) = &self.query else {
            return true;
        };

        contains_lowered(&listing.name, query)
            || field_contains(listing.location.as_deref(), query)
            || field_contains(listing.description.as_deref(), query)
    }
}

/// Returns the listings matching `criteria`, in their original order.
///
/// Accepts anything that yields `&Listing`, so a previous result can be
/// filtered again without cloning.
pub fn filter<'a, I>(
    listings: I,
    criteria: &FilterCriteria,
    locations: &[Location],
) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let compiled = ListingFilter::new(criteria, locations);

    listings
        .into_iter()
        .filter(|listing| compiled.matches(listing))
        .collect()
}

/// Distinct `type` tags in order of first appearance, compared
/// case-insensitively. The first spelling seen is the one returned.
pub fn categories(listings: &[Listing]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for tag in listings.iter().filter_map(|l| l.listing_type.as_deref()) {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_lowercase()) {
            out.push(tag.to_string());
        }
    }

    out
}
