use crate::domain::filter::{FilterCriteria, ALL_CATEGORIES};
use crate::domain::{Listing, Location};
use maud::{html, Markup};
use url::form_urlencoded;

pub mod error;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `/properties` link carrying the given criteria.
pub fn listings_href(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !criteria.query.trim().is_empty() {
        query.append_pair("q", criteria.query.trim());
    }
    if let Some(category) = criteria.active_category() {
        query.append_pair("category", category);
    }
    if let Some(location) = criteria.location_id.as_deref() {
        query.append_pair("location", location);
    }
    if let Some(region) = criteria.region.as_deref() {
        query.append_pair("region", region);
    }

    let query = query.finish();
    if query.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{query}")
    }
}

/// Form-encodes a value into a single path segment. Must stay paired with
/// `requests::decode_segment`, which the router applies to every segment.
pub fn path_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `/regions/{name}` link.
pub fn region_href(name: &str) -> String {
    format!("/regions/{}", path_segment(name.trim()))
}

/// `/properties/{id}` detail link.
pub fn listing_href(id: &str) -> String {
    format!("/properties/{}", path_segment(id))
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" {
            @if let Some(image) = &listing.image {
                img src=(image) alt=(listing.name) loading="lazy";
            }
            h3 { a href=(listing_href(&listing.id)) { (listing.name) } }
            @if let Some(tag) = listing.tag_label() {
                span class="tag" { (tag) }
            }
            @if let Some(location) = &listing.location {
                p class="location" { (location) }
            }
            @if let Some(price) = &listing.price {
                p class="price" { (price) }
            }
        }
    }
}

pub fn listing_grid(listings: &[&Listing]) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="empty-state" { "No results found." }
        } @else {
            div class="listing-grid" {
                @for listing in listings {
                    (listing_card(listing))
                }
            }
        }
    }
}

/// One tab per category plus "All". Tabs keep the other active criteria.
pub fn category_tabs(categories: &[String], criteria: &FilterCriteria) -> Markup {
    let active = criteria.active_category().map(str::to_lowercase);
    let all_href = listings_href(&criteria.clone().with_category(ALL_CATEGORIES));

    html! {
        nav class="category-tabs" {
            a.tab.active[active.is_none()] href=(all_href) { "All" }
            @for category in categories {
                @let href = listings_href(&criteria.clone().with_category(category.as_str()));
                @let is_active = active.as_deref() == Some(category.to_lowercase().as_str());
                a.tab.active[is_active] href=(href) { (category) }
            }
        }
    }
}

pub fn filter_form(criteria: &FilterCriteria, locations: &[Location]) -> Markup {
    html! {
        form class="filter-form" method="get" action="/properties" {
            label class="sr-only" for="q" { "Search" }
            input type="search" id="q" name="q" value=(criteria.query) placeholder="Search products";

            @if let Some(category) = criteria.active_category() {
                input type="hidden" name="category" value=(category);
            }

            label class="sr-only" for="location" { "Location" }
            select id="location" name="location" {
                option value="" selected[criteria.location_id.is_none()] { "All locations" }
                @for location in locations {
                    option
                        value=(location.id)
                        selected[criteria.location_id.as_deref() == Some(location.id.as_str())]
                    { (location.name) }
                }
            }

            button type="submit" class="primary" { "Search" }
        }
    }
}

pub fn enquiry_form(listing_id: Option<&str>) -> Markup {
    html! {
        form class="enquiry-form" method="post" action="/contact" {
            @if let Some(id) = listing_id {
                input type="hidden" name="listing_id" value=(id);
            }
            label for="name" { "Name" }
            input type="text" id="name" name="name" autocomplete="name" required;
            label for="email" { "Email" }
            input type="email" id="email" name="email" autocomplete="email" required;
            label for="phone" { "Phone (optional)" }
            input type="tel" id="phone" name="phone" autocomplete="tel";
            label for="message" { "Message" }
            textarea id="message" name="message" rows="4" required {}
            button type="submit" class="primary" { "Send enquiry" }
        }
    }
}
