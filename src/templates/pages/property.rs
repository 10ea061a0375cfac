use crate::domain::{Listing, Location};
use crate::templates::components::{enquiry_form, region_href};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// `linked` holds the locations this listing references by id.
pub fn property_page(listing: &Listing, linked: &[&Location]) -> Markup {
    desktop_layout(
        &listing.name,
        html! {
            main class="container" {
                p { a href="/properties" { "← All products" } }
                h1 { (listing.name) }

                @if let Some(image) = &listing.image {
                    img class="hero-image" src=(image) alt=(listing.name);
                }

                dl class="facts" {
                    @if let Some(t) = &listing.listing_type {
                        dt { "Type" } dd { (t) }
                    }
                    @if let Some(c) = &listing.category {
                        dt { "Category" } dd { (c) }
                    }
                    @if let Some(s) = &listing.sub_category {
                        dt { "Range" } dd { (s) }
                    }
                    @if let Some(l) = &listing.location {
                        dt { "Location" } dd { (l) }
                    }
                    @if !linked.is_empty() {
                        dt { "Regions" }
                        dd {
                            @for (i, loc) in linked.iter().enumerate() {
                                @if i > 0 { ", " }
                                a href=(region_href(&loc.name)) { (loc.name) }
                            }
                        }
                    }
                    @if let Some(p) = &listing.price {
                        dt { "Price" } dd { (p) }
                    }
                }

                @if let Some(description) = &listing.description {
                    p class="description" { (description) }
                }

                section class="card" {
                    h3 { "Enquire about this product" }
                    (enquiry_form(Some(&listing.id)))
                }
            }
        },
    )
}
