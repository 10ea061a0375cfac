// templates/pages/home.rs

use crate::domain::filter::FilterCriteria;
use crate::domain::Listing;
use crate::templates::components::{card, category_tabs, listing_grid};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// How many listings the home page features.
pub const FEATURED_COUNT: usize = 6;

pub fn home_page(listings: &[Listing], categories: &[String]) -> Markup {
    let featured: Vec<&Listing> = listings.iter().take(FEATURED_COUNT).collect();

    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Automation that keeps your site moving" }
                    p { "High speed doors, gate operators and access control, supplied and serviced across the region." }
                    a href="/contact" class="btn primary" { "Request a quote" }
                }

                section {
                    h2 { "Browse by category" }
                    (category_tabs(categories, &FilterCriteria::default()))
                }

                section {
                    h2 { "Featured products" }
                    (listing_grid(&featured))
                    p { a href="/properties" { "View all products →" } }
                }

                (card("Why work with us", html! {
                    ul {
                        li { "Site surveys and installation by our own engineers" }
                        li { "Preventive maintenance contracts" }
                        li { "Spare parts held locally" }
                    }
                }))
            }
        },
    )
}
