use crate::domain::Listing;
use crate::templates::components::listing_grid;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn region_page(region: &str, results: &[&Listing]) -> Markup {
    desktop_layout(
        region,
        html! {
            main class="container" {
                h1 { "Projects in " (region) }
                p class="result-count" { (results.len()) " products installed in this region" }
                (listing_grid(results))
            }
        },
    )
}
