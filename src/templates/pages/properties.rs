use crate::domain::filter::FilterCriteria;
use crate::domain::{Listing, Location};
use crate::templates::components::{category_tabs, filter_form, listing_grid};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub results: Vec<&'a Listing>,
    pub total: usize,
    pub categories: &'a [String],
    pub locations: &'a [Location],
}

pub fn properties_page(vm: &ListingsVm<'_>) -> Markup {
    desktop_layout(
        "Products",
        html! {
            main class="container" {
                h1 { "Products" }
                (filter_form(vm.criteria, vm.locations))
                (category_tabs(vm.categories, vm.criteria))

                p class="result-count" {
                    "Showing " strong { (vm.results.len()) } " of " (vm.total) " products"
                }
                (listing_grid(&vm.results))
            }
        },
    )
}
