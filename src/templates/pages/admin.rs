use crate::domain::{Lead, Listing, Location};
use crate::templates::components::{listing_href, path_segment};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub listings: &'a [Listing],
    pub locations: &'a [Location],
    pub leads: &'a [Lead],
    pub sync_enabled: bool,
}

const TH: &str = "padding: 8px; text-align: left; border-bottom: 2px solid #eee;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

pub fn admin_page(vm: &AdminVm<'_>) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Catalog" }
                    p {
                        strong { (vm.listings.len()) } " listings, "
                        strong { (vm.locations.len()) } " locations"
                    }
                    @if vm.sync_enabled {
                        form action="/admin/sync" method="post" style="margin: 0;" {
                            button type="submit" style="padding: 8px 16px; background: #10b981; color: white; border: none; border-radius: 4px; cursor: pointer;" {
                                "Sync from data API"
                            }
                        }
                    } @else {
                        p style="color: #6b7280; font-style: italic;" { "No data API configured." }
                    }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Listings" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse;" {
                            thead {
                                tr {
                                    th style=(TH) { "ID" }
                                    th style=(TH) { "Name" }
                                    th style=(TH) { "Type" }
                                    th style=(TH) { "Location" }
                                    th style=(TH) {}
                                }
                            }
                            tbody {
                                @for listing in vm.listings {
                                    tr {
                                        td style=(TD) { code { (listing.id) } }
                                        td style=(TD) { a href=(listing_href(&listing.id)) { (listing.name) } }
                                        td style=(TD) { (listing.listing_type.as_deref().unwrap_or("-")) }
                                        td style=(TD) { (listing.location.as_deref().unwrap_or("-")) }
                                        td style=(TD) {
                                            form action=(format!("/admin/listings/{}/delete", path_segment(&listing.id))) method="post" style="margin: 0;" {
                                                button type="submit" { "Delete" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Locations" }
                    ul {
                        @for location in vm.locations {
                            li {
                                (location.name) " " code { (location.id) }
                                form action=(format!("/admin/locations/{}/delete", path_segment(&location.id))) method="post" style="display: inline; margin-left: 8px;" {
                                    button type="submit" { "Delete" }
                                }
                            }
                        }
                    }
                }

                div class="card" {
                    h3 { "Enquiries" }
                    p { a href="/admin/leads.xlsx" { "Download as spreadsheet" } }
                    @if vm.leads.is_empty() {
                        p { "No enquiries yet." }
                    } @else {
                        table style="width: 100%; border-collapse: collapse; font-size: 0.9em;" {
                            thead {
                                tr {
                                    th style=(TH) { "Received" }
                                    th style=(TH) { "Name" }
                                    th style=(TH) { "Email" }
                                    th style=(TH) { "Listing" }
                                    th style=(TH) { "Message" }
                                }
                            }
                            tbody {
                                @for lead in vm.leads {
                                    tr {
                                        td style=(TD) { (lead.created_at.format("%Y-%m-%d %H:%M").to_string()) }
                                        td style=(TD) { (lead.name) }
                                        td style=(TD) { a href=(format!("mailto:{}", lead.email)) { (lead.email) } }
                                        td style=(TD) { (lead.listing_id.as_deref().unwrap_or("-")) }
                                        td style=(TD) { (lead.message) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
