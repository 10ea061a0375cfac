use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "About",
        html! {
            main class="container" {
                h1 { "About us" }
                p {
                    "We design, supply and maintain industrial entrance automation: "
                    "high speed doors, sectional doors, loading bay equipment, "
                    "barriers and gate operators."
                }
                (card("Service", html! {
                    p { "Every installation is backed by a maintenance team on call around the clock." }
                }))
                (card("Coverage", html! {
                    p { "Projects across the Gulf and India. See " a href="/regions/Dubai" { "our work in Dubai" } "." }
                }))
            }
        },
    )
}
