use crate::templates::components::enquiry_form;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    desktop_layout(
        "Contact",
        html! {
            main class="container" {
                h1 { "Contact us" }
                p { "Tell us about your site and we will get back to you within one working day." }
                (enquiry_form(None))
            }
        },
    )
}

pub fn thanks_page(name: &str) -> Markup {
    desktop_layout(
        "Thank you",
        html! {
            main class="container" {
                h1 { "Thank you, " (name) }
                p { "Your enquiry has been received. Our team will contact you shortly." }
                p { a href="/properties" { "Continue browsing products" } }
            }
        },
    )
}
