use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Apex Automation";

const BASE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; }
header { display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header ul { display: flex; gap: 16px; list-style: none; margin: 0; padding: 0; }
a { color: #1d4ed8; text-decoration: none; }
.container { max-width: 1100px; margin: 0 auto; padding: 24px; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; }
.listing-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.listing-card img { width: 100%; border-radius: 4px; }
.tag { font-size: .8em; background: #eef2ff; padding: 2px 8px; border-radius: 999px; }
.category-tabs { display: flex; flex-wrap: wrap; gap: 8px; margin: 16px 0; }
.tab { padding: 6px 12px; border-radius: 4px; background: #f3f4f6; }
.tab.active { background: #1d4ed8; color: white; }
.filter-form, .enquiry-form { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; }
.enquiry-form { flex-direction: column; align-items: stretch; max-width: 480px; }
.primary { padding: 8px 16px; background: #1d4ed8; color: white; border: none; border-radius: 4px; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0,0,0,0); }
.empty-state { color: #6b7280; font-style: italic; }
footer { padding: 16px 24px; font-size: .875em; color: #6b7280; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    a href="/" class="brand" { strong { (SITE_NAME) } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/properties" { "Products" } }
                            li { a href="/about" { "About" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                }
                (content)
                footer {
                    "Industrial doors, gates and access control."
                }
            }
        }
    }
}
