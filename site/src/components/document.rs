//! Root document component - the complete static HTML page

use crate::styles::{CSP, SITE_CSS};
use leptos::prelude::*;

/// Full `<html>` shell with inlined CSS.
#[component]
pub fn SiteDocument(
    /// `<title>` text
    title: String,
    /// Meta description
    #[prop(default = String::new())]
    description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>{children()}</body>
        </html>
    }
}
