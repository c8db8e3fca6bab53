//! Page shell: sticky nav on top, footer at the bottom.

use leptos::prelude::*;

/// Nav + `<main>` + footer.
#[component]
pub fn Layout(site_name: String, children: Children) -> impl IntoView {
    view! {
        <SiteNav site_name=site_name.clone() />
        <main>{children()}</main>
        <SiteFooter site_name=site_name />
    }
}

/// Top navigation with plain anchor links (works without JavaScript).
#[component]
pub fn SiteNav(site_name: String) -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="container site-nav-inner">
                <a href="/" class="site-brand">{site_name}</a>
                <div class="site-nav-links">
                    <a href="/#compare-providers">"Compare"</a>
                    <a href="/#reviews">"Reviews"</a>
                    <a href="/blog">"Guides"</a>
                    <a href="/about">"How We Review"</a>
                </div>
            </div>
        </nav>
    }
}

/// Footer with affiliate disclosure.
#[component]
pub fn SiteFooter(site_name: String) -> impl IntoView {
    let copyright = format!("© 2026 {}. All rights reserved.", site_name);
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer-inner">
                    <span>{copyright}</span>
                    <div class="site-nav-links">
                        <a href="/about">"About"</a>
                        <a href="/blog">"Blog"</a>
                        <a href="/#compare-providers">"Compare"</a>
                    </div>
                </div>
                <p class="disclosure">
                    "Some links on this site are affiliate links. We may earn a commission at no extra cost to you; "
                    "it never changes how we rank providers."
                </p>
            </div>
        </footer>
    }
}
