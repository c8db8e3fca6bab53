// Axiomor browser app (Leptos 0.8 CSR)
// Same components as the static export, plus the live popup and
// navigation-intent scrolling.

mod nav;
mod page_view;
mod pages;

use axiomor_core::{Catalog, SiteConfig};
use axiomor_site::components::SiteFooter;
use axiomor_site::styles::SITE_CSS;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use nav::Nav;
use pages::{AboutPage, BlogPage, HomePage, PostPage};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::default();
    let site_name = config.site.name.clone();
    provide_context(Catalog::builtin());
    provide_context(config);

    view! {
        <style>{SITE_CSS}</style>
        <Router>
            <Nav site_name=site_name.clone() />
            <main>
                <Routes fallback=|| view! { <p class="page-header">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=PostPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </main>
            <SiteFooter site_name=site_name />
        </Router>
    }
}
