use axiomor_core::SiteConfig;
use axiomor_site::pages::AboutContent;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    view! { <AboutContent site_name=config.site.name /> }
}
