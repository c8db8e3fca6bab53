use axiomor_core::Catalog;
use axiomor_site::components::BlogIndex;
use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    let catalog = use_context::<Catalog>().unwrap_or_default();
    view! { <BlogIndex posts=catalog.blog_posts /> }
}
