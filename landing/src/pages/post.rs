use axiomor_core::Catalog;
use axiomor_site::components::BlogPost;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn PostPage() -> impl IntoView {
    let catalog = use_context::<Catalog>().unwrap_or_default();
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match catalog.post_by_slug(&slug).cloned() {
            Some(post) => view! { <BlogPost post=post /> }.into_any(),
            None => view! { <p class="page-header">"Post not found."</p> }.into_any(),
        }
    }
}
