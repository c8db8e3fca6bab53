use axiomor_core::sections;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use wasm_bindgen::JsValue;

/// History state carrying `{ scrollTo: <section> }`.
fn scroll_state(section: &str) -> State {
    let payload = js_sys::Object::new();
    if let Err(err) = js_sys::Reflect::set(
        &payload,
        &JsValue::from_str("scrollTo"),
        &JsValue::from_str(section),
    ) {
        web_sys::console::warn_2(&JsValue::from_str("scroll intent dropped"), &err);
        return State::new(None);
    }
    State::new(Some(payload.into()))
}

#[component]
pub fn Nav(site_name: String) -> impl IntoView {
    let navigate = use_navigate();
    let to_section = move |section: &'static str| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            navigate(
                "/",
                NavigateOptions {
                    state: scroll_state(section),
                    ..Default::default()
                },
            )
        }
    };

    view! {
        <nav class="site-nav">
            <div class="container site-nav-inner">
                <A href="/" attr:class="site-brand">{site_name}</A>
                <div class="site-nav-links">
                    <button on:click=to_section(sections::COMPARE_PROVIDERS)>"Compare"</button>
                    <button on:click=to_section(sections::REVIEWS)>"Reviews"</button>
                    <A href="/blog">"Guides"</A>
                    <A href="/about">"How We Review"</A>
                </div>
            </div>
        </nav>
    }
}
