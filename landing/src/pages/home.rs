// Home page - composed sections, timed popup, scroll on navigation intent
use std::rc::Rc;

use axiomor_core::{
    sections, Catalog, NavigationEvent, PageEffects, PageTimings, PageView, PopupState, SiteConfig,
};
use axiomor_site::components::AdPopup;
use axiomor_site::pages::HomeSections;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::page_view::{intent_from_state, rendered_sections, BrowserEffects, BrowserScheduler};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let catalog = use_context::<Catalog>().unwrap_or_default();
    let selection = config.home.compose(&catalog);

    let popup = RwSignal::new(PopupState::Hidden);
    let effects: Rc<dyn PageEffects> = Rc::new(BrowserEffects { popup });
    let page = StoredValue::new_local(PageView::mount(
        BrowserScheduler,
        PageTimings::from(&config),
        effects,
    ));
    on_cleanup(move || {
        page.try_update_value(|view| view.teardown());
    });

    // One navigation event per change of router location state.
    let location = use_location();
    let nav_key = StoredValue::new(0u64);
    Effect::new(move |_| {
        let intent = intent_from_state(&location.state.get());
        nav_key.update_value(|key| *key += 1);
        let event = NavigationEvent::new(nav_key.get_value(), intent);
        let rendered = rendered_sections(sections::HOME);
        page.try_update_value(|view| view.navigate(&event, &rendered));
    });

    let on_close = Callback::new(move |_: ()| {
        page.try_with_value(|view| view.close_popup());
    });
    let on_decline = Callback::new(move |_: ()| {
        page.try_with_value(|view| view.decline_popup());
    });
    let on_offer = Callback::new(move |_: ()| {
        page.try_with_value(|view| view.activate_offer());
    });
    let offer = config.popup.offer.clone();

    view! {
        <HomeSections selection=selection config=config />
        <Show when=move || popup.get().is_visible()>
            <AdPopup
                offer=offer.clone()
                on_close=on_close
                on_decline=on_decline
                on_offer=on_offer
            />
        </Show>
    }
}
