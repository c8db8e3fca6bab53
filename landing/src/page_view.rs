//! Browser bindings for the page-view controller: `setTimeout` timers and
//! DOM side effects.

use std::time::Duration;

use axiomor_core::timer::Task;
use axiomor_core::{NavigationIntent, PageEffects, PopupState, Scheduler, TimerHandle};
use leptos::prelude::*;
use leptos_router::location::State;
use wasm_bindgen::JsValue;

/// Schedules tasks with `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout`; `None` if the browser refused to schedule it.
pub struct BrowserTimer(Option<TimeoutHandle>);

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay: Duration, task: Task) -> BrowserTimer {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => BrowserTimer(Some(handle)),
            Err(err) => {
                web_sys::console::warn_2(&JsValue::from_str("setTimeout failed"), &err);
                BrowserTimer(None)
            }
        }
    }
}

impl TimerHandle for BrowserTimer {
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

/// Mirrors popup state into a signal and scrolls real DOM sections.
pub struct BrowserEffects {
    pub popup: RwSignal<PopupState>,
}

impl PageEffects for BrowserEffects {
    fn popup_changed(&self, state: PopupState) {
        self.popup.set(state);
    }

    fn scroll_to(&self, section: &str) {
        let Some(element) = document().get_element_by_id(section) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Section ids from `candidates` that are in the DOM right now.
pub fn rendered_sections(candidates: &[&'static str]) -> Vec<&'static str> {
    let doc = document();
    candidates
        .iter()
        .copied()
        .filter(|id| doc.get_element_by_id(id).is_some())
        .collect()
}

/// Read `{ scrollTo }` from router history state.
pub fn intent_from_state(state: &State) -> Option<NavigationIntent> {
    let value = state.to_js_value();
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::Reflect::get(&value, &JsValue::from_str("scrollTo"))
        .ok()?
        .as_string()
        .map(NavigationIntent::scroll_to)
}
