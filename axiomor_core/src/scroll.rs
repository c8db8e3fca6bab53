//! One-shot scroll-to-section driven by navigation intent.
//!
//! A navigation may carry `{ "scrollTo": "<section-id>" }`. Each navigation
//! event is evaluated once: if the section is rendered, a short-delay
//! scroll is scheduled and the machine ends in `Scrolled`; otherwise it
//! stays `Idle`. Re-renders that replay the same event are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Payload attached to a navigation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationIntent {
    /// Section id to bring into view
    #[serde(rename = "scrollTo")]
    pub scroll_to: String,
}

impl NavigationIntent {
    /// Intent to scroll to `section`.
    pub fn scroll_to(section: impl Into<String>) -> Self {
        Self {
            scroll_to: section.into(),
        }
    }
}

/// One routing transition as seen by the page.
///
/// `key` distinguishes navigations that carry equal payloads; the router
/// hands out a new key per transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Per-transition identity
    pub key: u64,
    /// Optional payload
    pub intent: Option<NavigationIntent>,
}

impl NavigationEvent {
    /// Navigation carrying `intent`.
    pub fn new(key: u64, intent: Option<NavigationIntent>) -> Self {
        Self { key, intent }
    }
}

/// Scroll state for the current navigation event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// Nothing issued for this event (yet)
    #[default]
    Idle,
    /// Scroll issued; terminal for this event
    Scrolled,
}

/// Outcome of evaluating a navigation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Same event as last time; nothing to do
    Unchanged,
    /// New event with no usable target
    Skip,
    /// New event; scroll to this section after the delay
    Schedule(String),
}

/// Tracks the scroll machine across navigation events.
#[derive(Clone, Debug, Default)]
pub struct ScrollController {
    state: ScrollState,
    last_key: Option<u64>,
    pending: Option<String>,
}

impl ScrollController {
    /// Fresh controller in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Section waiting for the scroll delay, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Evaluate a navigation against the sections rendered right now.
    pub fn on_navigation(&mut self, event: &NavigationEvent, rendered: &[&str]) -> ScrollDecision {
        if self.last_key == Some(event.key) {
            return ScrollDecision::Unchanged;
        }
        self.last_key = Some(event.key);
        self.state = ScrollState::Idle;
        self.pending = None;

        let Some(intent) = &event.intent else {
            return ScrollDecision::Skip;
        };
        if !rendered.contains(&intent.scroll_to.as_str()) {
            debug!(section = %intent.scroll_to, "scroll target not rendered; ignoring");
            return ScrollDecision::Skip;
        }

        self.pending = Some(intent.scroll_to.clone());
        ScrollDecision::Schedule(intent.scroll_to.clone())
    }

    /// The scroll delay elapsed; returns the section to scroll to.
    pub fn on_delay_elapsed(&mut self) -> Option<String> {
        let section = self.pending.take()?;
        self.state = ScrollState::Scrolled;
        debug!(%section, "scroll: idle -> scrolled");
        Some(section)
    }
}
