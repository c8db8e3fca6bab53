//! One page-view lifetime: popup and scroll machines plus their timers.
//!
//! [`PageView::mount`] starts the popup delay. Navigation events may
//! schedule a scroll. [`PageView::teardown`] (or dropping the view) cancels
//! whatever is still pending, and a timer that slips through anyway finds
//! the view unmounted and does nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use crate::config::SiteConfig;
use crate::popup::{DismissReason, PopupController, PopupState};
use crate::scroll::{NavigationEvent, ScrollController, ScrollDecision, ScrollState};
use crate::timer::{Scheduler, TimerHandle};

/// Side effects the page view asks its host to perform.
///
/// Both methods are invoked after the state change, never while internal
/// state is borrowed, so hosts may call back into the view.
pub trait PageEffects {
    /// The popup changed state.
    fn popup_changed(&self, _state: PopupState) {}

    /// Bring `section` into view.
    fn scroll_to(&self, _section: &str) {}
}

impl PageEffects for () {}

/// Delays used by one page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTimings {
    /// Start the popup timer at all
    pub popup_enabled: bool,
    /// `Hidden -> Visible` delay
    pub popup_delay: Duration,
    /// Delay between a matching navigation and the scroll
    pub scroll_delay: Duration,
}

impl Default for PageTimings {
    fn default() -> Self {
        Self {
            popup_enabled: true,
            popup_delay: Duration::from_millis(3000),
            scroll_delay: Duration::from_millis(100),
        }
    }
}

impl From<&SiteConfig> for PageTimings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            popup_enabled: config.popup.enabled,
            popup_delay: Duration::from_millis(config.popup.delay_ms),
            scroll_delay: Duration::from_millis(config.scroll.delay_ms),
        }
    }
}

struct Shared {
    popup: RefCell<PopupController>,
    scroll: RefCell<ScrollController>,
    effects: Rc<dyn PageEffects>,
    mounted: Cell<bool>,
}

impl Shared {
    fn show_popup(&self) {
        if !self.mounted.get() {
            return;
        }
        let shown = self.popup.borrow_mut().on_delay_elapsed();
        if shown {
            self.effects.popup_changed(PopupState::Visible);
        }
    }

    fn issue_scroll(&self) {
        if !self.mounted.get() {
            return;
        }
        let section = self.scroll.borrow_mut().on_delay_elapsed();
        if let Some(section) = section {
            self.effects.scroll_to(&section);
        }
    }
}

/// Controller state for one mounted page.
pub struct PageView<S: Scheduler> {
    scheduler: S,
    timings: PageTimings,
    shared: Rc<Shared>,
    popup_timer: Option<S::Handle>,
    scroll_timer: Option<S::Handle>,
}

impl<S: Scheduler> PageView<S> {
    /// Mount the page and start the popup delay.
    pub fn mount(scheduler: S, timings: PageTimings, effects: Rc<dyn PageEffects>) -> Self {
        let shared = Rc::new(Shared {
            popup: RefCell::new(PopupController::new()),
            scroll: RefCell::new(ScrollController::new()),
            effects,
            mounted: Cell::new(true),
        });

        let popup_timer = if timings.popup_enabled {
            let weak = Rc::downgrade(&shared);
            Some(scheduler.schedule(
                timings.popup_delay,
                Box::new(move || with_shared(&weak, Shared::show_popup)),
            ))
        } else {
            None
        };
        debug!(
            popup_delay_ms = timings.popup_delay.as_millis() as u64,
            popup_enabled = timings.popup_enabled,
            "page view mounted"
        );

        Self {
            scheduler,
            timings,
            shared,
            popup_timer,
            scroll_timer: None,
        }
    }

    /// Current popup state.
    pub fn popup_state(&self) -> PopupState {
        self.shared.popup.borrow().state()
    }

    /// Which control dismissed the popup, if any.
    pub fn dismissed_by(&self) -> Option<DismissReason> {
        self.shared.popup.borrow().dismissed_by()
    }

    /// Scroll state for the latest navigation event.
    pub fn scroll_state(&self) -> ScrollState {
        self.shared.scroll.borrow().state()
    }

    /// False once torn down.
    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.get()
    }

    /// Close icon.
    pub fn close_popup(&self) -> bool {
        self.dismiss_popup(DismissReason::Close)
    }

    /// "No Thanks" control.
    pub fn decline_popup(&self) -> bool {
        self.dismiss_popup(DismissReason::Decline)
    }

    /// Outbound offer link. The link opens in a new tab, so the overlay
    /// is dismissed on this page.
    pub fn activate_offer(&self) -> bool {
        self.dismiss_popup(DismissReason::Offer)
    }

    /// Dismiss for `reason`. Returns whether the state changed.
    pub fn dismiss_popup(&self, reason: DismissReason) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let changed = self.shared.popup.borrow_mut().dismiss(reason);
        if changed {
            self.shared.effects.popup_changed(PopupState::Dismissed);
        }
        changed
    }

    /// Evaluate a navigation against the sections rendered right now.
    pub fn navigate(&mut self, event: &NavigationEvent, rendered: &[&str]) {
        if !self.is_mounted() {
            return;
        }
        let decision = self.shared.scroll.borrow_mut().on_navigation(event, rendered);
        match decision {
            ScrollDecision::Unchanged => {}
            ScrollDecision::Skip => cancel(&mut self.scroll_timer),
            ScrollDecision::Schedule(section) => {
                cancel(&mut self.scroll_timer);
                debug!(%section, key = event.key, "scheduling scroll");
                let weak = Rc::downgrade(&self.shared);
                self.scroll_timer = Some(self.scheduler.schedule(
                    self.timings.scroll_delay,
                    Box::new(move || with_shared(&weak, Shared::issue_scroll)),
                ));
            }
        }
    }

    /// End the page view and cancel pending timers. Idempotent.
    pub fn teardown(&mut self) {
        if !self.shared.mounted.replace(false) {
            return;
        }
        cancel(&mut self.popup_timer);
        cancel(&mut self.scroll_timer);
        debug!(popup = ?self.popup_state(), "page view torn down");
    }
}

impl<S: Scheduler> Drop for PageView<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn with_shared(weak: &Weak<Shared>, f: fn(&Shared)) {
    if let Some(shared) = weak.upgrade() {
        f(&shared);
    }
}

fn cancel<H: TimerHandle>(timer: &mut Option<H>) {
    if let Some(mut handle) = timer.take() {
        handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::NavigationIntent;
    use crate::sections;
    use crate::timer::ManualScheduler;

    #[derive(Default)]
    struct Recorder {
        popup: RefCell<Vec<PopupState>>,
        scrolls: RefCell<Vec<String>>,
    }

    impl PageEffects for Recorder {
        fn popup_changed(&self, state: PopupState) {
            self.popup.borrow_mut().push(state);
        }

        fn scroll_to(&self, section: &str) {
            self.scrolls.borrow_mut().push(section.to_string());
        }
    }

    fn mount() -> (ManualScheduler, Rc<Recorder>, PageView<ManualScheduler>) {
        let scheduler = ManualScheduler::new();
        let recorder = Rc::new(Recorder::default());
        let view = PageView::mount(scheduler.clone(), PageTimings::default(), recorder.clone());
        (scheduler, recorder, view)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn compare(key: u64) -> NavigationEvent {
        NavigationEvent::new(key, Some(NavigationIntent::scroll_to(sections::COMPARE_PROVIDERS)))
    }

    #[test]
    fn popup_appears_after_delay() {
        let (clock, recorder, view) = mount();
        clock.advance(ms(2999));
        assert_eq!(view.popup_state(), PopupState::Hidden);
        clock.advance(ms(1));
        assert_eq!(view.popup_state(), PopupState::Visible);
        assert_eq!(*recorder.popup.borrow(), [PopupState::Visible]);
    }

    #[test]
    fn teardown_before_delay_cancels_popup() {
        let (clock, recorder, mut view) = mount();
        clock.advance(ms(1500));
        view.teardown();
        assert_eq!(clock.pending(), 0);

        clock.advance(ms(10_000));
        assert_eq!(view.popup_state(), PopupState::Hidden);
        assert!(!view.is_mounted());
        assert!(recorder.popup.borrow().is_empty());
    }

    #[test]
    fn drop_cancels_popup() {
        let (clock, recorder, view) = mount();
        drop(view);
        assert_eq!(clock.pending(), 0);
        clock.advance(ms(5000));
        assert!(recorder.popup.borrow().is_empty());
    }

    #[test]
    fn each_control_dismisses_for_good() {
        let controls: [fn(&PageView<ManualScheduler>) -> bool; 3] = [
            PageView::<ManualScheduler>::close_popup,
            PageView::<ManualScheduler>::decline_popup,
            PageView::<ManualScheduler>::activate_offer,
        ];
        for control in controls {
            let (clock, recorder, view) = mount();
            clock.advance(ms(3000));
            assert!(control(&view));
            assert_eq!(view.popup_state(), PopupState::Dismissed);

            clock.advance(ms(60_000));
            assert_eq!(view.popup_state(), PopupState::Dismissed);
            assert_eq!(
                *recorder.popup.borrow(),
                [PopupState::Visible, PopupState::Dismissed]
            );
        }
    }

    #[test]
    fn dismiss_before_visible_is_ignored() {
        let (clock, _recorder, view) = mount();
        assert!(!view.close_popup());
        clock.advance(ms(3000));
        assert_eq!(view.popup_state(), PopupState::Visible);
    }

    #[test]
    fn disabled_popup_never_schedules() {
        let clock = ManualScheduler::new();
        let timings = PageTimings {
            popup_enabled: false,
            ..Default::default()
        };
        let view = PageView::mount(clock.clone(), timings, Rc::new(()));
        assert_eq!(clock.pending(), 0);
        clock.advance(ms(10_000));
        assert_eq!(view.popup_state(), PopupState::Hidden);
    }

    #[test]
    fn navigation_scrolls_once_after_delay() {
        let (clock, recorder, mut view) = mount();
        let event = compare(1);
        view.navigate(&event, sections::HOME);
        clock.advance(ms(99));
        assert_eq!(view.scroll_state(), ScrollState::Idle);
        clock.advance(ms(1));
        assert_eq!(view.scroll_state(), ScrollState::Scrolled);

        view.navigate(&event, sections::HOME);
        clock.advance(ms(1000));
        assert_eq!(*recorder.scrolls.borrow(), ["compare-providers"]);
    }

    #[test]
    fn navigation_to_missing_section_is_noop() {
        let (clock, recorder, mut view) = mount();
        let event = NavigationEvent::new(1, Some(NavigationIntent::scroll_to("pricing")));
        view.navigate(&event, sections::HOME);
        clock.advance(ms(10_000));
        assert_eq!(view.scroll_state(), ScrollState::Idle);
        assert!(recorder.scrolls.borrow().is_empty());
    }

    #[test]
    fn new_navigation_scrolls_again() {
        let (clock, recorder, mut view) = mount();
        view.navigate(&compare(1), sections::HOME);
        clock.advance(ms(200));
        view.navigate(&compare(2), sections::HOME);
        assert_eq!(view.scroll_state(), ScrollState::Idle);
        clock.advance(ms(200));
        assert_eq!(recorder.scrolls.borrow().len(), 2);
    }

    #[test]
    fn superseded_scroll_is_cancelled() {
        let (clock, recorder, mut view) = mount();
        view.navigate(&compare(1), sections::HOME);
        view.navigate(&NavigationEvent::new(2, None), sections::HOME);
        clock.advance(ms(500));
        assert!(recorder.scrolls.borrow().is_empty());
        assert_eq!(view.scroll_state(), ScrollState::Idle);
    }

    #[test]
    fn teardown_cancels_pending_scroll() {
        let (clock, recorder, mut view) = mount();
        view.navigate(&compare(1), sections::HOME);
        view.teardown();
        clock.advance(ms(500));
        assert!(recorder.scrolls.borrow().is_empty());

        view.navigate(&compare(2), sections::HOME);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn timings_follow_config() {
        let mut config = SiteConfig::default();
        config.popup.delay_ms = 5000;
        config.scroll.delay_ms = 250;
        let timings = PageTimings::from(&config);
        assert_eq!(timings.popup_delay, ms(5000));
        assert_eq!(timings.scroll_delay, ms(250));
        assert!(timings.popup_enabled);
    }
}
