//! Page-view lifetime against real tokio timers.
//!
//! Uses paused time: `advance` moves the clock deterministically and the
//! spawned timer tasks run on the `LocalSet`.
//!
//! # Invariants
//! - The popup appears only after the full delay
//! - Teardown before the delay means it never appears
//! - Dismissed is terminal
//! - A scroll fires once per navigation event
//! - Timer delays count from scheduling, not from the first poll

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use axiomor_core::sections;
use axiomor_core::timer::TokioScheduler;
use axiomor_core::{Scheduler, TimerHandle};
use axiomor_core::{
    NavigationEvent, NavigationIntent, PageEffects, PageTimings, PageView, PopupState, ScrollState,
};
use tokio::task::LocalSet;

#[derive(Default)]
struct Log {
    popup: RefCell<Vec<PopupState>>,
    scrolls: RefCell<Vec<String>>,
}

impl PageEffects for Log {
    fn popup_changed(&self, state: PopupState) {
        self.popup.borrow_mut().push(state);
    }

    fn scroll_to(&self, section: &str) {
        self.scrolls.borrow_mut().push(section.to_string());
    }
}

async fn advance_and_yield(by: Duration) {
    tokio::time::advance(by).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn mount(log: &Rc<Log>) -> PageView<TokioScheduler> {
    PageView::mount(TokioScheduler, PageTimings::default(), log.clone())
}

#[tokio::test(start_paused = true)]
async fn popup_visible_after_delay() {
    LocalSet::new()
        .run_until(async {
            let log = Rc::new(Log::default());
            let view = mount(&log);

            advance_and_yield(Duration::from_millis(2900)).await;
            assert_eq!(view.popup_state(), PopupState::Hidden);

            advance_and_yield(Duration::from_millis(200)).await;
            assert_eq!(view.popup_state(), PopupState::Visible);
            assert_eq!(*log.popup.borrow(), [PopupState::Visible]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn teardown_before_delay_never_shows() {
    LocalSet::new()
        .run_until(async {
            let log = Rc::new(Log::default());
            let mut view = mount(&log);

            advance_and_yield(Duration::from_millis(1000)).await;
            view.teardown();

            advance_and_yield(Duration::from_secs(30)).await;
            assert_eq!(view.popup_state(), PopupState::Hidden);
            assert!(log.popup.borrow().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn dismissed_stays_dismissed() {
    LocalSet::new()
        .run_until(async {
            let log = Rc::new(Log::default());
            let view = mount(&log);

            advance_and_yield(Duration::from_millis(3100)).await;
            assert!(view.decline_popup());

            advance_and_yield(Duration::from_secs(60)).await;
            assert_eq!(view.popup_state(), PopupState::Dismissed);
            assert_eq!(
                *log.popup.borrow(),
                [PopupState::Visible, PopupState::Dismissed]
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn scroll_fires_once_per_navigation() {
    LocalSet::new()
        .run_until(async {
            let log = Rc::new(Log::default());
            let mut view = mount(&log);
            let event = NavigationEvent::new(
                1,
                Some(NavigationIntent::scroll_to(sections::COMPARE_PROVIDERS)),
            );

            view.navigate(&event, sections::HOME);
            advance_and_yield(Duration::from_millis(150)).await;
            assert_eq!(view.scroll_state(), ScrollState::Scrolled);

            view.navigate(&event, sections::HOME);
            advance_and_yield(Duration::from_millis(150)).await;
            assert_eq!(*log.scrolls.borrow(), [sections::COMPARE_PROVIDERS]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn delay_counts_from_schedule_call() {
    LocalSet::new()
        .run_until(async {
            let fired = Rc::new(std::cell::Cell::new(false));
            let flag = fired.clone();
            let _handle = TokioScheduler.schedule(
                Duration::from_millis(3000),
                Box::new(move || flag.set(true)),
            );

            // The clock moves before the spawned task is ever polled.
            tokio::time::advance(Duration::from_millis(3000)).await;
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
            assert!(fired.get());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    LocalSet::new()
        .run_until(async {
            let fired = Rc::new(std::cell::Cell::new(false));
            let flag = fired.clone();
            let mut handle = TokioScheduler.schedule(
                Duration::from_millis(100),
                Box::new(move || flag.set(true)),
            );

            advance_and_yield(Duration::from_millis(50)).await;
            handle.cancel();
            advance_and_yield(Duration::from_millis(500)).await;
            assert!(!fired.get());
        })
        .await;
}
