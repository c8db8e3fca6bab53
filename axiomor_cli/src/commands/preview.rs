//! `axiomor preview` - drive a page view with real timers and print what the
//! browser would see.

use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use axiomor_core::timer::TokioScheduler;
use axiomor_core::{
    NavigationEvent, NavigationIntent, PageEffects, PageTimings, PageView, PopupState,
    ScrollState, sections,
};
use tokio::task::LocalSet;
use tokio::time::{Instant, sleep, sleep_until};
use tracing::info;

use crate::cli::{PreviewArgs, Sources};

/// Extra time after the last timer so late callbacks would still be seen.
const SETTLE: Duration = Duration::from_millis(50);

/// Prints every effect as one stdout line.
struct ConsoleEffects;

impl PageEffects for ConsoleEffects {
    fn popup_changed(&self, state: PopupState) {
        println!("popup: {}", popup_label(state));
    }

    fn scroll_to(&self, section: &str) {
        println!("scroll: {section}");
    }
}

fn popup_label(state: PopupState) -> &'static str {
    match state {
        PopupState::Hidden => "hidden",
        PopupState::Visible => "visible",
        PopupState::Dismissed => "dismissed",
    }
}

fn scroll_label(state: ScrollState) -> &'static str {
    match state {
        ScrollState::Idle => "idle",
        ScrollState::Scrolled => "scrolled",
    }
}

pub fn run(sources: &Sources, args: &PreviewArgs) -> Result<()> {
    let mut config = sources.config()?;
    if let Some(ms) = args.popup_delay_ms {
        config.popup.delay_ms = ms;
    }
    let timings = PageTimings::from(&config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("starting preview runtime")?;
    LocalSet::new().block_on(&runtime, preview(timings, args));
    Ok(())
}

async fn preview(timings: PageTimings, args: &PreviewArgs) {
    let start = Instant::now();
    let deadline = start + timings.popup_delay.max(timings.scroll_delay) + SETTLE;

    let mut view = PageView::mount(TokioScheduler, timings, Rc::new(ConsoleEffects));
    info!(
        "Mounted page view (popup {}, delay {:?})",
        if timings.popup_enabled { "on" } else { "off" },
        timings.popup_delay
    );

    if let Some(section) = &args.scroll_to {
        let event = NavigationEvent::new(1, Some(NavigationIntent::scroll_to(section.as_str())));
        view.navigate(&event, sections::HOME);
    }

    if let Some(ms) = args.teardown_after_ms {
        sleep(Duration::from_millis(ms)).await;
        view.teardown();
        println!("teardown");
    } else if let Some(ms) = args.dismiss_after_ms {
        sleep(Duration::from_millis(ms)).await;
        if !view.dismiss_popup(args.dismiss_with.into()) {
            info!("Popup not visible at {}ms; dismiss ignored", ms);
        }
    }

    sleep_until(deadline.max(Instant::now() + SETTLE)).await;
    println!(
        "final: popup={} scroll={}",
        popup_label(view.popup_state()),
        scroll_label(view.scroll_state())
    );
}
