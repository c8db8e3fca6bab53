//! # axiomor-core
//!
//! Page composition and timed popup disclosure for the Axiomor
//! domain/hosting comparison site.
//!
//! The crate is UI-agnostic: the Leptos renderer (`axiomor-site`), the
//! browser app and the CLI all drive the same types.
//!
//! ## Modules
//!
//! - [`types`] - provider and blog-post records
//! - [`catalog`] - the static data provider (built-in JSON or a file)
//! - [`composer`] - bounded, ordered display subsets for each home section
//! - [`popup`] - `Hidden -> Visible -> Dismissed` state machine
//! - [`scroll`] - one-shot scroll on navigation intent
//! - [`timer`] - cancellable deferred callbacks
//! - [`page_view`] - ties the machines and timers to one page-view lifetime
//! - [`config`] - `axiomor.toml` settings
//!
//! ## Example
//!
//! ```rust
//! use axiomor_core::{Catalog, PageComposer};
//!
//! let catalog = Catalog::builtin();
//! let selection = PageComposer::default().compose(&catalog);
//! assert_eq!(selection.comparison.len(), 13);
//! assert_eq!(selection.top_providers.len(), 3);
//! assert_eq!(selection.featured_reviews[3].name, "Kinsta");
//! ```

pub mod catalog;
pub mod composer;
pub mod config;
pub mod error;
pub mod page_view;
pub mod popup;
pub mod scroll;
pub mod timer;
pub mod types;

pub use catalog::Catalog;
pub use composer::{DisplaySelection, PageComposer, Pick};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use page_view::{PageEffects, PageTimings, PageView};
pub use popup::{DismissReason, PopupController, PopupState};
pub use scroll::{NavigationEvent, NavigationIntent, ScrollController, ScrollState};
pub use timer::{ManualScheduler, Scheduler, TimerHandle};
pub use types::{BlogPostRecord, ProviderCategory, ProviderRecord};

/// Section ids rendered on the home page, in document order.
pub mod sections {
    /// Hero banner
    pub const HERO: &str = "hero";
    /// Side-by-side comparison table
    pub const COMPARE_PROVIDERS: &str = "compare-providers";
    /// Detailed review cards
    pub const REVIEWS: &str = "reviews";
    /// Blog highlights
    pub const GUIDES: &str = "guides";
    /// "How we compare" pillars
    pub const HOW_WE_COMPARE: &str = "how-we-compare";
    /// Closing call to action
    pub const GET_STARTED: &str = "get-started";

    /// All home sections in render order.
    pub const HOME: &[&str] = &[
        HERO,
        COMPARE_PROVIDERS,
        REVIEWS,
        GUIDES,
        HOW_WE_COMPARE,
        GET_STARTED,
    ];
}
