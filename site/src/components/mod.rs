//! Leptos UI components for the comparison site.
//!
//! Components take plain records from `axiomor-core` and never select or
//! reorder data themselves; the page composer does that.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── Layout (SiteNav, SiteFooter)
//!     ├── Hero
//!     ├── CompareSection
//!     │   └── ComparisonTable
//!     ├── ReviewsSection
//!     │   └── ProviderCard (first one featured)
//!     ├── GuidesSection
//!     │   └── BlogCard
//!     ├── HowWeCompare
//!     ├── GetStarted
//!     └── AdPopup (only while visible)
//! ```

mod ad_popup;
mod blog;
mod comparison;
mod document;
mod hero;
mod icons;
mod layout;
mod pillars;
mod provider_card;

pub use ad_popup::AdPopup;
pub use blog::{BlogCard, BlogIndex, BlogPost, GuidesSection};
pub use comparison::{CompareSection, ComparisonTable};
pub use document::SiteDocument;
pub use hero::Hero;
pub use icons::*;
pub use layout::{Layout, SiteFooter, SiteNav};
pub use pillars::{GetStarted, HowWeCompare};
pub use provider_card::{ProviderCard, Rating, ReviewsSection};
