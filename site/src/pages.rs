//! Page bodies shared by the static renderer and the browser app.

use axiomor_core::{DisplaySelection, SiteConfig};
use leptos::prelude::*;

use crate::components::{CompareSection, GetStarted, GuidesSection, Hero, HowWeCompare, ReviewsSection};

/// All home-page sections in order. The popup is mounted by the caller.
#[component]
pub fn HomeSections(selection: DisplaySelection, config: SiteConfig) -> impl IntoView {
    let DisplaySelection {
        comparison,
        top_providers,
        featured_reviews,
        blog_highlights,
    } = selection;
    view! {
        <Hero badge=config.site.badge.clone() site_name=config.site.name.clone() />
        <CompareSection providers=comparison top_picks=top_providers.len() />
        <ReviewsSection providers=featured_reviews />
        <GuidesSection posts=blog_highlights />
        <HowWeCompare />
        <GetStarted />
    }
}

/// "How We Review" page.
#[component]
pub fn AboutContent(site_name: String) -> impl IntoView {
    let intro = format!(
        "{} is an independent comparison site. We buy every plan we review with our own money \
         and keep testing it after the review is published.",
        site_name
    );
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"How We Review"</h1>
                <p class="page-description">{intro}</p>
            </div>
        </section>
        <section class="section">
            <div class="prose">
                <h2>"Anonymous purchases"</h2>
                <p>
                    "Providers do not know which account belongs to us, so we get the same "
                    "onboarding, upsells, and support queue as everyone else."
                </p>
                <h2>"Continuous monitoring"</h2>
                <p>
                    "A test site on every plan is probed from several regions around the clock. "
                    "Uptime and response times in our tables come from those probes."
                </p>
                <h2>"Renewal pricing first"</h2>
                <p>
                    "Introductory discounts end. Every comparison shows the renewal price next to "
                    "the starting price so the second-year bill is never a surprise."
                </p>
                <h2>"Affiliate disclosure"</h2>
                <p>
                    "We earn a commission on some outbound links. Rankings are set before "
                    "affiliate terms are known and are never for sale."
                </p>
            </div>
        </section>
    }
}
