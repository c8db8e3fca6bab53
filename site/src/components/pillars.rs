use axiomor_core::sections;
use leptos::prelude::*;

use super::{Icon, ICON_CHECK_CIRCLE, ICON_LIGHTNING, ICON_SHIELD_CHECK};

struct Pillar {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        icon: ICON_SHIELD_CHECK,
        title: "Unbiased Reviews",
        text: "We purchase and test every hosting plan anonymously to ensure our data is accurate and impartial.",
    },
    Pillar {
        icon: ICON_LIGHTNING,
        title: "Performance Testing",
        text: "We monitor uptime and speed 24/7 using industry-standard tools to give you real-world performance metrics.",
    },
    Pillar {
        icon: ICON_CHECK_CIRCLE,
        title: "Expert Analysis",
        text: "Our team of web experts evaluates support quality, feature sets, and ease of use for every provider.",
    },
];

#[component]
pub fn HowWeCompare() -> impl IntoView {
    view! {
        <section id=sections::HOW_WE_COMPARE class="section section-dark">
            <div class="container">
                <div class="pillars">
                    {PILLARS.iter().map(|pillar| view! {
                        <div>
                            <div class="pillar-icon">
                                <Icon path=pillar.icon size="32" />
                            </div>
                            <h3 class="pillar-title">{pillar.title}</h3>
                            <p class="pillar-text">{pillar.text}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn GetStarted() -> impl IntoView {
    let compare_href = format!("/#{}", sections::COMPARE_PROVIDERS);
    view! {
        <section id=sections::GET_STARTED class="section-brand">
            <div class="container-narrow">
                <h2 class="cta-title">"Ready to start your website?"</h2>
                <p class="cta-text">
                    "Choose a provider that fits your needs and budget. We've done the research so you don't have to."
                </p>
                <a href=compare_href class="btn btn-secondary btn-lg">"See All Recommendations"</a>
            </div>
        </section>
    }
}
