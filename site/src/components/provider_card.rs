//! Detailed review card for one provider

use axiomor_core::types::ProviderRecord;
use leptos::prelude::*;

use super::{Icon, ICON_CHECK, ICON_CHECK_CIRCLE, ICON_MINUS};

/// Five-star rating with the numeric score.
#[component]
pub fn Rating(provider: ProviderRecord) -> impl IntoView {
    let filled = provider.filled_stars();
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
    let label = format!("Rated {} out of 5", provider.rating_label());
    view! {
        <span class="rating" title=label>
            {stars}
            <span class="rating-value">{provider.rating_label()}</span>
        </span>
    }
}

/// Review card. `featured` gives the card the emphasized treatment.
#[component]
pub fn ProviderCard(
    provider: ProviderRecord,
    #[prop(default = false)]
    featured: bool,
) -> impl IntoView {
    let card_class = if featured { "provider-card featured" } else { "provider-card" };
    let visit_label = format!("Visit {}", provider.name);
    let badge = provider
        .badge
        .clone()
        .map(|badge| view! { <span class="provider-badge">{badge}</span> });

    view! {
        <article class=card_class data-provider=provider.id.clone()>
            <div class="provider-card-header">
                <div>
                    {badge}
                    <h3 class="provider-name">{provider.name.clone()}</h3>
                    <span class="provider-category">{provider.category.label()}</span>
                </div>
                <Rating provider=provider.clone() />
            </div>

            <p class="provider-summary">{provider.summary.clone()}</p>

            <ul class="provider-features">
                {provider.features.iter().map(|feature| view! {
                    <li><Icon path=ICON_CHECK_CIRCLE size="16" />{feature.clone()}</li>
                }).collect::<Vec<_>>()}
            </ul>

            <div class="provider-facts">
                <div><span class="fact-label">"Starting at"</span>{provider.price.clone()}</div>
                <div><span class="fact-label">"Renews at"</span>{provider.renewal_price.clone()}</div>
                <div><span class="fact-label">"Uptime"</span>{provider.uptime.clone()}</div>
                <div><span class="fact-label">"Support"</span>{provider.support.clone()}</div>
            </div>

            <div class="pros-cons">
                <div class="pros">
                    <strong>"Pros"</strong>
                    <ul>
                        {provider.pros.iter().map(|pro| view! {
                            <li><Icon path=ICON_CHECK size="16" />{pro.clone()}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="cons">
                    <strong>"Cons"</strong>
                    <ul>
                        {provider.cons.iter().map(|con| view! {
                            <li><Icon path=ICON_MINUS size="16" />{con.clone()}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <a
                href=provider.website.clone()
                target="_blank"
                rel="noopener noreferrer sponsored"
                class="btn btn-primary"
            >
                {visit_label}
            </a>
        </article>
    }
}

/// The detailed-reviews section; the first card is emphasized.
#[component]
pub fn ReviewsSection(providers: Vec<ProviderRecord>) -> impl IntoView {
    view! {
        <section id=axiomor_core::sections::REVIEWS class="section">
            <div class="container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Detailed Provider Reviews"</h2>
                    <p class="section-description">
                        "In-depth look at features, pricing, and performance."
                    </p>
                </div>
                <div class="review-list">
                    {providers.into_iter().enumerate().map(|(idx, provider)| view! {
                        <ProviderCard provider=provider featured={idx == 0} />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
