//! Side-by-side comparison table

use axiomor_core::sections;
use axiomor_core::types::ProviderRecord;
use leptos::prelude::*;

use super::Rating;

/// Comparison section wrapping [`ComparisonTable`].
///
/// `top_picks` counts the leading rows that get the top-pick treatment.
#[component]
pub fn CompareSection(providers: Vec<ProviderRecord>, top_picks: usize) -> impl IntoView {
    let heading = format!("Top {} Providers", top_picks.min(providers.len()));
    view! {
        <section id=sections::COMPARE_PROVIDERS class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{heading}</h2>
                    <p class="section-description">
                        "Quick side-by-side comparison of our top rated choices."
                    </p>
                </div>
                <ComparisonTable providers=providers top_picks=top_picks />
            </div>
        </section>
    }
}

/// One row per provider; the first `top_picks` rows are emphasized.
#[component]
pub fn ComparisonTable(
    providers: Vec<ProviderRecord>,
    #[prop(default = 0)]
    top_picks: usize,
) -> impl IntoView {
    view! {
        <div class="compare-table-wrap">
            <table class="compare-table">
                <thead>
                    <tr>
                        <th>"Provider"</th>
                        <th>"Type"</th>
                        <th>"Rating"</th>
                        <th>"Starting Price"</th>
                        <th>"Renews At"</th>
                        <th>"Best For"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {providers.into_iter().enumerate().map(|(idx, provider)| {
                        let top = idx < top_picks;
                        let row_class = if top { "top-pick" } else { "" };
                        let marker = top.then(|| view! { <span class="top-pick-label">"Top Pick"</span> });
                        view! {
                            <tr class=row_class>
                                <td>
                                    <span class="compare-rank">{idx + 1}</span>
                                    <span class="compare-name">{provider.name.clone()}</span>
                                    {marker}
                                </td>
                                <td>{provider.category.label()}</td>
                                <td><Rating provider=provider.clone() /></td>
                                <td>{provider.price.clone()}</td>
                                <td>{provider.renewal_price.clone()}</td>
                                <td>{provider.best_for.clone()}</td>
                                <td>
                                    <a
                                        href=provider.website.clone()
                                        target="_blank"
                                        rel="noopener noreferrer sponsored"
                                        class="btn btn-primary"
                                    >
                                        "Visit Site"
                                    </a>
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
