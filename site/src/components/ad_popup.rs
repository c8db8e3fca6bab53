//! Promotional overlay.
//!
//! Purely presentational: whether it is mounted, and what the three
//! controls do, is decided by the caller (the page view in the browser
//! app, a static flag in the renderer).

use axiomor_core::config::PromoOffer;
use leptos::prelude::*;

use super::{Icon, ICON_X};

#[component]
pub fn AdPopup(
    offer: PromoOffer,
    /// Close icon
    on_close: Callback<()>,
    /// "No Thanks"
    on_decline: Callback<()>,
    /// Either offer link (image or CTA); they open in a new tab
    on_offer: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="popup-backdrop" role="dialog" aria-modal="true" aria-labelledby="popup-title">
            <div class="popup">
                <button
                    class="popup-close"
                    aria-label="Close popup"
                    on:click=move |_| on_close.run(())
                >
                    <Icon path=ICON_X size="20" />
                </button>

                <a
                    href=offer.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="popup-media"
                    on:click=move |_| on_offer.run(())
                >
                    <img src=offer.image.clone() alt=offer.image_alt.clone() />
                </a>

                <div class="popup-body">
                    <h3 id="popup-title" class="popup-title">{offer.title.clone()}</h3>
                    <p class="popup-text">{offer.description.clone()}</p>
                    <div class="popup-actions">
                        <a
                            href=offer.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                            on:click=move |_| on_offer.run(())
                        >
                            {offer.cta_label.clone()}
                        </a>
                        <button class="btn btn-outline" on:click=move |_| on_decline.run(())>
                            {offer.decline_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
