use axiomor_core::sections;
use leptos::prelude::*;

#[component]
pub fn Hero(
    /// Pill above the title ("Updated for 2026")
    badge: String,
    site_name: String,
) -> impl IntoView {
    let compare_href = format!("#{}", sections::COMPARE_PROVIDERS);
    let description = format!(
        "{} tests and reviews the top domain registrars and web hosting companies \
         so you can build your online presence with confidence.",
        site_name
    );
    view! {
        <section id=sections::HERO class="hero">
            <div class="container">
                <div class="hero-badge">{badge}</div>
                <h1 class="hero-title">
                    "Best Domain & Hosting "
                    <br />
                    <span class="hero-title-accent">"Providers Compared"</span>
                </h1>
                <p class="hero-description">{description}</p>
                <div class="hero-actions">
                    <a href=compare_href class="btn btn-primary btn-lg">"Compare Now"</a>
                    <a href="/about" class="btn btn-secondary btn-lg">"How We Review"</a>
                </div>
            </div>
            <div class="hero-blob"></div>
        </section>
    }
}
