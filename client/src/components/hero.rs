//! Headline banner with the primary call to action.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use super::contact_form::CONTACT_SECTION_ID;

/// In-page link to the contact section.
pub fn contact_anchor() -> String {
    format!("#{CONTACT_SECTION_ID}")
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="section__inner">
                <h1 class="hero__title fade-in">"Sell Unused Software Licenses in Minutes"</h1>
                <p class="hero__subtitle fade-in anim-delay-2">
                    "Maximize your ROI by reselling unused software licenses with SoftSell."
                </p>
                <a class="hero__cta pop-in" href=contact_anchor()>
                    "Sell My Licenses"
                </a>
            </div>
        </section>
    }
}
