//! Three-step explainer.

#[cfg(test)]
#[path = "how_it_works_test.rs"]
mod how_it_works_test;

use leptos::prelude::*;

/// `(icon, title)` for each step, in order.
pub const STEPS: [(&str, &str); 3] =
    [("📤", "Upload License"), ("💰", "Get Valuation"), ("💳", "Get Paid")];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section section--tinted">
            <div class="section__inner">
                <h2 class="section__title">"How It Works"</h2>
                <div class="card-grid card-grid--3">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, title))| {
                            view! {
                                <div class=staggered("card fade-in", i)>
                                    <div class="card__icon card__icon--large">{*icon}</div>
                                    <h3 class="card__title">{*title}</h3>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// `base` classes plus the entrance delay for the `i`-th card in a row.
pub(crate) fn staggered(base: &str, i: usize) -> String {
    format!("{base} anim-delay-{}", i.min(3))
}
