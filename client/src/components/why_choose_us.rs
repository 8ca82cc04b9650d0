//! Value proposition grid.

use leptos::prelude::*;

use super::how_it_works::staggered;

pub const REASONS: [(&str, &str); 4] = [
    ("🔒", "Secure Transactions"),
    ("⚡", "Fast Payouts"),
    ("💼", "Business-Friendly"),
    ("📞", "Dedicated Support"),
];

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__inner">
                <h2 class="section__title">"Why Choose Us"</h2>
                <div class="card-grid card-grid--4">
                    {REASONS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, title))| {
                            view! {
                                <div class=staggered("card card--muted fade-in", i)>
                                    <div class="card__icon">{*icon}</div>
                                    <h4 class="card__title">{*title}</h4>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
