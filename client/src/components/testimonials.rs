//! Customer quotes.

use leptos::prelude::*;

use super::how_it_works::staggered;

/// A fixed customer quote.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Tarun Singh",
        role: "IT Manager",
        company: "HCL",
        quote: "SoftSell helped us recover thousands in unused licenses!",
    },
    Testimonial {
        name: "Suhail",
        role: "Project Lead",
        company: "Nvidia",
        quote: "Quick, easy, and hassle-free. Highly recommend.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section--tinted">
            <div class="section__inner">
                <h2 class="section__title">"Customer Testimonials"</h2>
                <div class="card-grid card-grid--2">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <figure class=staggered("card testimonial pop-in", i)>
                                    <blockquote class="testimonial__quote">{format!("“{}”", t.quote)}</blockquote>
                                    <figcaption>
                                        <p class="testimonial__name">{t.name}</p>
                                        <p class="testimonial__role">{format!("{}, {}", t.role, t.company)}</p>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
