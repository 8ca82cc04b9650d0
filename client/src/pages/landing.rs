//! Single-page marketing site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stacks the landing sections in reading order and floats the chat widget
//! above them. Every section reads its own context; the page holds no state.

use leptos::prelude::*;

use crate::components::{
    chat_widget::ChatWidget, contact_form::ContactForm, hero::Hero, how_it_works::HowItWorks,
    site_footer::SiteFooter, testimonials::Testimonials, theme_toggle::ThemeToggle,
    why_choose_us::WhyChooseUs,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <ThemeToggle/>
            </header>
            <main>
                <Hero/>
                <HowItWorks/>
                <WhyChooseUs/>
                <Testimonials/>
                <ContactForm/>
            </main>
            <SiteFooter/>
            <ChatWidget/>
        </div>
    }
}
