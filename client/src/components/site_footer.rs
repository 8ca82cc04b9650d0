use leptos::prelude::*;

pub const COPYRIGHT: &str = "© 2025 SoftSell. All rights reserved.";

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! { <footer class="site-footer">{COPYRIGHT}</footer> }
}
