//! Fixed-position light/dark switch.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = ui.get().dark_mode;
                let next = crate::util::dark_mode::toggle(current);
                ui.update(|u| u.dark_mode = next);
            }
            title="Toggle dark mode"
        >
            {move || ui.get().theme_toggle_label()}
        </button>
    }
}
