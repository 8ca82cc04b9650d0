//! Dark mode toggle.
//!
//! Applies or removes the `dark` class on the `<html>` element. The choice
//! lives only in `UiState` for the current page view; every load starts in
//! light mode. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and apply the new value to the document.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
