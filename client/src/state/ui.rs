//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation-only toggles out of the chat and contact models.
//! Nothing here survives a reload.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-level presentation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Label for the theme toggle, naming the mode it switches to.
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode { "☀️ Light" } else { "🌙 Dark" }
    }
}
