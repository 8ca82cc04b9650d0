//! Reusable UI components for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section of the page is one component. Static sections carry their
//! copy as `const` tables; interactive ones read state from the contexts
//! provided by `App`.

pub mod chat_widget;
pub mod contact_form;
pub mod hero;
pub mod how_it_works;
pub mod site_footer;
pub mod testimonials;
pub mod theme_toggle;
pub mod why_choose_us;
