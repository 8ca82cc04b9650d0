//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the exchange logic so route handlers can stay focused
//! on protocol translation.

pub mod chat;
