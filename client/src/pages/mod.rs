//! Top-level routed pages.

pub mod landing;
