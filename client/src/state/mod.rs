//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by feature (`chat`, `contact`, `ui`). The root `App`
//! provides each as an `RwSignal` context; components read snapshots and
//! write through `update`.

pub mod chat;
pub mod contact;
pub mod ui;
