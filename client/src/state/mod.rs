//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`config`, `chat`, `ui`) so pages depend on
//! small focused models. `App` wraps each in an `RwSignal` and provides it
//! as context.

pub mod chat;
pub mod config;
pub mod ui;
