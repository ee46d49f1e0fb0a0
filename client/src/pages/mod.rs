//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads shared state from context and is mounted through the
//! route table in `crate::routes`.

pub mod chat;
pub mod home;
pub mod settings;
