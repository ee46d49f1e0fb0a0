//! Reusable UI component modules.

pub mod nav_bar;
