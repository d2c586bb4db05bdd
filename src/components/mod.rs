//! Reusable view components.

pub mod dialogs;
pub mod notice;
