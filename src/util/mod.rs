//! Small shared helpers.

pub mod validate;
