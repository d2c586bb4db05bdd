//! Page controllers.
//!
//! Each page follows the same shape: render its markup, run the session
//! gate once on mount, and wire form handlers that validate locally,
//! disable the submit control while a request is in flight, and surface
//! failures through the inline notice.

pub mod account;
pub mod login;
pub mod register;
