//! Page-local state models.
//!
//! DESIGN
//! ======
//! There is deliberately no global "current user" store: the fetched
//! user record is passed explicitly through the render chain of the
//! page load that validated it. The only state model here is the
//! inline notice.

pub mod notice;
