//! Request extractors shared by handlers.

pub mod extractors;
pub mod session;
