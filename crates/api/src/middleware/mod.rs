//! Request middleware.

pub mod session;

pub use session::{CurrentUser, session_gate};
