//! Request middleware: session wrappers and the authentication guard.

pub mod auth;
pub mod session;
