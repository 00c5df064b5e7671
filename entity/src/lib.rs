//! Database entity models for the configboard application.
//!
//! Entities are generated-style SeaORM models shared between the main crate,
//! the migration crate's schema helpers, and the test utilities.

pub mod guild_setting;

pub mod prelude;
