//! Configboard Test Utils
//!
//! Shared testing utilities for the guild settings dashboard. Provides a
//! builder pattern for creating test contexts with in-memory SQLite
//! databases, entity factories for seeding settings rows, and fixtures that
//! build Serenity API objects from JSON the way Discord would return them.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::TestBuilder;
//! use entity::prelude::GuildSetting;
//!
//! #[tokio::test]
//! async fn test_settings_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSetting)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
