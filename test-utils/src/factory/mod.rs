//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults, reducing boilerplate in
//! tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let setting = factory::guild_setting::create_setting(&db, "500").await?;
//!
//! // Customize through the builder
//! let setting = factory::guild_setting::GuildSettingFactory::new(&db)
//!     .guild_id("500")
//!     .key("prefix")
//!     .value(serde_json::json!("?"))
//!     .build()
//!     .await?;
//! ```

pub mod guild_setting;
pub mod helpers;

pub use guild_setting::create_setting;
