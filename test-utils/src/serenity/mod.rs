//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's REST API would return. Use them when testing
//! code that converts Serenity types at the REST collaborator boundary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{guild::create_test_partial_guild, member::create_test_member};
//!
//! // Guild 500 owned by user 100, with an @everyone role and an admin role
//! let guild = create_test_partial_guild(500, 100, &[(500, 0), (42, 32)]);
//! let member = create_test_member(500, 200, &[42]);
//! ```

pub mod guild;
pub mod member;

pub use guild::create_test_partial_guild;
pub use member::create_test_member;
