//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer. The settings
//! service owns the full PATCH pipeline: resolve guild and member through
//! the Discord directory, run the ability check, stage the batch through the
//! settings store, persist it transactionally, and hand back the serialized
//! canonical settings.

pub mod ability;
pub mod discord;
pub mod settings;

#[cfg(test)]
mod test;
