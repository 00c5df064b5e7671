//! The guild settings merge/diff pipeline.
//!
//! This module implements the in-memory half of the settings flow: a pure
//! deep-merge engine, a change tracker that records per-field pending edits,
//! a store that layers pending edits over last-known-good settings, and the
//! schema that fixes the set of known settings keys and their defaults.
//!
//! Nothing in here touches the database or Discord; the service layer feeds
//! these types and persists the results through the repository.

pub mod merge;
pub mod pending;
pub mod schema;
pub mod store;

#[cfg(test)]
mod test;
