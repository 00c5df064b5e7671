//! Database repository layer.
//!
//! Repositories own all SeaORM queries and convert entity rows into the
//! plain settings maps the service layer works with. No business logic or
//! authorization lives here.

pub mod settings;

#[cfg(test)]
mod test;
