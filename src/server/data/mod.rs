//! Data access layer for all domain entities.
//!
//! `store` holds the storage backends behind the `RecordStore` trait. The repositories
//! in this module sit on top of it: they normalise legacy field names, deserialize
//! documents into domain models, and expose entity-specific lookups. Services never
//! touch raw documents.

pub mod appointment;
pub mod client;
pub mod procedure;
pub mod repository;
pub mod store;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
