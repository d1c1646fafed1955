//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are read from normalised
//! store documents at the repository boundary and transformed to DTOs at the controller
//! boundary. Parameter and patch types serialize into the canonical document shape that
//! repositories hand to the record store.

pub mod appointment;
pub mod client;
pub mod procedure;
pub mod report;
pub mod transaction;
pub mod user;
