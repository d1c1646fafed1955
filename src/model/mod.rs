//! Wire-level DTOs shared by every API endpoint.
//!
//! These types describe the JSON bodies accepted and returned by the HTTP layer. Server
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod appointment;
pub mod client;
pub mod lenient;
pub mod procedure;
pub mod report;
pub mod transaction;
pub mod user;
