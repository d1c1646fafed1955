//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, convert DTOs into validated
//! parameters, call the matching service and convert the result back into a DTO.
//! They hold no business rules of their own.

pub mod appointment;
pub mod auth;
pub mod client;
pub mod procedure;
pub mod report;
pub mod transaction;
