//! Test fixtures providing reusable JSON documents without database insertion.
//!
//! Fixtures build the canonical document shape of each entity collection as a
//! `serde_json::Value`. They seed in-memory stores directly and provide the default
//! bodies used by the factories in `crate::factory`.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let client = fixture::client::document("1", "Ana", "11999998888");
//! let appointment = fixture::appointment::document("5", "1", "2025-05-21");
//! ```

pub mod appointment;
pub mod client;
pub mod procedure;
pub mod transaction;
