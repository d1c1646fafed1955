//! Factory methods for inserting test documents into the `record` table.
//!
//! Factories wrap the JSON fixtures from `crate::fixture` and persist them as rows of
//! the SQLite document store, so repository and store tests can start from a known
//! database state.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_client(&db, "Ana", "11999998888").await?;
//!
//! let record = factory::record::RecordFactory::new(&db, "procedures")
//!     .id("7")
//!     .body(fixture::procedure::document("7", "Escova", 40.0))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `record` - Insert arbitrary documents into any collection
//! - `helpers` - Id generation and entity-specific shortcuts

pub mod helpers;
pub mod record;

pub use helpers::{create_appointment, create_client, create_procedure, create_transaction};
pub use record::create_record;
