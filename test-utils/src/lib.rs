//! Salonbook Test Utils
//!
//! Shared testing utilities for the salonbook backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases, JSON document fixtures for every
//! entity collection, and factories that insert those documents into the `record` table.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_client_documents() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_record_table().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_client(db, "Ana", "11999998888").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
