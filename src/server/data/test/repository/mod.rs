//! Repository tests: legacy normalisation and entity-specific lookups.

use super::*;
use crate::server::data::store::{MemoryStore, SqliteStore};
use test_utils::{builder::TestBuilder, factory, fixture};

mod appointment;
mod client;
mod procedure;
mod transaction;
mod user;
