//! SeaORM entities backing the SQLite document store.
//!
//! Every entity collection (clients, procedures, appointments, transactions and
//! users) lives in the single `record` table, keyed by `(collection, id)` with the
//! JSON document kept verbatim in `body`.

pub mod prelude;

pub mod record;
