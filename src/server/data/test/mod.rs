use crate::server::data::store::{Collection, Document, RecordStore};
use serde_json::{json, Value};

mod file;
mod repository;
mod store;

/// Converts a JSON object literal into a store document.
fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
