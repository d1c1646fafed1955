//! Procedure document fixtures.

use serde_json::{json, Value};

/// Builds a procedure document with the given id, name and price.
pub fn document(id: &str, nome: &str, preco: f64) -> Value {
    json!({
        "id": id,
        "nome": nome,
        "preco": preco,
    })
}
