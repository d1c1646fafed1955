//! Client document fixtures.

use serde_json::{json, Value};

/// Builds a client document with the given id, name and phone.
pub fn document(id: &str, name: &str, phone: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "phone": phone,
    })
}

/// Builds a client document that also carries an email address.
pub fn document_with_email(id: &str, name: &str, phone: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "phone": phone,
        "email": email,
    })
}
