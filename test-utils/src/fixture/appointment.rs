//! Appointment document fixtures.
//!
//! The default appointment is a pending 10:00 booking for a single "Corte" procedure
//! priced at 50. Use `entity_builder()` to adjust individual fields.

use serde_json::{json, Value};

/// Builds a pending appointment document for `client_id` on `date`.
pub fn document(id: &str, client_id: &str, date: &str) -> Value {
    entity_builder(id, client_id).date(date).build()
}

/// Starts a builder for an appointment document with default values.
pub fn entity_builder(id: &str, client_id: &str) -> AppointmentDocumentBuilder {
    AppointmentDocumentBuilder {
        id: id.to_string(),
        client_id: client_id.to_string(),
        procedures: vec![json!({ "id": "1", "nome": "Corte", "valor": 50.0 })],
        date: "2025-05-21".to_string(),
        time: "10:00".to_string(),
        status: "pendente".to_string(),
        total_value: json!(50.0),
    }
}

/// Builder for appointment documents.
pub struct AppointmentDocumentBuilder {
    id: String,
    client_id: String,
    procedures: Vec<Value>,
    date: String,
    time: String,
    status: String,
    total_value: Value,
}

impl AppointmentDocumentBuilder {
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Replaces the procedure snapshots with `(id, nome, valor)` entries.
    pub fn procedures(mut self, procedures: &[(&str, &str, f64)]) -> Self {
        self.procedures = procedures
            .iter()
            .map(|(id, nome, valor)| json!({ "id": id, "nome": nome, "valor": valor }))
            .collect();
        self
    }

    /// Sets the stored total, which may be any JSON value (legacy data stores strings).
    pub fn total_value(mut self, total_value: Value) -> Self {
        self.total_value = total_value;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "clientId": self.client_id,
            "procedimentos": self.procedures,
            "data": self.date,
            "hora": self.time,
            "status": self.status,
            "valorTotal": self.total_value,
        })
    }
}
