//! Transaction document fixtures.

use serde_json::{json, Value};

/// Builds a manual transaction document of the given type, amount and date.
pub fn document(id: &str, tipo: &str, valor: f64, data: &str) -> Value {
    json!({
        "id": id,
        "tipo": tipo,
        "descricao": format!("{} {}", tipo, id),
        "valor": valor,
        "data": data,
        "origem": "manual",
        "origemId": null,
        "categoria": "Outros",
    })
}

/// Builds the revenue transaction generated when appointment `appointment_id` was confirmed.
pub fn appointment_revenue(id: &str, appointment_id: &str, valor: f64, data: &str) -> Value {
    json!({
        "id": id,
        "tipo": "receita",
        "descricao": format!("Agendamento {}", appointment_id),
        "valor": valor,
        "data": data,
        "origem": "agendamento",
        "origemId": appointment_id,
        "categoria": "Agendamento",
    })
}
