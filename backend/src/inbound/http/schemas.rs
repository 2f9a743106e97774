//! OpenAPI schema definitions shared by both functions.

use utoipa::ToSchema;

/// JSON error payload returned by both functions.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable failure message.
    #[schema(example = "O 'pedido_id' é obrigatório.")]
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn error_schema_exposes_error_field() {
        let schema_json = serde_json::to_string(&ErrorSchema::schema()).expect("schema serialises");
        assert_eq!(ErrorSchema::name(), "ErrorSchema");
        assert!(schema_json.contains("\"error\""));
    }
}
