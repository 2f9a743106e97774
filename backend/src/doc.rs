//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers both function endpoints, the health probes and the
//! shared error schema. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::confirmation::{ConfirmationRequest, ConfirmationResponse};
use crate::inbound::http::export::ExportRequest;
use crate::inbound::http::schemas::ErrorSchema;

/// OpenAPI document for the order functions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order functions API",
        description = "Order confirmation e-mail and order line-item CSV export."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::confirmation::confirm_order,
        crate::inbound::http::export::export_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ConfirmationRequest, ConfirmationResponse, ExportRequest, ErrorSchema)),
    tags(
        (name = "functions", description = "Order notification and export functions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/functions/v1/confirmacao-pedido")]
    #[case("/functions/v1/exportar-csv")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn function_paths_are_post_only() {
        let doc = ApiDoc::openapi();
        for path in ["/functions/v1/confirmacao-pedido", "/functions/v1/exportar-csv"] {
            let item = doc.paths.paths.get(path).expect("path registered");
            assert!(item.post.is_some(), "{path} should be POST");
            assert!(item.get.is_none(), "{path} should not be GET");
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ErrorSchema"));
    }
}
