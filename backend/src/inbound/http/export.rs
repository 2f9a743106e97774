//! Order-export HTTP handler.
//!
//! ```text
//! POST /functions/v1/exportar-csv
//! ```
//!
//! The caller's `Authorization` header is forwarded untouched; the data store
//! decides which line items the caller may read.

use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{CallerAuthorization, Error, OrderId};
use crate::inbound::http::error::ExportResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_field_error, missing_field_error, parse_json_body, parse_order_id,
};

const ORDER_ID_FIELD: FieldName = FieldName::new("pedido_id");
const AUTHORIZATION_FIELD: FieldName = FieldName::new("Authorization");

/// Content type of the export download.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Request payload for the CSV export.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ExportRequest {
    /// Order identifier, as a string or a number.
    #[serde(rename = "pedido_id", alias = "orderId")]
    #[schema(value_type = Option<String>, example = "7")]
    pub order_id: Option<Value>,
}

/// Falsy ids (`0`, `false`) count as missing. The id ends up in a response
/// header, so control characters are refused up front.
fn export_order_id(value: Option<Value>) -> Result<OrderId, Error> {
    let value = value.filter(|raw| !is_falsy_scalar(raw));
    let order_id = parse_order_id(value, ORDER_ID_FIELD)?;
    if order_id.as_str().chars().any(char::is_control) {
        return Err(invalid_field_error(
            ORDER_ID_FIELD,
            "caracteres de controle não são permitidos",
        ));
    }
    Ok(order_id)
}

fn is_falsy_scalar(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        _ => false,
    }
}

fn attachment(file_name: String) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(file_name)],
    }
}

fn caller_authorization(req: &HttpRequest) -> Result<CallerAuthorization, Error> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| CallerAuthorization::new(value))
        .ok_or_else(|| missing_field_error(AUTHORIZATION_FIELD))
}

/// Export an order's line items as a CSV download.
#[utoipa::path(
    post,
    path = "/functions/v1/exportar-csv",
    request_body = ExportRequest,
    params(
        ("Authorization" = String, Header, description = "Caller credentials forwarded to the data store")
    ),
    responses(
        (
            status = 200,
            description = "CSV export of the order's line items",
            content_type = "text/csv",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"pedido_<id>.csv\"")),
            body = String
        ),
        (status = 400, description = "Invalid request or data-store failure", body = ErrorSchema),
        (status = 404, description = "Order not found or has no items", content_type = "text/plain", body = String),
        (status = 405, description = "Method not allowed; only POST is supported", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "exportOrderCsv"
)]
pub async fn export_order(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ExportResult<HttpResponse> {
    let payload: ExportRequest = parse_json_body(&body)?;
    let order_id = export_order_id(payload.order_id)?;
    let authorization = caller_authorization(&req)?;

    let export = state.export.export(order_id, authorization).await?;
    Ok(HttpResponse::Ok()
        .content_type(CSV_CONTENT_TYPE)
        .insert_header(attachment(export.file_name()))
        .body(export.document().render()))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
