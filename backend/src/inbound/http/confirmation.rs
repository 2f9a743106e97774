//! Order-confirmation HTTP handler.
//!
//! ```text
//! POST /functions/v1/confirmacao-pedido
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{CustomerEmail, Error, OrderConfirmation};
use crate::inbound::http::error::ConfirmationResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_field_error, parse_json_body, parse_order_id, require,
};

const CUSTOMER_EMAIL_FIELD: FieldName = FieldName::new("emailCliente");
const CUSTOMER_NAME_FIELD: FieldName = FieldName::new("nomeCliente");
const ORDER_ID_FIELD: FieldName = FieldName::new("pedidoId");

/// Request payload for the confirmation e-mail.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ConfirmationRequest {
    #[serde(rename = "emailCliente", alias = "customerEmail")]
    #[schema(example = "ana@example.com")]
    pub customer_email: Option<String>,
    #[serde(rename = "nomeCliente", alias = "customerName")]
    #[schema(example = "Ana")]
    pub customer_name: Option<String>,
    /// Order identifier, as a string or a number.
    #[serde(rename = "pedidoId", alias = "orderId")]
    #[schema(value_type = Option<String>, example = "42")]
    pub order_id: Option<Value>,
}

/// Response payload once the provider accepted the e-mail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmationResponse {
    #[schema(example = "E-mail de confirmação enviado.")]
    pub message: String,
}

fn parse_confirmation_request(payload: ConfirmationRequest) -> Result<OrderConfirmation, Error> {
    let raw_email = require(payload.customer_email, CUSTOMER_EMAIL_FIELD)?;
    let customer_name = require(payload.customer_name, CUSTOMER_NAME_FIELD)?;
    let order_id = parse_order_id(payload.order_id, ORDER_ID_FIELD)?;
    let customer_email =
        CustomerEmail::new(raw_email).map_err(|err| invalid_field_error(CUSTOMER_EMAIL_FIELD, err))?;

    Ok(OrderConfirmation {
        customer_email,
        customer_name,
        order_id,
    })
}

/// Send the order-confirmation e-mail to the customer.
#[utoipa::path(
    post,
    path = "/functions/v1/confirmacao-pedido",
    request_body = ConfirmationRequest,
    responses(
        (status = 200, description = "E-mail accepted by the provider", body = ConfirmationResponse),
        (status = 405, description = "Method not allowed; only POST is supported", body = ErrorSchema),
        (status = 500, description = "Invalid request or delivery failure", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "confirmOrder"
)]
pub async fn confirm_order(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ConfirmationResult<HttpResponse> {
    let payload: ConfirmationRequest = parse_json_body(&body)?;
    let request = parse_confirmation_request(payload)?;
    let receipt = state.confirmation.confirm(request).await?;
    Ok(HttpResponse::Ok().json(ConfirmationResponse {
        message: receipt.message().to_owned(),
    }))
}

#[cfg(test)]
#[path = "confirmation_tests.rs"]
mod tests;
