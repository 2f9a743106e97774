//! HTTP inbound adapter exposing the two functions.
//!
//! ```text
//! POST /functions/v1/confirmacao-pedido
//! POST /functions/v1/exportar-csv
//! ```
//!
//! Any other method on either path is answered with 405 under that
//! function's own error policy.

pub mod confirmation;
pub mod error;
pub mod export;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

use actix_web::{Scope, web};

use self::error::{ConfirmationPolicy, ExportPolicy, method_not_allowed};

/// Path prefix shared by the functions.
pub const FUNCTIONS_PREFIX: &str = "/functions/v1";
/// Order-confirmation route, relative to [`FUNCTIONS_PREFIX`].
pub const CONFIRMATION_ROUTE: &str = "/confirmacao-pedido";
/// Order-export route, relative to [`FUNCTIONS_PREFIX`].
pub const EXPORT_ROUTE: &str = "/exportar-csv";

/// Build the scope registering both functions.
///
/// Handlers expect [`state::HttpState`] in app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use order_functions::inbound::http::functions_scope;
///
/// let _app = App::new().service(functions_scope());
/// ```
pub fn functions_scope() -> Scope {
    web::scope(FUNCTIONS_PREFIX)
        .service(
            web::resource(CONFIRMATION_ROUTE)
                .route(web::post().to(confirmation::confirm_order))
                .default_service(web::to(method_not_allowed::<ConfirmationPolicy>)),
        )
        .service(
            web::resource(EXPORT_ROUTE)
                .route(web::post().to(export::export_order))
                .default_service(web::to(method_not_allowed::<ExportPolicy>)),
        )
}
