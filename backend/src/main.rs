//! Order functions entry-point: loads configuration, wires adapters into the
//! domain services and serves both functions plus health probes.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use order_functions::domain::{OrderConfirmationService, OrderExportService};
use order_functions::inbound::http::health::HealthState;
use order_functions::inbound::http::state::HttpState;
use order_functions::outbound::resend::ResendEmailSender;
use order_functions::outbound::supabase::SupabaseLineItemsQuery;
use order_functions::settings::{AppConfig, secret_fingerprint};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load().map_err(std::io::Error::other)?;
    info!(
        resend_key_fingerprint = %secret_fingerprint(&config.resend.api_key),
        supabase_key_fingerprint = %secret_fingerprint(&config.supabase.anon_key),
        resend_endpoint = %config.resend.api_url,
        supabase_url = %config.supabase.url,
        "configuration loaded"
    );

    let http_state = build_http_state(config.resend, config.supabase, config.http.outbound_timeout)?;
    let server_config = ServerConfig::new(config.http.bind_addr, http_state);
    #[cfg(feature = "metrics")]
    let server_config = server_config.with_metrics(make_metrics()?);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, server_config)?;
    info!(bind_addr = %config.http.bind_addr, "order functions listening");
    server.await
}

fn build_http_state(
    resend: order_functions::settings::ResendConfig,
    supabase: order_functions::settings::SupabaseConfig,
    timeout: Option<std::time::Duration>,
) -> std::io::Result<HttpState> {
    let sender = ResendEmailSender::new(resend.api_url, resend.api_key, timeout)
        .map_err(|e| std::io::Error::other(format!("e-mail client construction failed: {e}")))?;
    let line_items = SupabaseLineItemsQuery::new(supabase.url, supabase.anon_key, timeout)
        .map_err(|e| std::io::Error::other(format!("data store client construction failed: {e}")))?;

    Ok(HttpState::new(
        Arc::new(OrderConfirmationService::new(Arc::new(sender), resend.sender)),
        Arc::new(OrderExportService::new(Arc::new(line_items))),
    ))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("order_functions")
        .endpoint("/metrics")
        .registry(prometheus::Registry::new())
        .build()
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))
}
