//! Reqwest-backed PostgREST line-item query.
//!
//! Owns transport details only: URL construction, credential headers, HTTP
//! error mapping and JSON decoding into domain line items.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::LineItemRowDto;
use crate::domain::ports::{OrderLineItem, OrderLineItemsQuery, OrderLineItemsQueryError};
use crate::domain::{CallerAuthorization, OrderId};
use crate::outbound::http_body::error_message;

const LINE_ITEMS_TABLE: &str = "itens_pedido";
const LINE_ITEMS_SELECT: &str = "quantidade,preco_unitario,produtos(nome,descricao)";
const ORDER_FILTER_COLUMN: &str = "pedido_id";

/// Errors raised while constructing [`SupabaseLineItemsQuery`].
#[derive(Debug, thiserror::Error)]
pub enum SupabaseClientError {
    /// The project URL cannot carry a REST path.
    #[error("project URL cannot be used as a base: {url}")]
    InvalidProjectUrl { url: String },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Line-item query reading `itens_pedido` through PostgREST.
pub struct SupabaseLineItemsQuery {
    client: Client,
    table_url: Url,
    anon_key: Zeroizing<String>,
}

impl SupabaseLineItemsQuery {
    /// Build a query against the project at `project_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseClientError`] when the URL cannot carry a path or the
    /// reqwest client cannot be constructed.
    pub fn new(
        project_url: Url,
        anon_key: Zeroizing<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SupabaseClientError> {
        let table_url = table_url(project_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            table_url,
            anon_key,
        })
    }

    fn request_url(&self, order_id: &OrderId) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("select", LINE_ITEMS_SELECT)
            .append_pair(ORDER_FILTER_COLUMN, &format!("eq.{order_id}"));
        url
    }
}

fn table_url(project_url: Url) -> Result<Url, SupabaseClientError> {
    if project_url.cannot_be_a_base() {
        return Err(SupabaseClientError::InvalidProjectUrl {
            url: project_url.to_string(),
        });
    }
    let mut url = project_url;
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["rest", "v1", LINE_ITEMS_TABLE]);
    }
    Ok(url)
}

#[async_trait]
impl OrderLineItemsQuery for SupabaseLineItemsQuery {
    async fn line_items(
        &self,
        order_id: &OrderId,
        authorization: &CallerAuthorization,
    ) -> Result<Vec<OrderLineItem>, OrderLineItemsQueryError> {
        let response = self
            .client
            .get(self.request_url(order_id))
            .header("apikey", self.anon_key.as_str())
            .header(reqwest::header::AUTHORIZATION, authorization.as_header_value())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let items = parse_line_items(body.as_ref())?;
        debug!(order_id = %order_id, rows = items.len(), "line items fetched");
        Ok(items)
    }
}

fn parse_line_items(body: &[u8]) -> Result<Vec<OrderLineItem>, OrderLineItemsQueryError> {
    let rows: Vec<LineItemRowDto> = serde_json::from_slice(body).map_err(|error| {
        OrderLineItemsQueryError::decode(format!("invalid line item payload: {error}"))
    })?;
    Ok(rows.into_iter().map(OrderLineItem::from).collect())
}

fn map_transport_error(error: reqwest::Error) -> OrderLineItemsQueryError {
    OrderLineItemsQueryError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> OrderLineItemsQueryError {
    OrderLineItemsQueryError::query(error_message(status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network PostgREST helpers.

    use super::*;
    use rstest::rstest;

    fn query(project_url: &str) -> SupabaseLineItemsQuery {
        SupabaseLineItemsQuery::new(
            Url::parse(project_url).expect("valid url"),
            Zeroizing::new("anon".to_owned()),
            None,
        )
        .expect("query builds")
    }

    #[rstest]
    #[case("https://abc.supabase.co")]
    #[case("https://abc.supabase.co/")]
    #[case("https://abc.supabase.co/?x=1#frag")]
    fn table_url_appends_rest_path(#[case] project_url: &str) {
        let url = table_url(Url::parse(project_url).expect("valid url")).expect("base url");
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/itens_pedido");
    }

    #[test]
    fn table_url_keeps_project_path_prefix() {
        let url = table_url(Url::parse("http://localhost:54321/proxy/").expect("valid url"))
            .expect("base url");
        assert_eq!(url.path(), "/proxy/rest/v1/itens_pedido");
    }

    #[test]
    fn request_url_selects_join_and_filters_order() {
        let url = query("https://abc.supabase.co").request_url(&OrderId::new("7").expect("id"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("select".to_owned(), LINE_ITEMS_SELECT.to_owned()),
                ("pedido_id".to_owned(), "eq.7".to_owned()),
            ]
        );
    }

    #[test]
    fn non_base_urls_are_rejected() {
        let result = table_url(Url::parse("mailto:ops@example.com").expect("valid url"));
        assert!(matches!(
            result,
            Err(SupabaseClientError::InvalidProjectUrl { .. })
        ));
    }

    #[test]
    fn status_errors_surface_postgrest_message() {
        let err = map_status_error(
            StatusCode::UNAUTHORIZED,
            br#"{"code":"PGRST301","message":"JWT expired"}"#,
        );
        assert_eq!(err, OrderLineItemsQueryError::query("JWT expired"));
    }

    #[rstest]
    #[case(b"{}".as_slice())]
    #[case(b"[{\"quantidade\":\"two\"}]".as_slice())]
    #[case(b"not json".as_slice())]
    fn undecodable_payloads_are_decode_errors(#[case] body: &[u8]) {
        assert!(matches!(
            parse_line_items(body),
            Err(OrderLineItemsQueryError::Decode { .. })
        ));
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert_eq!(parse_line_items(b"[]").expect("decodes"), Vec::new());
    }
}
