//! Wire rows returned by PostgREST for `itens_pedido`.

use serde::Deserialize;

use crate::domain::Amount;
use crate::domain::ports::{OrderLineItem, ProductSummary};

/// Embedded `produtos` relation.
#[derive(Debug, Deserialize)]
pub(super) struct ProductDto {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// One `itens_pedido` row with its product embedded.
#[derive(Debug, Deserialize)]
pub(super) struct LineItemRowDto {
    pub quantidade: Amount,
    pub preco_unitario: Amount,
    #[serde(default)]
    pub produtos: Option<ProductDto>,
}

impl From<LineItemRowDto> for OrderLineItem {
    fn from(row: LineItemRowDto) -> Self {
        Self {
            quantity: row.quantidade,
            unit_price: row.preco_unitario,
            product: row.produtos.map(|product| ProductSummary {
                name: product.nome,
                description: product.descricao,
            }),
        }
    }
}
