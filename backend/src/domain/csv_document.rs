//! CSV rendering for order exports.
//!
//! Every field is written as a JSON literal: strings are quoted with JSON
//! escaping, numbers are bare, absent text is `null`. Commas and quotes inside
//! product text therefore never break the column layout.

use serde_json::Value;

use super::Amount;

/// Column names, in output order.
pub const EXPORT_HEADER: [&str; 5] = [
    "productName",
    "productDescription",
    "quantity",
    "unitPrice",
    "subtotal",
];

/// One flattened line item of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// Product name from the joined product record.
    pub product_name: Option<String>,
    /// Product description from the joined product record.
    pub product_description: Option<String>,
    /// Units ordered.
    pub quantity: Amount,
    /// Price per unit.
    pub unit_price: Amount,
    /// `quantity × unit_price`, computed at export time.
    pub subtotal: Amount,
}

impl ExportRow {
    fn encoded_fields(&self) -> [String; 5] {
        [
            encode_text(self.product_name.as_deref()),
            encode_text(self.product_description.as_deref()),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.subtotal.to_string(),
        ]
    }
}

/// Returned when a document is requested for zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a CSV export needs at least one row")]
pub struct EmptyExportError;

/// Non-empty sequence of export rows.
///
/// # Examples
/// ```
/// use order_functions::domain::{Amount, CsvDocument, ExportRow};
///
/// let row = ExportRow {
///     product_name: Some("X".to_owned()),
///     product_description: Some("Y".to_owned()),
///     quantity: Amount::from(2),
///     unit_price: Amount::from(10),
///     subtotal: Amount::from(20),
/// };
/// let document = CsvDocument::try_from_rows(vec![row]).expect("one row");
/// assert_eq!(
///     document.render(),
///     "productName,productDescription,quantity,unitPrice,subtotal\n\"X\",\"Y\",2,10,20"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    rows: Vec<ExportRow>,
}

impl CsvDocument {
    /// Build a document from at least one row.
    ///
    /// # Errors
    /// Returns [`EmptyExportError`] when `rows` is empty.
    pub fn try_from_rows(rows: Vec<ExportRow>) -> Result<Self, EmptyExportError> {
        if rows.is_empty() {
            return Err(EmptyExportError);
        }
        Ok(Self { rows })
    }

    /// Rows in output order.
    #[must_use]
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Render the header line followed by one line per row, joined by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        std::iter::once(EXPORT_HEADER.join(","))
            .chain(self.rows.iter().map(|row| row.encoded_fields().join(",")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn encode_text(value: Option<&str>) -> String {
    value.map_or(Value::Null, |text| Value::String(text.to_owned())).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(name: &str, description: &str, quantity: i64, unit_price: i64) -> ExportRow {
        ExportRow {
            product_name: Some(name.to_owned()),
            product_description: Some(description.to_owned()),
            quantity: Amount::from(quantity),
            unit_price: Amount::from(unit_price),
            subtotal: Amount::from(quantity * unit_price),
        }
    }

    /// Split one rendered line back into decoded JSON values.
    ///
    /// Commas only separate fields outside JSON string literals.
    fn decode_line(line: &str) -> Vec<Value> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_string = false;
        let mut escaped = false;
        for ch in line.chars() {
            if in_string {
                current.push(ch);
                match (escaped, ch) {
                    (true, _) => escaped = false,
                    (false, '\\') => escaped = true,
                    (false, '"') => in_string = false,
                    _ => {}
                }
                continue;
            }
            match ch {
                ',' => fields.push(std::mem::take(&mut current)),
                '"' => {
                    in_string = true;
                    current.push(ch);
                }
                _ => current.push(ch),
            }
        }
        fields.push(current);
        fields
            .iter()
            .map(|field| serde_json::from_str(field).expect("field is a JSON literal"))
            .collect()
    }

    #[test]
    fn empty_row_set_is_rejected() {
        assert_eq!(CsvDocument::try_from_rows(Vec::new()), Err(EmptyExportError));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(12)]
    fn renders_header_plus_one_line_per_row(#[case] count: i64) {
        let rows = (1..=count).map(|i| row("p", "d", i, 3)).collect();
        let rendered = CsvDocument::try_from_rows(rows).expect("rows").render();
        let lines: Vec<_> = rendered.split('\n').collect();

        assert_eq!(lines.len(), usize::try_from(count).expect("small count") + 1);
        assert_eq!(lines[0], EXPORT_HEADER.join(","));
        for (index, line) in lines.iter().skip(1).enumerate() {
            let fields = decode_line(line);
            assert_eq!(fields.len(), EXPORT_HEADER.len());
            let quantity = i64::try_from(index).expect("small index") + 1;
            assert_eq!(fields[4], Value::from(quantity * 3));
        }
    }

    #[rstest]
    #[case("Caneca, azul", "Cerâmica \"premium\"")]
    #[case("a\\b", "linha 1\nlinha 2")]
    #[case("", ",,,")]
    fn text_with_separators_round_trips(#[case] name: &str, #[case] description: &str) {
        let rendered = CsvDocument::try_from_rows(vec![row(name, description, 1, 1)])
            .expect("rows")
            .render();
        let data_line = rendered.split_once('\n').map(|(_, rest)| rest).expect("data line");
        let fields = decode_line(data_line);

        assert_eq!(fields[0], Value::from(name));
        assert_eq!(fields[1], Value::from(description));
    }

    #[test]
    fn missing_text_renders_as_null() {
        let mut sparse = row("p", "d", 1, 1);
        sparse.product_description = None;
        let rendered = CsvDocument::try_from_rows(vec![sparse]).expect("rows").render();
        assert!(rendered.ends_with("\"p\",null,1,1,1"));
    }
}
