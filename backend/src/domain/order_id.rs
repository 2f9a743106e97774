//! Order identifier shared by both functions.

use std::fmt;

/// Validation errors returned by [`OrderId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderIdValidationError {
    /// The identifier was empty or whitespace only.
    #[error("order id must not be empty")]
    Empty,
}

/// Order identifier as supplied by the caller.
///
/// The value is kept verbatim: it is interpolated into the e-mail subject,
/// the export file name and the data-store filter without normalisation.
///
/// # Examples
/// ```
/// use order_functions::domain::OrderId;
///
/// let id = OrderId::new("42").expect("valid id");
/// assert_eq!(id.as_str(), "42");
/// assert!(OrderId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Errors
    /// Returns [`OrderIdValidationError::Empty`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, OrderIdValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(OrderIdValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
