//! Error types for the builder glue.
//!
//! Rendering itself never fails; these cover page ingestion, cart updates
//! and discount codes.

/// Errors raised while ingesting a page's component tree.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The page JSON could not be parsed.
    #[error("Invalid component JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two nodes in the same tree share an id.
    #[error("Duplicate component id '{0}'")]
    DuplicateId(String),
}

/// Errors raised by cart operations and cart stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    /// No line matches the product/combination pair.
    #[error("No cart item for product '{product_id}'")]
    UnknownItem { product_id: String },

    /// The product or combination has no stock left.
    #[error("Product '{product_id}' is out of stock")]
    OutOfStock { product_id: String },

    /// The backing store failed.
    #[error("Cart storage failed: {0}")]
    Storage(String),
}

impl CartError {
    pub(crate) fn unknown(product_id: &str) -> Self {
        Self::UnknownItem {
            product_id: product_id.to_string(),
        }
    }
}

/// Errors raised when applying a discount code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscountError {
    /// No discount has this code.
    #[error("Unknown discount code '{0}'")]
    UnknownCode(String),

    /// The code exists but is switched off.
    #[error("Discount code '{0}' is not active")]
    Inactive(String),

    /// The order subtotal is below the discount's minimum.
    #[error("Discount '{code}' requires a subtotal of at least {minimum:.2}")]
    MinimumNotMet { code: String, minimum: f64 },
}
