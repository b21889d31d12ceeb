//! Cart operation errors.

use thiserror::Error;

/// Errors returned by cart operations.
///
/// None of these leave the cart in a changed state: every failing operation
/// is rejected before it touches the line items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Checkout was requested while the cart has no line items.
    #[error("cart is empty")]
    EmptyCart,
    /// A positional update addressed an item that does not exist.
    #[error("line index {index} out of range for cart with {len} items")]
    IndexOutOfRange {
        /// The index the caller passed.
        index: usize,
        /// Number of line items at the time of the call.
        len: usize,
    },
    /// A name-keyed operation addressed an item that does not exist.
    #[error("no line item named {0:?}")]
    ItemNotFound(String),
}

/// Errors returned when a serialized cart breaks the cart's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartRecordError {
    /// A line item was recorded with quantity 0.
    #[error("line item {0:?} has quantity 0")]
    ZeroQuantity(String),
    /// Two line items share a name.
    #[error("duplicate line item {0:?}")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        assert_eq!(CartError::EmptyCart.to_string(), "cart is empty");
        assert_eq!(
            CartError::IndexOutOfRange { index: 3, len: 1 }.to_string(),
            "line index 3 out of range for cart with 1 items"
        );
        assert_eq!(
            CartError::ItemNotFound("Burger".to_string()).to_string(),
            "no line item named \"Burger\""
        );
    }
}
