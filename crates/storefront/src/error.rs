//! Unified error handling for the cart widget.

use restaurantly_core::CartError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error type for storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A fragment template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// The underlying cart error, if this is one.
    #[must_use]
    pub const fn as_cart_error(&self) -> Option<&CartError> {
        match self {
            Self::Cart(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::from(CartError::EmptyCart);
        assert_eq!(err.to_string(), "Cart error: cart is empty");
    }

    #[test]
    fn test_as_cart_error() {
        let err = StorefrontError::from(CartError::IndexOutOfRange { index: 2, len: 0 });
        assert_eq!(
            err.as_cart_error(),
            Some(&CartError::IndexOutOfRange { index: 2, len: 0 })
        );

        let err = StorefrontError::from(ConfigError::InvalidEnvVar(
            "X".to_string(),
            "y".to_string(),
        ));
        assert!(err.as_cart_error().is_none());
    }
}
