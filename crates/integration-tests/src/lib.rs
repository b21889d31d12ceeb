//! Integration tests for the Restaurantly cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p restaurantly-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end visitor flows through `CartManager`
//! - `cart_properties` - Property tests over arbitrary add/update sequences

#![cfg_attr(not(test), forbid(unsafe_code))]

use restaurantly_core::Price;
use restaurantly_storefront::{CartManager, Page, StorefrontConfig};

/// A manager over a fresh in-memory page with default configuration.
#[must_use]
pub fn fresh_manager() -> CartManager<Page> {
    CartManager::new(Page::new(), &StorefrontConfig::default())
}

/// Shorthand for whole-rupiah prices.
#[must_use]
pub fn idr(amount: i64) -> Price {
    Price::from(amount)
}
