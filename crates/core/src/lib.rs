//! Restaurantly Core - Cart domain library.
//!
//! This crate provides the cart model used by the Restaurantly site:
//! - `storefront` - Presentation layer that renders the cart widget
//! - `cli` - Interactive shell that drives a cart from the terminal
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! rendering, no formatting. This keeps every cart rule testable without a
//! presentation surface.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, and presentation state
//! - [`cart`] - Line items and the cart itself
//! - [`checkout`] - Checkout summaries and order receipts
//! - [`error`] - Cart operation errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod error;
pub mod types;

pub use cart::{Cart, CartRecord, LineItem, LineItemRecord, QuantityChange};
pub use checkout::{CheckoutSummary, CustomerDetails, OrderReceipt, SummaryLine};
pub use error::{CartError, CartRecordError};
pub use types::*;
