//! Restaurantly Storefront - cart widget presentation layer.
//!
//! Binds a [`restaurantly_core::Cart`] to a [`PresentationSurface`]: every
//! cart operation re-renders the count badge, the itemized list and the
//! totals, and drives the cart and checkout overlays.
//!
//! # Modules
//!
//! - [`manager`] - `CartManager`, the entry points the page calls
//! - [`surface`] - The `PresentationSurface` trait, regions and overlays
//! - [`page`] - An in-memory surface
//! - [`views`] - Display data and askama fragment templates
//! - [`format`] - Price formatting
//! - [`config`] - Environment configuration
//! - [`telemetry`] - Tracing setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod format;
pub mod manager;
pub mod page;
pub mod surface;
pub mod telemetry;
pub mod views;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use manager::CartManager;
pub use page::Page;
pub use surface::{Overlay, PresentationSurface, Region};
