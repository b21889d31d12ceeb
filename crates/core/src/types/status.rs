//! Presentation state of the cart widget.

use serde::{Deserialize, Serialize};

/// Which cart surface the visitor is currently looking at.
///
/// The cart and checkout overlays are mutually exclusive; at most one of
/// them is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresentationState {
    /// No cart overlay is open.
    #[default]
    Idle,
    /// The itemized cart overlay is open.
    CartOpen,
    /// The checkout summary overlay is open.
    CheckoutOpen,
}

impl std::fmt::Display for PresentationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::CartOpen => write!(f, "cart_open"),
            Self::CheckoutOpen => write!(f, "checkout_open"),
        }
    }
}
