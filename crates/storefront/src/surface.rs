//! The presentation surface the cart writes to.
//!
//! A surface is whatever view layer hosts the cart widget: a browser DOM, a
//! terminal, or the in-memory [`Page`](crate::page::Page) used by the shell
//! and tests. The cart only ever writes named regions, toggles two overlays
//! and raises notices.

use std::fmt;
use std::str::FromStr;

/// A named region the cart renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Badge with the total item count.
    CartCount,
    /// Itemized list inside the cart overlay.
    CartItems,
    /// Grand total inside the cart overlay.
    CartTotal,
    /// Itemized summary inside the checkout overlay.
    CheckoutItems,
    /// Grand total inside the checkout overlay.
    CheckoutTotal,
}

impl Region {
    pub const ALL: [Self; 5] = [
        Self::CartCount,
        Self::CartItems,
        Self::CartTotal,
        Self::CheckoutItems,
        Self::CheckoutTotal,
    ];

    /// CSS selector of the element backing this region in the site markup.
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::CartCount => ".cart-count",
            Self::CartItems => "#cartItems",
            Self::CartTotal => "#cartTotal",
            Self::CheckoutItems => "#checkoutItems",
            Self::CheckoutTotal => "#checkoutTotal",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CartCount => "cart-count",
            Self::CartItems => "cart-items",
            Self::CartTotal => "cart-total",
            Self::CheckoutItems => "checkout-items",
            Self::CheckoutTotal => "checkout-total",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}

/// A modal overlay the cart can open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Overlay {
    Cart,
    Checkout,
}

impl Overlay {
    pub const ALL: [Self; 2] = [Self::Cart, Self::Checkout];

    /// CSS selector of the modal element.
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Cart => "#cartModal",
            Self::Checkout => "#checkoutModal",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cart => f.write_str("cart"),
            Self::Checkout => f.write_str("checkout"),
        }
    }
}

/// View layer the cart renders into.
///
/// All calls are synchronous: when a method returns, the surface shows the
/// new content. Implementations must not defer writes, or positions rendered
/// into item controls could go stale before the next user event.
pub trait PresentationSurface {
    /// Replace the plain-text content of a region.
    fn set_text(&mut self, region: Region, text: &str);

    /// Replace the markup of a region with an already-escaped HTML fragment.
    fn set_html(&mut self, region: Region, html: &str);

    /// Open an overlay. Opening an open overlay is a no-op.
    fn show(&mut self, overlay: Overlay);

    /// Close an overlay. Closing a closed overlay is a no-op.
    fn hide(&mut self, overlay: Overlay);

    /// Show a blocking, user-visible notice.
    fn notify(&mut self, message: &str);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn set_text(&mut self, region: Region, text: &str) {
        (**self).set_text(region, text);
    }

    fn set_html(&mut self, region: Region, html: &str) {
        (**self).set_html(region, html);
    }

    fn show(&mut self, overlay: Overlay) {
        (**self).show(overlay);
    }

    fn hide(&mut self, overlay: Overlay) {
        (**self).hide(overlay);
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_region_names_roundtrip() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>().unwrap(), region);
        }
        assert!("cart".parse::<Region>().is_err());
    }

    #[test]
    fn test_selectors_match_site_markup() {
        assert_eq!(Region::CartCount.selector(), ".cart-count");
        assert_eq!(Region::CheckoutTotal.selector(), "#checkoutTotal");
        assert_eq!(Overlay::Checkout.selector(), "#checkoutModal");
    }
}
