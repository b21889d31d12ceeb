//! The cart manager: one cart bound to one presentation surface.
//!
//! Every operation mutates the cart (if at all), then re-renders the
//! affected regions before returning, so positions shown in the item
//! controls always match the cart the next event will act on.

use askama::Template;
use restaurantly_core::{
    Cart, CheckoutSummary, CustomerDetails, OrderReceipt, PresentationState, Price,
    QuantityChange,
};
use tracing::instrument;

use crate::config::{NoticeConfig, StorefrontConfig};
use crate::error::Result;
use crate::format::PriceFormatter;
use crate::surface::{Overlay, PresentationSurface, Region};
use crate::views::{CartItemsTemplate, CartView, CheckoutItemsTemplate, CheckoutView};

/// Owns a cart and keeps a presentation surface in sync with it.
///
/// Managers share nothing; any number can coexist, each with its own
/// surface.
#[derive(Debug)]
pub struct CartManager<S> {
    cart: Cart,
    surface: S,
    formatter: PriceFormatter,
    notices: NoticeConfig,
    state: PresentationState,
}

impl<S: PresentationSurface> CartManager<S> {
    /// Create a manager with an empty cart.
    #[must_use]
    pub fn new(surface: S, config: &StorefrontConfig) -> Self {
        Self {
            cart: Cart::new(),
            surface,
            formatter: PriceFormatter::from(&config.pricing),
            notices: config.notices.clone(),
            state: PresentationState::Idle,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    /// Current cart as display data.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::new(&self.cart, &self.formatter)
    }

    /// Add one unit of an item and re-render.
    ///
    /// Returns the item's quantity after the call.
    ///
    /// # Errors
    ///
    /// Returns an error only if a fragment fails to render; the item has
    /// been added regardless.
    #[instrument(skip(self, image), fields(cart_id = %self.cart.id()))]
    pub fn add_to_cart(&mut self, name: &str, unit_price: Price, image: &str) -> Result<u32> {
        let quantity = self.cart.add_item(name, unit_price, image);
        tracing::debug!(quantity, "Item added");
        self.refresh()?;
        Ok(quantity)
    }

    /// Change the quantity of the item at `index` by `delta` and re-render.
    ///
    /// # Errors
    ///
    /// Returns `CartError::IndexOutOfRange` if `index` addresses no item. No
    /// notice is raised and nothing is re-rendered in that case.
    #[instrument(skip(self), fields(cart_id = %self.cart.id()))]
    pub fn update_quantity(&mut self, index: usize, delta: i64) -> Result<QuantityChange> {
        let change = self.cart.update_quantity(index, delta).inspect_err(|e| {
            tracing::warn!("Quantity update ignored: {e}");
        })?;
        tracing::debug!(?change, "Quantity updated");
        self.refresh()?;
        Ok(change)
    }

    /// Change the quantity of the named item by `delta` and re-render.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemNotFound` if no item has this name.
    #[instrument(skip(self), fields(cart_id = %self.cart.id()))]
    pub fn update_quantity_by_name(&mut self, name: &str, delta: i64) -> Result<QuantityChange> {
        let change = self
            .cart
            .update_quantity_by_name(name, delta)
            .inspect_err(|e| tracing::warn!("Quantity update ignored: {e}"))?;
        tracing::debug!(?change, "Quantity updated");
        self.refresh()?;
        Ok(change)
    }

    /// Remove the named item and re-render.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemNotFound` if no item has this name.
    #[instrument(skip(self), fields(cart_id = %self.cart.id()))]
    pub fn remove_item(&mut self, name: &str) -> Result<()> {
        let removed = self
            .cart
            .remove(name)
            .inspect_err(|e| tracing::warn!("Remove ignored: {e}"))?;
        tracing::debug!(quantity = removed.quantity(), "Item removed");
        self.refresh()
    }

    /// Render the checkout summary and switch from the cart overlay to the
    /// checkout overlay.
    ///
    /// # Errors
    ///
    /// Returns `CartError::EmptyCart` after raising the empty-cart notice if
    /// there is nothing to check out. The presentation state is unchanged.
    #[instrument(skip(self), fields(cart_id = %self.cart.id()))]
    pub fn checkout(&mut self) -> Result<CheckoutSummary> {
        let summary = match self.cart.summary() {
            Ok(summary) => summary,
            Err(e) => {
                tracing::info!("Checkout requested on an empty cart");
                self.surface.notify(&self.notices.empty_cart);
                return Err(e.into());
            }
        };

        let view = CheckoutView::new(&summary, &self.formatter);
        let html = CheckoutItemsTemplate { checkout: &view }.render()?;
        self.surface.set_html(Region::CheckoutItems, &html);
        self.surface.set_text(Region::CheckoutTotal, &view.total);

        self.surface.hide(Overlay::Cart);
        self.surface.show(Overlay::Checkout);
        self.state = PresentationState::CheckoutOpen;
        tracing::debug!(lines = summary.lines.len(), total = %summary.total, "Checkout opened");

        Ok(summary)
    }

    /// Acknowledge the order, empty the cart and close both overlays.
    ///
    /// Confirmation always succeeds; nothing is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns an error only if a fragment fails to render; the cart has
    /// been emptied and the overlays closed regardless.
    pub fn confirm_checkout(&mut self) -> Result<OrderReceipt> {
        self.confirm_checkout_with(None)
    }

    /// Like [`confirm_checkout`](Self::confirm_checkout), recording the
    /// visitor's contact details on the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error only if a fragment fails to render.
    #[instrument(skip(self, customer), fields(cart_id = %self.cart.id()))]
    pub fn confirm_checkout_with(
        &mut self,
        customer: Option<CustomerDetails>,
    ) -> Result<OrderReceipt> {
        self.surface.notify(&self.notices.order_confirmed);

        let mut receipt = OrderReceipt::from_cart(&self.cart);
        if let Some(customer) = customer {
            receipt = receipt.with_customer(customer);
        }
        self.cart.clear();
        // Confirmation may come straight from the cart overlay.
        self.surface.hide(Overlay::Cart);
        self.surface.hide(Overlay::Checkout);
        self.state = PresentationState::Idle;

        tracing::info!(
            order_id = %receipt.id,
            lines = receipt.lines.len(),
            total = %receipt.total,
            has_customer = receipt.customer.is_some(),
            "Checkout confirmed"
        );

        self.refresh()?;
        Ok(receipt)
    }

    /// Open the cart overlay. Ignored while the checkout overlay is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the item list fails to render.
    pub fn open_cart(&mut self) -> Result<()> {
        if self.state == PresentationState::CheckoutOpen {
            tracing::debug!("Cart overlay not opened: checkout in progress");
            return Ok(());
        }
        self.render_items()?;
        self.surface.show(Overlay::Cart);
        self.state = PresentationState::CartOpen;
        Ok(())
    }

    /// Close the cart overlay.
    pub fn close_cart(&mut self) {
        if self.state == PresentationState::CartOpen {
            self.surface.hide(Overlay::Cart);
            self.state = PresentationState::Idle;
        }
    }

    /// Dismiss the checkout overlay without confirming. The cart is kept.
    pub fn close_checkout(&mut self) {
        if self.state == PresentationState::CheckoutOpen {
            self.surface.hide(Overlay::Checkout);
            self.state = PresentationState::Idle;
        }
    }

    /// Write the item count to the count badge.
    pub fn render_count(&mut self) {
        let count = self.cart.count().to_string();
        self.surface.set_text(Region::CartCount, &count);
    }

    /// Write the itemized list and the total to the cart overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the item list fails to render.
    pub fn render_items(&mut self) -> Result<()> {
        let view = self.cart_view();
        let html = CartItemsTemplate { cart: &view }.render()?;
        self.surface.set_html(Region::CartItems, &html);
        self.surface.set_text(Region::CartTotal, &view.total);
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.render_count();
        self.render_items()
    }
}
