//! Display data and fragment templates for the cart widget.
//!
//! Views carry pre-formatted strings so templates stay free of arithmetic
//! and currency rules.

use std::fmt;

use askama::Template;
use restaurantly_core::{Cart, CheckoutSummary, LineItem, SummaryLine};

use crate::format::PriceFormatter;

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Current position, used by the -/+ controls.
    pub index: usize,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl CartItemView {
    fn new(index: usize, item: &LineItem, formatter: &PriceFormatter) -> Self {
        Self {
            index,
            name: item.name().to_string(),
            image: item.image().to_string(),
            quantity: item.quantity(),
            unit_price: formatter.format(item.unit_price()),
            line_total: formatter.format(item.line_total()),
        }
    }
}

impl CartView {
    /// Build the view of `cart` at this moment.
    #[must_use]
    pub fn new(cart: &Cart, formatter: &PriceFormatter) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView::new(index, item, formatter))
                .collect(),
            total: formatter.format(cart.total()),
            item_count: cart.count(),
        }
    }
}

/// One checkout summary line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineView {
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

impl fmt::Display for CheckoutLineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {}", self.name, self.quantity, self.line_total)
    }
}

/// Checkout summary display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub lines: Vec<CheckoutLineView>,
    pub total: String,
}

impl CheckoutLineView {
    fn new(line: &SummaryLine, formatter: &PriceFormatter) -> Self {
        Self {
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            line_total: formatter.format(line.line_total),
        }
    }
}

impl CheckoutView {
    #[must_use]
    pub fn new(summary: &CheckoutSummary, formatter: &PriceFormatter) -> Self {
        Self {
            lines: summary
                .lines
                .iter()
                .map(|line| CheckoutLineView::new(line, formatter))
                .collect(),
            total: formatter.format(summary.total),
        }
    }
}

/// Cart items fragment, written to the cart items region.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}

/// Checkout items fragment, written to the checkout items region.
#[derive(Template)]
#[template(path = "partials/checkout_items.html")]
pub struct CheckoutItemsTemplate<'a> {
    pub checkout: &'a CheckoutView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use restaurantly_core::{CurrencyCode, Price};

    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Burger", Price::from(30_000), "img/burger.jpg");
        cart.add_item("Burger", Price::from(30_000), "img/burger.jpg");
        cart.add_item("Es Teh", Price::from(5_000), "img/teh.jpg");
        cart
    }

    #[test]
    fn test_cart_view() {
        let view = CartView::new(&cart(), &PriceFormatter::default());
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].index, 0);
        assert_eq!(view.items[0].line_total, "IDR 60000");
        assert_eq!(view.items[1].index, 1);
        assert_eq!(view.items[1].unit_price, "IDR 5000");
        assert_eq!(view.total, "IDR 65000");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_cart_items_template_renders_controls() {
        let view = CartView::new(&cart(), &PriceFormatter::default());
        let html = CartItemsTemplate { cart: &view }.render().unwrap();

        assert_eq!(html.matches("class=\"cart-item mb-3\"").count(), 2);
        assert!(html.contains("src=\"img/burger.jpg\""));
        assert!(html.contains("updateQuantity(0, -1)"));
        assert!(html.contains("updateQuantity(1, 1)"));
        assert!(html.contains("IDR 60000"));
    }

    #[test]
    fn test_cart_items_template_escapes_names() {
        let mut cart = Cart::new();
        cart.add_item("<b>Soto</b>", Price::from(1), "");
        let view = CartView::new(&cart, &PriceFormatter::default());
        let html = CartItemsTemplate { cart: &view }.render().unwrap();

        assert!(!html.contains("<b>Soto</b>"));
        assert!(html.contains("&lt;b&gt;Soto"));
    }

    #[test]
    fn test_checkout_line_display() {
        let summary = cart().summary().unwrap();
        let formatter = PriceFormatter::new(CurrencyCode::IDR, Some('.'));
        let view = CheckoutView::new(&summary, &formatter);
        assert_eq!(view.lines[0].to_string(), "Burger x 2 = IDR 60.000");
        assert_eq!(view.total, "IDR 65.000");
    }

    #[test]
    fn test_checkout_items_template() {
        let summary = cart().summary().unwrap();
        let view = CheckoutView::new(&summary, &PriceFormatter::default());
        let html = CheckoutItemsTemplate { checkout: &view }.render().unwrap();

        assert!(html.contains("Burger x 2 = IDR 60000"));
        assert!(html.contains("Es Teh x 1 = IDR 5000"));
    }
}
