//! The cart: an ordered list of line items keyed by name.
//!
//! All operations here are pure bookkeeping. Rendering and user notices are
//! handled by whoever owns the cart.

use serde::{Deserialize, Serialize};

use crate::checkout::{CheckoutSummary, SummaryLine};
use crate::error::{CartError, CartRecordError};
use crate::types::{CartId, Price};

/// One distinct product in the cart with its aggregated quantity.
///
/// A line item in a cart always has a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    unit_price: Price,
    image: String,
    quantity: u32,
}

impl LineItem {
    fn new(name: String, unit_price: Price, image: String) -> Self {
        Self {
            name,
            unit_price,
            image,
            quantity: 1,
        }
    }

    /// The item name, unique within its cart.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Opaque image reference supplied when the item was first added.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    /// Apply a signed delta. Returns `None` when the item should be removed.
    fn apply_delta(&mut self, delta: i64) -> Option<u32> {
        let next = i64::from(self.quantity).saturating_add(delta);
        if next <= 0 {
            return None;
        }
        self.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(self.quantity)
    }
}

/// Outcome of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item is still present with the new quantity.
    Updated { quantity: u32 },
    /// The quantity dropped to zero or below and the item was removed.
    Removed,
}

/// An in-memory shopping cart.
///
/// Items keep the order in which their names were first added. Count and
/// total are derived on every call.
///
/// Deserialization goes through [`CartRecord`] and rejects data that breaks
/// the cart's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartRecord")]
pub struct Cart {
    id: CartId,
    items: Vec<LineItem>,
}

/// Unchecked serialized form of a [`Cart`].
#[derive(Debug, Clone, Deserialize)]
pub struct CartRecord {
    pub id: CartId,
    pub items: Vec<LineItemRecord>,
}

/// Unchecked serialized form of a [`LineItem`].
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemRecord {
    pub name: String,
    pub unit_price: Price,
    pub image: String,
    pub quantity: u32,
}

impl TryFrom<CartRecord> for Cart {
    type Error = CartRecordError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let mut items: Vec<LineItem> = Vec::with_capacity(record.items.len());
        for line in record.items {
            if line.quantity == 0 {
                return Err(CartRecordError::ZeroQuantity(line.name));
            }
            if items.iter().any(|item| item.name == line.name) {
                return Err(CartRecordError::DuplicateName(line.name));
            }
            items.push(LineItem {
                name: line.name,
                unit_price: line.unit_price,
                image: line.image,
                quantity: line.quantity,
            });
        }
        Ok(Self {
            id: record.id,
            items,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create an empty cart with a fresh ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(CartId::generate())
    }

    /// Create an empty cart with the given ID.
    #[must_use]
    pub const fn with_id(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> CartId {
        self.id
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Current position of the named item.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Add one unit of an item.
    ///
    /// If an item with this name is already present its quantity goes up by
    /// one and the stored price and image are kept, whatever the caller
    /// passed. Otherwise a new line item with quantity 1 is appended.
    ///
    /// Returns the item's quantity after the call.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Price,
        image: impl Into<String>,
    ) -> u32 {
        let name = name.into();
        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }
        self.items.push(LineItem::new(name, unit_price, image.into()));
        1
    }

    /// Change the quantity of the item at `index` by `delta`.
    ///
    /// A resulting quantity of zero or less removes the item, shifting every
    /// later item down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if `index` does not address an
    /// item. The cart is unchanged in that case.
    pub fn update_quantity(
        &mut self,
        index: usize,
        delta: i64,
    ) -> Result<QuantityChange, CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;

        match item.apply_delta(delta) {
            Some(quantity) => Ok(QuantityChange::Updated { quantity }),
            None => {
                self.items.remove(index);
                Ok(QuantityChange::Removed)
            }
        }
    }

    /// Change the quantity of the named item by `delta`.
    ///
    /// Same semantics as [`Cart::update_quantity`], keyed by name so callers
    /// never hold a position across mutations.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has this name.
    pub fn update_quantity_by_name(
        &mut self,
        name: &str,
        delta: i64,
    ) -> Result<QuantityChange, CartError> {
        let index = self
            .position(name)
            .ok_or_else(|| CartError::ItemNotFound(name.to_string()))?;
        self.update_quantity(index, delta)
    }

    /// Remove the named item regardless of its quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has this name.
    pub fn remove(&mut self, name: &str) -> Result<LineItem, CartError> {
        let index = self
            .position(name)
            .ok_or_else(|| CartError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Drop every line item. The cart keeps its ID.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Summarize the cart for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] if there is nothing to check out.
    pub fn summary(&self) -> Result<CheckoutSummary, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(CheckoutSummary {
            lines: self.items.iter().map(SummaryLine::from).collect(),
            total: self.total(),
            item_count: self.count(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn price(amount: i64) -> Price {
        Price::from(amount)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_add_distinct_items_preserves_order() {
        let mut cart = Cart::new();
        cart.add_item("Nasi Goreng", price(25_000), "nasi.jpg");
        cart.add_item("Sate Ayam", price(30_000), "sate.jpg");
        cart.add_item("Es Teh", price(5_000), "teh.jpg");

        let names: Vec<&str> = cart.items().iter().map(LineItem::name).collect();
        assert_eq!(names, ["Nasi Goreng", "Sate Ayam", "Es Teh"]);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_existing_name_increments_and_keeps_first_price() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("Burger", price(30_000), "a.jpg"), 1);
        assert_eq!(cart.add_item("Burger", price(99_000), "b.jpg"), 2);

        assert_eq!(cart.len(), 1);
        let burger = cart.find("Burger").unwrap();
        assert_eq!(burger.quantity(), 2);
        assert_eq!(burger.unit_price(), price(30_000));
        assert_eq!(burger.image(), "a.jpg");
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add_item("A", price(10_000), "");
        cart.add_item("A", price(10_000), "");
        for _ in 0..3 {
            cart.add_item("B", price(5_000), "");
        }
        assert_eq!(cart.total(), price(35_000));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_decrement_to_zero_removes_item() {
        let mut cart = Cart::new();
        cart.add_item("Nasi Goreng", price(25_000), "img.jpg");
        assert_eq!(cart.update_quantity(0, -1).unwrap(), QuantityChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_large_negative_delta_removes_item() {
        let mut cart = Cart::new();
        cart.add_item("Burger", price(30_000), "");
        assert_eq!(cart.update_quantity(0, -5).unwrap(), QuantityChange::Removed);
        assert!(cart.find("Burger").is_none());
    }

    #[test]
    fn test_removal_shifts_later_items_down() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        cart.add_item("B", price(2), "");
        cart.add_item("C", price(3), "");
        cart.update_quantity(0, -1).unwrap();
        assert_eq!(cart.items()[0].name(), "B");
        assert_eq!(cart.position("C"), Some(1));
    }

    #[test]
    fn test_increment_updates_quantity() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        assert_eq!(
            cart.update_quantity(0, 4).unwrap(),
            QuantityChange::Updated { quantity: 5 }
        );
    }

    #[test]
    fn test_huge_delta_saturates() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        assert_eq!(
            cart.update_quantity(0, i64::MAX).unwrap(),
            QuantityChange::Updated { quantity: u32::MAX }
        );
        assert_eq!(cart.update_quantity(0, i64::MIN).unwrap(), QuantityChange::Removed);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        let before = cart.clone();
        assert_eq!(
            cart.update_quantity(1, -1),
            Err(CartError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_by_name() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        cart.add_item("B", price(2), "");
        assert_eq!(
            cart.update_quantity_by_name("B", 2).unwrap(),
            QuantityChange::Updated { quantity: 3 }
        );
        assert_eq!(
            cart.update_quantity_by_name("Z", 1),
            Err(CartError::ItemNotFound("Z".to_string()))
        );
    }

    #[test]
    fn test_remove_by_name() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1), "");
        cart.add_item("A", price(1), "");
        let removed = cart.remove("A").unwrap();
        assert_eq!(removed.quantity(), 2);
        assert!(cart.is_empty());
        assert!(cart.remove("A").is_err());
    }

    #[test]
    fn test_empty_name_and_negative_price_are_accepted() {
        let mut cart = Cart::new();
        cart.add_item("", price(-100), "");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), price(-100));
    }

    #[test]
    fn test_summary_of_empty_cart_fails() {
        assert_eq!(Cart::new().summary(), Err(CartError::EmptyCart));
    }

    #[test]
    fn test_summary_lines() {
        let mut cart = Cart::new();
        cart.add_item("Burger", price(30_000), "burger.jpg");
        cart.add_item("Burger", price(30_000), "burger.jpg");
        let summary = cart.summary().unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.lines[0].line_total, price(60_000));
        assert_eq!(summary.total, price(60_000));
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_serde_roundtrip_keeps_items() {
        let mut cart = Cart::new();
        cart.add_item("A", price(1_000), "a.jpg");
        cart.add_item("A", price(1_000), "a.jpg");
        cart.add_item("B", price(2_000), "b.jpg");

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    fn cart_json(lines: &str) -> String {
        format!(r#"{{"id":"{}","items":[{lines}]}}"#, CartId::generate())
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = cart_json(r#"{"name":"A","unit_price":"1","image":"","quantity":0}"#);
        let err = serde_json::from_str::<Cart>(&json).unwrap_err();
        assert!(err.to_string().contains("quantity 0"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_names() {
        let json = cart_json(concat!(
            r#"{"name":"A","unit_price":"1","image":"","quantity":1},"#,
            r#"{"name":"A","unit_price":"2","image":"","quantity":3}"#
        ));
        let err = serde_json::from_str::<Cart>(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate line item"));
    }

    #[test]
    fn test_clear_keeps_id() {
        let mut cart = Cart::new();
        let id = cart.id();
        cart.add_item("A", price(1), "");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.id(), id);
    }
}
