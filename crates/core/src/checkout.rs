//! Checkout summaries and order receipts.
//!
//! A checkout never leaves the process: the summary is what the visitor
//! reviews, the receipt is what they get back on confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};
use crate::types::{CartId, OrderId, Price};

/// One line of a checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl From<&LineItem> for SummaryLine {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name().to_string(),
            image: item.image().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            line_total: item.line_total(),
        }
    }
}

/// Read-only snapshot of a non-empty cart, shown before confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
    pub item_count: u64,
}

/// Contact details a visitor leaves with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDetails {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

/// Acknowledgement of a confirmed checkout.
///
/// Receipts are returned to the caller and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: OrderId,
    pub cart_id: CartId,
    pub lines: Vec<SummaryLine>,
    pub total: Price,
    pub item_count: u64,
    pub placed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerDetails>,
}

impl OrderReceipt {
    /// Capture the current contents of `cart`, placed now.
    ///
    /// An empty cart yields a receipt with no lines.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self::from_cart_at(cart, Utc::now())
    }

    /// Capture the current contents of `cart` with an explicit timestamp.
    #[must_use]
    pub fn from_cart_at(cart: &Cart, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::generate(),
            cart_id: cart.id(),
            lines: cart.items().iter().map(SummaryLine::from).collect(),
            total: cart.total(),
            item_count: cart.count(),
            placed_at,
            customer: None,
        }
    }

    /// Attach the visitor's contact details.
    #[must_use]
    pub fn with_customer(mut self, customer: CustomerDetails) -> Self {
        self.customer = Some(customer);
        self
    }

    /// The ordered lines as a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn order_details_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }
}
