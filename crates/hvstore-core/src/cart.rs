//! In-memory shopping cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal (in dong) ship free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 300_000;
/// Flat shipping fee below [`FREE_SHIPPING_THRESHOLD`].
pub const SHIPPING_FEE: i64 = 30_000;

/// A product as offered to the cart by a catalog or detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRef {
    pub id: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl ProductRef {
    /// Cart row id: the product id, or `"{name}-{price}"` when there is none.
    #[must_use]
    pub fn cart_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}-{}", self.name, self.price.normalize()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Product code shown under the item name, e.g. `HV-0012`.
    #[must_use]
    pub fn display_code(&self) -> String {
        display_code(&self.id)
    }
}

/// Derived money figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub item_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of `product`. A product already in the cart has its
    /// quantity increased instead of getting a second row.
    pub fn add(&mut self, product: &ProductRef, quantity: u32) {
        let id = product.cart_id();
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(CartItem {
            id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        });
    }

    /// Sets the quantity of `id`, clamped to at least 1. Returns `false` when
    /// the item is not in the cart.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    pub fn increment(&mut self, id: &str) -> bool {
        let current = self.quantity_of(id);
        current.is_some_and(|q| self.update_quantity(id, q.saturating_add(1)))
    }

    /// Decreases the quantity of `id` by one without going below 1.
    pub fn decrement(&mut self, id: &str) -> bool {
        let current = self.quantity_of(id);
        current.is_some_and(|q| self.update_quantity(id, q.saturating_sub(1)))
    }

    /// Removes the row for `id`. Returns `false` when it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items.iter().find(|i| i.id == id).map(|i| i.quantity)
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let threshold = Decimal::from(FREE_SHIPPING_THRESHOLD);
        let shipping = if subtotal > Decimal::ZERO && subtotal < threshold {
            Decimal::from(SHIPPING_FEE)
        } else {
            Decimal::ZERO
        };
        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
            item_count: self.item_count(),
        }
    }
}

/// `HV-` followed by the id, zero-padded to four characters when it is
/// four characters or shorter.
#[must_use]
pub fn display_code(id: &str) -> String {
    if id.chars().count() <= 4 {
        format!("HV-{id:0>4}")
    } else {
        format!("HV-{id}")
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
