//! Cart quantity math and the cart-store seam.
//!
//! A cart belongs to one company (storefront) and holds one line per
//! product/combination pair. Quantities are always at least one and never
//! exceed the stock known when the line was added.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::catalog::{Combination, Product};
use crate::error::CartError;
use crate::money::round_cents;

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    #[serde(default)]
    pub combination_id: Option<String>,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    /// Stock limit; `None` means unlimited.
    #[serde(default)]
    pub max_quantity: Option<u32>,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            combination_id: None,
            name: name.into(),
            unit_price,
            quantity: 1,
            max_quantity: None,
        }
    }

    /// A line for `product`, priced and stock-limited by the combination
    /// when one is given.
    pub fn from_product(
        product: &Product,
        combination: Option<&Combination>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id.clone(),
            combination_id: combination.map(|c| c.id.clone()),
            name: product.name.clone(),
            unit_price: product.effective_price(combination),
            quantity,
            max_quantity: Some(product.available_stock(combination)),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_max_quantity(mut self, max: u32) -> Self {
        self.max_quantity = Some(max);
        self
    }

    pub fn with_combination(mut self, combination_id: impl Into<String>) -> Self {
        self.combination_id = Some(combination_id.into());
        self
    }

    /// `unit_price × quantity`, rounded to cents.
    pub fn line_total(&self) -> f64 {
        round_cents(self.unit_price * f64::from(self.quantity))
    }

    fn matches(&self, product_id: &str, combination_id: Option<&str>) -> bool {
        self.product_id == product_id && self.combination_id.as_deref() == combination_id
    }

    /// Clamps `quantity` into `1..=max_quantity`.
    fn clamp(&self, quantity: u32) -> u32 {
        let clamped = match self.max_quantity {
            Some(max) => quantity.min(max),
            None => quantity,
        };
        if clamped != quantity {
            tracing::warn!(
                product = %self.product_id,
                requested = quantity,
                allowed = clamped,
                "cart quantity clamped to stock"
            );
        }
        clamped.max(1)
    }
}

/// A company's cart.
///
/// # Example
///
/// ```rust
/// use storefront_builder::{Cart, CartItem};
///
/// let mut cart = Cart::new("acme");
/// cart.add(CartItem::new("mug", "Mug", 12.5).with_max_quantity(3)).unwrap();
/// cart.add(CartItem::new("mug", "Mug", 12.5).with_quantity(5)).unwrap();
///
/// // Same product merges into one line, clamped to stock.
/// assert_eq!(cart.items().len(), 1);
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.subtotal(), 37.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub company_id: String,
    #[serde(default)]
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            items: Vec::new(),
        }
    }

    /// Rebuilds a cart from stored lines.
    pub fn from_items(company_id: impl Into<String>, items: Vec<CartItem>) -> Self {
        Self {
            company_id: company_id.into(),
            items,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a line, merging with an existing line for the same
    /// product/combination.
    ///
    /// # Errors
    ///
    /// [`CartError::OutOfStock`] when the stock limit is zero.
    pub fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        if item.max_quantity == Some(0) {
            return Err(CartError::OutOfStock {
                product_id: item.product_id,
            });
        }

        let combination = item.combination_id.as_deref();
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.matches(&item.product_id, combination))
        {
            // The newest stock figure wins.
            if item.max_quantity.is_some() {
                existing.max_quantity = item.max_quantity;
            }
            existing.quantity = existing.clamp(existing.quantity.saturating_add(item.quantity));
            return Ok(());
        }

        let quantity = item.clamp(item.quantity);
        self.items.push(CartItem { quantity, ..item });
        Ok(())
    }

    /// Sets a line's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// [`CartError::UnknownItem`] when no line matches.
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        combination_id: Option<&str>,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(product_id, combination_id).map(|_| ());
        }
        let line = self.line_mut(product_id, combination_id)?;
        line.quantity = line.clamp(quantity);
        Ok(())
    }

    /// Adds one, up to the stock limit.
    pub fn increment(
        &mut self,
        product_id: &str,
        combination_id: Option<&str>,
    ) -> Result<u32, CartError> {
        let line = self.line_mut(product_id, combination_id)?;
        line.quantity = line.clamp(line.quantity.saturating_add(1));
        Ok(line.quantity)
    }

    /// Removes one, never going below one.
    pub fn decrement(
        &mut self,
        product_id: &str,
        combination_id: Option<&str>,
    ) -> Result<u32, CartError> {
        let line = self.line_mut(product_id, combination_id)?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Ok(line.quantity)
    }

    /// Removes a line, returning it.
    pub fn remove(
        &mut self,
        product_id: &str,
        combination_id: Option<&str>,
    ) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|line| line.matches(product_id, combination_id))
            .ok_or_else(|| CartError::unknown(product_id))?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    ///
    /// Widened to `u64` since unlimited lines can each hold up to `u32::MAX`.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line totals, rounded to cents.
    pub fn subtotal(&self) -> f64 {
        round_cents(self.items.iter().map(CartItem::line_total).sum())
    }

    fn line_mut(
        &mut self,
        product_id: &str,
        combination_id: Option<&str>,
    ) -> Result<&mut CartItem, CartError> {
        self.items
            .iter_mut()
            .find(|line| line.matches(product_id, combination_id))
            .ok_or_else(|| CartError::unknown(product_id))
    }
}

/// Persistence seam for carts, keyed by company id.
///
/// The storefront keeps carts in browser storage; this crate only defines
/// the contract.
pub trait CartStore: Send + Sync {
    /// Loads a company's cart. A company with no saved cart gets an empty one.
    fn load(&self, company_id: &str) -> Result<Cart, CartError>;

    /// Saves a cart under its company id, replacing any previous one.
    fn save(&self, cart: &Cart) -> Result<(), CartError>;

    /// Deletes a company's cart.
    fn clear(&self, company_id: &str) -> Result<(), CartError>;
}

/// Cart store held in memory, for previews and tests.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Vec<CartItem>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> CartError {
    CartError::Storage("cart store lock poisoned".to_string())
}

impl CartStore for InMemoryCartStore {
    fn load(&self, company_id: &str) -> Result<Cart, CartError> {
        let carts = self.carts.read().map_err(poisoned)?;
        let items = carts.get(company_id).cloned().unwrap_or_default();
        Ok(Cart::from_items(company_id, items))
    }

    fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let mut carts = self.carts.write().map_err(poisoned)?;
        carts.insert(cart.company_id.clone(), cart.items.clone());
        Ok(())
    }

    fn clear(&self, company_id: &str) -> Result<(), CartError> {
        let mut carts = self.carts.write().map_err(poisoned)?;
        carts.remove(company_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> CartItem {
        CartItem::new("mug", "Mug", 12.5).with_max_quantity(5)
    }

    #[test]
    fn test_add_merges_same_line() {
        let mut cart = Cart::new("acme");
        cart.add(mug()).unwrap();
        cart.add(mug().with_quantity(2)).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_combinations_are_separate_lines() {
        let mut cart = Cart::new("acme");
        cart.add(mug().with_combination("blue")).unwrap();
        cart.add(mug().with_combination("red")).unwrap();
        cart.add(mug()).unwrap();
        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn test_add_clamps_to_stock() {
        let mut cart = Cart::new("acme");
        cart.add(mug().with_quantity(9)).unwrap();
        assert_eq!(cart.item_count(), 5);
        cart.add(mug()).unwrap();
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_out_of_stock() {
        let mut cart = Cart::new("acme");
        let err = cart.add(mug().with_max_quantity(0)).unwrap_err();
        assert_eq!(err, CartError::OutOfStock { product_id: "mug".into() });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_becomes_one() {
        let mut cart = Cart::new("acme");
        cart.add(mug().with_quantity(0)).unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new("acme");
        cart.add(mug()).unwrap();
        cart.set_quantity("mug", None, 4).unwrap();
        assert_eq!(cart.item_count(), 4);
        cart.set_quantity("mug", None, 50).unwrap();
        assert_eq!(cart.item_count(), 5);
        cart.set_quantity("mug", None, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown() {
        let mut cart = Cart::new("acme");
        assert_eq!(
            cart.set_quantity("ghost", None, 2),
            Err(CartError::unknown("ghost"))
        );
    }

    #[test]
    fn test_increment_and_decrement_bounds() {
        let mut cart = Cart::new("acme");
        cart.add(mug().with_max_quantity(2)).unwrap();
        assert_eq!(cart.increment("mug", None), Ok(2));
        assert_eq!(cart.increment("mug", None), Ok(2));
        assert_eq!(cart.decrement("mug", None), Ok(1));
        assert_eq!(cart.decrement("mug", None), Ok(1));
    }

    #[test]
    fn test_item_count_does_not_overflow() {
        let mut cart = Cart::new("acme");
        cart.add(CartItem::new("a", "A", 1.0).with_quantity(u32::MAX)).unwrap();
        cart.add(CartItem::new("b", "B", 1.0).with_quantity(u32::MAX)).unwrap();
        assert_eq!(cart.item_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_subtotal_rounds_to_cents() {
        let mut cart = Cart::new("acme");
        cart.add(CartItem::new("a", "A", 0.1).with_quantity(3)).unwrap();
        cart.add(CartItem::new("b", "B", 19.99).with_quantity(2)).unwrap();
        assert_eq!(cart.subtotal(), 40.28);
    }

    #[test]
    fn test_from_product_uses_combination() {
        let product: Product = serde_json::from_str(
            r#"{"id": "tee", "name": "Tee", "price": 20.0, "combinations": [
                {"id": "tee-xl", "attributes": {"size": "XL"}, "stock": 2, "price": 24.0}
            ]}"#,
        )
        .unwrap();
        let item = CartItem::from_product(&product, product.combinations.first(), 1);
        assert_eq!(item.unit_price, 24.0);
        assert_eq!(item.max_quantity, Some(2));
        assert_eq!(item.combination_id.as_deref(), Some("tee-xl"));
    }

    #[test]
    fn test_in_memory_store_round_trip() {
        let store = InMemoryCartStore::new();
        assert!(store.load("acme").unwrap().is_empty());

        let mut cart = Cart::new("acme");
        cart.add(mug().with_quantity(2)).unwrap();
        store.save(&cart).unwrap();

        assert_eq!(store.load("acme").unwrap(), cart);
        assert!(store.load("other").unwrap().is_empty());

        store.clear("acme").unwrap();
        assert!(store.load("acme").unwrap().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new("acme");
        cart.add(CartItem::new("mug", "Mug", 12.5)).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["companyId"], "acme");
        assert_eq!(json["items"][0]["unitPrice"], 12.5);
    }
}
