//! Discount codes and the order summary.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::DiscountError;
use crate::money::round_cents;

/// How a discount reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percent off the subtotal, capped at 100.
    Percentage(f64),
    /// Fixed amount off.
    Fixed(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub code: String,
    pub kind: DiscountKind,
    /// Subtotal required before the code applies.
    #[serde(default)]
    pub min_subtotal: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Discount {
    pub fn percentage(code: impl Into<String>, percent: f64) -> Self {
        Self {
            code: code.into(),
            kind: DiscountKind::Percentage(percent),
            min_subtotal: None,
            active: true,
        }
    }

    pub fn fixed(code: impl Into<String>, amount: f64) -> Self {
        Self {
            code: code.into(),
            kind: DiscountKind::Fixed(amount),
            min_subtotal: None,
            active: true,
        }
    }

    pub fn with_min_subtotal(mut self, minimum: f64) -> Self {
        self.min_subtotal = Some(minimum);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether `input` names this code, ignoring case and surrounding
    /// whitespace.
    pub fn matches(&self, input: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(input.trim())
    }

    /// The amount taken off `subtotal`, rounded to cents.
    ///
    /// Never negative and never more than the subtotal.
    ///
    /// # Errors
    ///
    /// [`DiscountError::Inactive`] or [`DiscountError::MinimumNotMet`].
    pub fn amount(&self, subtotal: f64) -> Result<f64, DiscountError> {
        if !self.active {
            return Err(DiscountError::Inactive(self.code.clone()));
        }
        if let Some(minimum) = self.min_subtotal {
            if subtotal < minimum {
                return Err(DiscountError::MinimumNotMet {
                    code: self.code.clone(),
                    minimum,
                });
            }
        }

        let raw = match self.kind {
            DiscountKind::Percentage(percent) => subtotal * percent.clamp(0.0, 100.0) / 100.0,
            DiscountKind::Fixed(amount) => amount.max(0.0),
        };
        Ok(round_cents(raw.min(subtotal.max(0.0))))
    }
}

/// Finds the discount matching a shopper-entered code.
///
/// # Errors
///
/// [`DiscountError::UnknownCode`] when nothing matches.
pub fn find_discount<'a>(
    discounts: &'a [Discount],
    code: &str,
) -> Result<&'a Discount, DiscountError> {
    discounts
        .iter()
        .find(|discount| discount.matches(code))
        .ok_or_else(|| DiscountError::UnknownCode(code.trim().to_string()))
}

/// Totals shown in the order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    pub total: f64,
    /// The applied code, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

impl OrderSummary {
    /// A summary with no discount.
    pub fn new(subtotal: f64, shipping: f64) -> Self {
        let subtotal = round_cents(subtotal);
        let shipping = round_cents(shipping.max(0.0));
        Self {
            subtotal,
            discount: 0.0,
            shipping,
            total: round_cents(subtotal + shipping),
            discount_code: None,
        }
    }

    /// A summary for a cart's current subtotal.
    pub fn for_cart(cart: &Cart, shipping: f64) -> Self {
        Self::new(cart.subtotal(), shipping)
    }

    /// Applies a discount, replacing any previous one.
    ///
    /// Shipping is never discounted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_builder::{Discount, OrderSummary};
    ///
    /// let summary = OrderSummary::new(80.0, 5.0)
    ///     .with_discount(&Discount::percentage("SAVE25", 25.0))
    ///     .unwrap();
    ///
    /// assert_eq!(summary.discount, 20.0);
    /// assert_eq!(summary.total, 65.0);
    /// ```
    pub fn with_discount(mut self, discount: &Discount) -> Result<Self, DiscountError> {
        self.discount = discount.amount(self.subtotal)?;
        self.discount_code = Some(discount.code.clone());
        self.total = round_cents(self.subtotal - self.discount + self.shipping);
        tracing::debug!(code = %discount.code, amount = self.discount, "discount applied");
        Ok(self)
    }

    /// Looks up `code` in `discounts` and applies it.
    pub fn apply_code(self, discounts: &[Discount], code: &str) -> Result<Self, DiscountError> {
        let discount = find_discount(discounts, code)?;
        self.with_discount(discount)
    }
}
