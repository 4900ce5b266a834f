//! Checkout form record, validation, and derived order totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of required checkout fields.
pub const REQUIRED_FIELD_COUNT: usize = 8;

/// Subtotal at or above which shipping is free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(2500, 0, 0, false, 2);

/// Flat shipping fee below the free-shipping threshold.
const SHIPPING_FEE: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Tax rate applied to the subtotal (8%).
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// The checkout form: contact and shipping fields collected before an order
/// is placed.
///
/// All eight fields are required to be non-empty before the order can be
/// confirmed. Serializes in camelCase; this is the exact shape persisted to
/// storage on confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl CheckoutInfo {
    /// Human-readable labels of the required fields that are still empty.
    ///
    /// Whitespace-only values count as empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &str); REQUIRED_FIELD_COUNT] = [
            ("Email", &self.email),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Address", &self.address),
            ("Phone number", &self.phone_number),
            ("City", &self.city),
            ("Postal code", &self.postal_code),
            ("Country", &self.country),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// True if every required field is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Derived order totals.
///
/// Pure derivation from the cart subtotal; recomputed on every render and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals for a subtotal: free shipping at or above 25.00, else
    /// a flat 4.99; tax at 8% of the subtotal, rounded to cents.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            SHIPPING_FEE
        };
        let tax = (subtotal * TAX_RATE).round_dp(2);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// True when the order qualified for free shipping.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
