//! Cart page view models and promo-code validation.

use eliteshop_core::{Price, ProductId};

use crate::checkout::OrderTotals;
use crate::config::StoreConfig;
use crate::store::{CartLine, CartStore};

/// One cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
    pub image: String,
}

impl From<&CartLine> for CartRowView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price: line.price.display(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
            image: line.image.clone(),
        }
    }
}

/// Formatted order summary figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub subtotal: String,
    /// "Free" once the threshold is met, the fee otherwise.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<&OrderTotals> for TotalsView {
    fn from(totals: &OrderTotals) -> Self {
        Self {
            subtotal: totals.subtotal.display(),
            shipping: if totals.free_shipping() {
                "Free".to_owned()
            } else {
                totals.shipping.display()
            },
            tax: totals.tax.display(),
            total: totals.total.display(),
        }
    }
}

/// Free-shipping banner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeShippingNotice {
    /// "You've qualified for free shipping!"
    Qualified,
    /// "Add $X more for free shipping"
    AddMore(String),
}

/// The whole cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageView {
    pub rows: Vec<CartRowView>,
    /// Distinct lines, for the "Cart Items (N)" header.
    pub line_count: usize,
    /// Σ quantities, for the subtotal label.
    pub item_count: u32,
    pub totals: TotalsView,
    pub notice: FreeShippingNotice,
}

impl CartPageView {
    /// Whether the empty-cart placeholder should render instead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the cart page from the store.
#[must_use]
pub fn build(store: &CartStore, config: &StoreConfig) -> CartPageView {
    let subtotal = store.cart_total();
    let totals = OrderTotals::from_subtotal(subtotal, config);

    let notice = if totals.free_shipping() {
        FreeShippingNotice::Qualified
    } else {
        let remaining = Price::new(
            config.shipping_threshold.amount() - subtotal.amount(),
            subtotal.currency_code(),
        );
        FreeShippingNotice::AddMore(remaining.display())
    };

    CartPageView {
        rows: store.cart().iter().map(CartRowView::from).collect(),
        line_count: store.cart().len(),
        item_count: store.item_count(),
        totals: TotalsView::from(&totals),
        notice,
    }
}

// =============================================================================
// Promo codes
// =============================================================================

/// Accepted promo codes and their discount percentages.
pub const PROMO_CODES: [(&str, u8); 3] = [("SAVE10", 10), ("WELCOME20", 20), ("FLASH50", 50)];

/// Promo-code validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoError {
    /// The input was blank.
    Empty,
    /// The code is not one of the accepted codes.
    Invalid,
}

/// Validate a promo code, returning its discount percentage.
///
/// Codes are case-insensitive and whitespace-tolerant.
///
/// # Errors
///
/// Returns [`PromoError::Empty`] for blank input and [`PromoError::Invalid`]
/// for an unknown code.
pub fn apply_promo_code(code: &str) -> Result<u8, PromoError> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(PromoError::Empty);
    }

    PROMO_CODES
        .iter()
        .find(|(known, _)| *known == normalized)
        .map(|&(_, percent)| percent)
        .ok_or(PromoError::Invalid)
}
