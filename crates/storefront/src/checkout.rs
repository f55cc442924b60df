//! Checkout flow: step wizard, validation, totals, and order placement.
//!
//! The flow is a three-step wizard (Shipping → Payment → Review). Each
//! advance validates the current step and surfaces per-field errors as
//! data; nothing panics on bad input.
//!
//! Order placement is an explicit two-state transition
//! (`Submitted` → `Confirmed`) driven by an injected [`PaymentGateway`].
//! No cart or history state changes until the gateway resolves, so
//! dropping the in-flight future is a clean cancel. The simulated gateway
//! always succeeds after its fixed pause; there is no real payment
//! processing anywhere.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use eliteshop_core::{Email, OrderStatus, PaymentMethod, Price};

use crate::config::StoreConfig;
use crate::orders::{Order, OrderHistory, PaymentSnapshot, ShippingAddress, generate_order_id};
use crate::store::{CartStore, StoreError};
use crate::storage::StorageError;

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more form fields failed validation.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The terms checkbox was not ticked at submission.
    #[error("terms and conditions not accepted")]
    TermsNotAccepted,

    /// A cart operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Persisting the order failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A single invalid form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field identifier (e.g. `email`, `card_number`).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "This field is required".to_owned(),
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Order totals as shown on the cart page, checkout sidebar, and receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Price,
    /// Zero at or above the free-shipping threshold, flat fee below it.
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderTotals {
    /// Compute shipping, tax, and grand total from a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Price, config: &StoreConfig) -> Self {
        let shipping = if subtotal.amount() >= config.shipping_threshold.amount() {
            Price::zero(subtotal.currency_code())
        } else {
            config.shipping_fee
        };
        let tax = Price::new(subtotal.amount() * config.tax_rate, subtotal.currency_code());
        let total = subtotal.plus(&shipping).plus(&tax);

        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Whether the order qualifies for free shipping.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Wizard steps
// =============================================================================

/// Checkout wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    /// 1-based step number for progress indicators.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    /// Progress label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Shipping => None,
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Raw shipping form input.
#[derive(Debug, Clone, Default)]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; the only non-required shipping field.
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingForm {
    /// Validate and capture a shipping address snapshot.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the whole form can be marked.
    pub fn validate(&self) -> Result<ShippingAddress, Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        let email = match Email::parse(self.email.trim()) {
            Ok(email) => Some(email),
            Err(e) => {
                if !self.email.trim().is_empty() {
                    errors.push(FieldError {
                        field: "email",
                        message: e.to_string(),
                    });
                }
                None
            }
        };

        match email {
            Some(email) if errors.is_empty() => Ok(ShippingAddress {
                first_name: self.first_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                email,
                phone: if self.phone.trim().is_empty() {
                    None
                } else {
                    Some(self.phone.trim().to_owned())
                },
                address: self.address.trim().to_owned(),
                city: self.city.trim().to_owned(),
                state: self.state.trim().to_owned(),
                zip_code: self.zip_code.trim().to_owned(),
                country: self.country.trim().to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw payment form input.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl PaymentForm {
    /// Validate and capture a payment snapshot.
    ///
    /// Card fields are only required for the card method. No real card
    /// validation happens: this is the simulated flow, so presence checks
    /// are the whole story, and only the last four digits are kept.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<PaymentSnapshot, Vec<FieldError>> {
        if self.method == PaymentMethod::Paypal {
            return Ok(PaymentSnapshot {
                method: PaymentMethod::Paypal,
                card_last4: None,
            });
        }

        let mut errors = Vec::new();
        for (field, value) in [
            ("card_number", &self.card_number),
            ("expiry_date", &self.expiry_date),
            ("cvv", &self.cvv),
            ("card_name", &self.card_name),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let digits: String = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let last4 = if digits.len() >= 4 {
            digits.get(digits.len() - 4..).map(str::to_owned)
        } else {
            None
        };

        Ok(PaymentSnapshot {
            method: PaymentMethod::Card,
            card_last4: last4,
        })
    }
}

// =============================================================================
// Payment gateway
// =============================================================================

/// The simulated payment processor seam.
///
/// Production uses [`SimulatedGateway`]; tests inject [`InstantGateway`]
/// for deterministic, immediate resolution.
pub trait PaymentGateway: Send + Sync {
    /// Resolve when the (simulated) payment has been processed.
    fn process_payment(&self) -> impl Future<Output = ()> + Send;
}

/// Gateway that pauses for a fixed processing delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway with the given processing delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a gateway using the configured processing delay.
    #[must_use]
    pub const fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.payment_processing_delay)
    }
}

impl PaymentGateway for SimulatedGateway {
    fn process_payment(&self) -> impl Future<Output = ()> + Send {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Gateway that resolves immediately (deterministic tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantGateway;

impl PaymentGateway for InstantGateway {
    fn process_payment(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

// =============================================================================
// Flow
// =============================================================================

/// Payment state of the current checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The order was submitted; the gateway is processing.
    Submitted,
    /// The gateway resolved and the order was recorded.
    Confirmed,
}

/// The three-step checkout wizard.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    state: PaymentState,
    pub shipping: ShippingForm,
    pub payment: PaymentForm,
    pub terms_accepted: bool,
}

impl CheckoutFlow {
    /// Start a fresh checkout at the shipping step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The step currently shown.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The payment state of this checkout.
    #[must_use]
    pub const fn state(&self) -> PaymentState {
        self.state
    }

    /// Advance to the next step after validating the current one.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] with every failing field;
    /// the step does not advance.
    pub fn next_step(&mut self) -> Result<(), CheckoutError> {
        match self.step {
            CheckoutStep::Shipping => {
                self.shipping.validate().map_err(CheckoutError::Validation)?;
            }
            CheckoutStep::Payment => {
                self.payment.validate().map_err(CheckoutError::Validation)?;
            }
            CheckoutStep::Review => {}
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Go back one step. Validation never blocks going backwards.
    pub fn previous_step(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Submit the order.
    ///
    /// Validates everything up front, transitions to
    /// [`PaymentState::Submitted`], waits for the gateway, then records the
    /// order (newest first), clears the cart, and transitions to
    /// [`PaymentState::Confirmed`]. Dropping the returned future while the
    /// gateway is pending cancels the submission with no state mutated.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`], [`CheckoutError::TermsNotAccepted`],
    /// or [`CheckoutError::Validation`] before submission; storage failures
    /// after the gateway resolves.
    pub async fn place_order<G: PaymentGateway>(
        &mut self,
        gateway: &G,
        store: &mut CartStore,
        history: &mut OrderHistory,
        config: &StoreConfig,
    ) -> Result<Order, CheckoutError> {
        if store.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if !self.terms_accepted {
            return Err(CheckoutError::TermsNotAccepted);
        }

        let shipping = self.shipping.validate().map_err(CheckoutError::Validation)?;
        let payment = self.payment.validate().map_err(CheckoutError::Validation)?;

        self.state = PaymentState::Submitted;
        tracing::debug!("Order submitted, processing payment");
        gateway.process_payment().await;

        let placed_at = Utc::now();
        let totals = OrderTotals::from_subtotal(store.cart_total(), config);
        let order = Order {
            id: generate_order_id(placed_at),
            placed_at,
            status: OrderStatus::Processing,
            shipping,
            payment,
            items: store.cart().to_vec(),
            total: totals.total,
        };

        history.record(order.clone())?;
        store.clear_cart_silent()?;
        self.state = PaymentState::Confirmed;

        Ok(order)
    }
}
