//! Unified error handling.
//!
//! Provides a unified `StorefrontError` that maps every failure domain to a
//! user-facing toast (message + severity) without leaking internals. UI
//! layers that drive the shop through [`crate::dispatch`] only ever need
//! this one type.

use thiserror::Error;

use crate::account::AccountError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::notify::Severity;
use crate::storage::StorageError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart or wishlist operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Checkout flow failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Persistence layer failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Account operation failed.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Toast severity for this failure.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Checkout(CheckoutError::EmptyCart) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// User-facing message.
    ///
    /// Storage and configuration details stay out of the UI; they are
    /// logged instead.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(StoreError::ProductNotFound(_)) => {
                "This product is no longer available".to_owned()
            }
            Self::Checkout(err) => match err {
                CheckoutError::EmptyCart => "Your cart is empty".to_owned(),
                CheckoutError::Validation(_) => {
                    "Please fill in all required fields".to_owned()
                }
                CheckoutError::TermsNotAccepted => {
                    "Please agree to the terms and conditions".to_owned()
                }
                CheckoutError::Store(StoreError::ProductNotFound(_)) => {
                    "This product is no longer available".to_owned()
                }
                CheckoutError::Store(_) | CheckoutError::Storage(_) => {
                    "Something went wrong placing your order".to_owned()
                }
            },
            Self::Account(AccountError::InvalidEmail(_)) => {
                "Please enter a valid email address".to_owned()
            }
            Self::Store(_) | Self::Storage(_) | Self::Account(_) | Self::Config(_) => {
                "Something went wrong, please try again".to_owned()
            }
        }
    }

    /// Log the error and return the toast pair for the presenter.
    #[must_use]
    pub fn into_toast(self) -> (String, Severity) {
        let severity = self.severity();
        match severity {
            Severity::Error => tracing::error!(error = %self, "Storefront error"),
            _ => tracing::warn!(error = %self, "Storefront warning"),
        }
        (self.user_message(), severity)
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
