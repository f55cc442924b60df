//! Account settings: user profile and notification/visibility toggles.
//!
//! Saved values merge over the built-in sample defaults, so a fresh profile
//! shows the demo user until something is changed.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use eliteshop_core::{Email, EmailError};

use crate::notify::{Notifier, Severity};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Errors from account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The profile email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Profile fields shown on the account page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthdate: Option<NaiveDate>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            birthdate: None,
        }
    }
}

/// Who can see the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    #[default]
    Private,
}

/// Notification and visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub profile_visibility: ProfileVisibility,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            profile_visibility: ProfileVisibility::Private,
        }
    }
}

/// Profile and settings persistence for the current user.
pub struct AccountManager {
    backend: Arc<dyn StorageBackend>,
    notifier: Arc<dyn Notifier>,
}

impl AccountManager {
    /// Create a manager over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Load the profile; saved fields merge over the sample defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Storage`] if persisted data cannot be read
    /// or decoded.
    pub fn profile(&self) -> Result<UserProfile, AccountError> {
        Ok(storage::read_json(self.backend.as_ref(), keys::PROFILE)?)
    }

    /// Validate and save the profile, then toast success.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidEmail`] (nothing saved) or
    /// [`AccountError::Storage`] if persisting fails.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), AccountError> {
        Email::parse(profile.email.trim())?;

        storage::write_json(self.backend.as_ref(), keys::PROFILE, profile)?;
        self.notifier
            .notify("Profile updated successfully!", Severity::Success);
        Ok(())
    }

    /// Load the settings; saved fields merge over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Storage`] if persisted data cannot be read
    /// or decoded.
    pub fn settings(&self) -> Result<UserSettings, AccountError> {
        Ok(storage::read_json(self.backend.as_ref(), keys::SETTINGS)?)
    }

    /// Save settings and toast.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Storage`] if persisting fails.
    pub fn save_settings(&self, settings: &UserSettings) -> Result<(), AccountError> {
        storage::write_json(self.backend.as_ref(), keys::SETTINGS, settings)?;
        self.notifier.notify("Settings saved!", Severity::Success);
        Ok(())
    }
}
