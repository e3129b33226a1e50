//! Mocked account endpoint logic: password change against an in-memory secret.
//!
//! Uses constant-time comparison when checking the current password.

use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::i18n::{Lang, Message};
use crate::models::{ChangePasswordRequest, PasswordChanged};

/// Minimum accepted length of a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A single mocked account.
pub struct AccountService {
    password: RwLock<String>,
    delay: Duration,
}

impl AccountService {
    pub fn new(password: impl Into<String>, delay: Duration) -> Self {
        Self {
            password: RwLock::new(password.into()),
            delay,
        }
    }

    /// Change the password. Every rejection yields the same generic failure.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
        lang: Lang,
    ) -> Result<PasswordChanged, AppError> {
        tokio::time::sleep(self.delay).await;

        let failed = || AppError::BadRequest(Message::PasswordChangeFailed.text(lang).to_string());

        let mut password = self
            .password
            .write()
            .map_err(|_| AppError::Internal("Account lock poisoned".to_string()))?;

        if !constant_time_compare(&request.current_password, &password) {
            tracing::debug!("Password change rejected: current password mismatch");
            return Err(failed());
        }
        if request.new_password.chars().count() < MIN_PASSWORD_LEN {
            tracing::debug!("Password change rejected: new password too short");
            return Err(failed());
        }
        if request.new_password == request.current_password {
            tracing::debug!("Password change rejected: new password unchanged");
            return Err(failed());
        }

        *password = request.new_password.clone();
        tracing::info!("Account password changed");

        Ok(PasswordChanged {
            changed_at: Utc::now().to_rfc3339(),
        })
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
