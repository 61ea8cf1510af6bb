//! # Auth Collaborator
//!
//! The login gate's external identity provider, behind a pluggable trait.
//!
//! ## Why a Trait?
//! The OTP flow is a placeholder for a real third-party provider. Putting it
//! behind [`AuthProvider`] means a real provider can be substituted without
//! touching any billing logic - the terminal only ever sees
//! `request_code` / `verify_code`.
//!
//! The shipped [`StubAuthProvider`] mirrors the placeholder the product
//! started with: it logs the request instead of sending an SMS and accepts
//! any well-formed 6-digit code.

use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use zweeti_core::validation::{validate_otp_code, validate_phone};

/// Errors from the auth collaborator.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The phone number didn't pass format checks.
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// The OTP code didn't pass format checks or didn't match.
    #[error("invalid OTP. Please try again.")]
    InvalidCode,

    /// `verify_code` called before `request_code`.
    #[error("no OTP was requested for this session")]
    CodeNotRequested,

    /// The provider itself failed (network, quota, ...).
    #[error("auth provider error: {0}")]
    Provider(String),
}

/// A pluggable phone+OTP identity provider.
///
/// Both calls are network-bound for a real provider, hence async; the core
/// never blocks on them.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sends (or pretends to send) a one-time code to `phone`.
    async fn request_code(&self, phone: &str) -> Result<(), AuthError>;

    /// Verifies the code for the pending request.
    ///
    /// ## Returns
    /// An opaque user id on success.
    async fn verify_code(&self, code: &str) -> Result<String, AuthError>;
}

/// Permissive stand-in for a real identity provider.
///
/// Accepts any well-formed phone and any 6-digit code. The returned user id
/// is opaque and fresh per sign-in.
#[derive(Debug, Default)]
pub struct StubAuthProvider {
    pending_phone: Mutex<Option<String>>,
}

impl StubAuthProvider {
    pub fn new() -> Self {
        StubAuthProvider::default()
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn request_code(&self, phone: &str) -> Result<(), AuthError> {
        validate_phone(phone).map_err(|e| AuthError::InvalidPhone(e.to_string()))?;

        let phone = phone.trim().to_string();
        info!(phone = %phone, "OTP requested (stub - no SMS is sent)");

        let mut pending = self.pending_phone.lock().expect("auth mutex poisoned");
        *pending = Some(phone);
        Ok(())
    }

    async fn verify_code(&self, code: &str) -> Result<String, AuthError> {
        let phone = {
            let pending = self.pending_phone.lock().expect("auth mutex poisoned");
            pending.clone().ok_or(AuthError::CodeNotRequested)?
        };

        validate_otp_code(code).map_err(|_| AuthError::InvalidCode)?;

        // Any 6-digit code passes; a real provider checks it server-side.
        let user_id = format!("stub-{}", Uuid::new_v4());
        info!(phone = %phone, user_id = %user_id, "OTP verified (stub)");

        let mut pending = self.pending_phone.lock().expect("auth mutex poisoned");
        *pending = None;

        Ok(user_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
