//! # Auth Store
//!
//! Session state for the mobile client and the admin console.
//!
//! Credentials are checked locally first; an empty field never reaches the
//! backend. A stored token is trusted until the backend answers 401, at which
//! point it is dropped.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::User;

use crate::app::state::SessionState;
use crate::core::error::{AppError, Result};
use crate::core::service::AuthApi;

#[derive(Clone)]
pub struct AuthStore {
    state: Arc<RwLock<SessionState>>,
    api: Arc<dyn AuthApi>,
}

impl AuthStore {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            api,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        if let Err(message) = validate_credentials(email, password) {
            self.state.write().error = Some(message.clone());
            return Err(AppError::Validation(message));
        }

        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.api.login(email, password).await;

        let mut state = self.state.write();
        state.is_loading = false;
        match result {
            Ok(response) => {
                state.user = Some(response.user.clone());
                state.is_authenticated = true;
                Ok(response.user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Forget the token and the user. Local state is cleared even if the
    /// token store fails.
    pub fn logout(&self) -> Result<()> {
        let result = self.api.logout();
        *self.state.write() = SessionState::default();
        result
    }

    /// Resume a stored session on startup.
    ///
    /// Returns whether the user is signed in afterwards. Only a 401 discards
    /// the token; other failures leave it for the next attempt.
    pub async fn restore_session(&self) -> bool {
        if !self.api.has_session() {
            return false;
        }

        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.api.current_user().await;

        let expired = matches!(&result, Err(e) if e.is_unauthorized());
        if expired {
            tracing::info!("Stored session expired");
            if let Err(e) = self.api.logout() {
                tracing::warn!(error = %e, "Failed to clear expired token");
            }
        }

        let mut state = self.state.write();
        state.is_loading = false;
        match result {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Session restored");
                state.user = Some(user);
                state.is_authenticated = true;
                true
            }
            Err(_) if expired => {
                state.user = None;
                state.is_authenticated = false;
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed");
                state.error = Some(e.to_string());
                false
            }
        }
    }
}

fn validate_credentials(email: &str, password: &str) -> std::result::Result<(), String> {
    lib_utils::validate_not_empty(email, "Email")?;
    lib_utils::validate_not_empty(password, "Password")
}
