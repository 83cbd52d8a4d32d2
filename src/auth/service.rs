use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    auth::{
        dto::LoginResponse,
        jwt::JwtSigner,
        password::verify_password,
        repo::UserStore,
    },
    error::AuthError,
};

/// Verifies credentials against the user store and mints session tokens.
///
/// The signing secret is injected at construction so the flow can run without
/// touching process-global state.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    jwt_secret: Option<String>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn UserStore>, jwt_secret: Option<String>) -> Self {
        Self { store, jwt_secret }
    }

    /// Linear flow: lookup, verify hash, check secret, sign. Any failure
    /// aborts immediately; a token is never produced for an unverified user.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "login unknown email");
                AuthError::UserNotFound
            })?;

        if !verify_password(password, &user.password_hash)? {
            warn!(email = %email, user_id = %user.id, "login invalid password");
            return Err(AuthError::PasswordIncorrect);
        }

        let secret = self
            .jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                warn!("jwt secret not configured");
                AuthError::JwtKeyMissing
            })?;

        let token = JwtSigner::new(secret).sign(user.id)?;

        info!(user_id = %user.id, email = %user.email, "user logged in");
        Ok(LoginResponse {
            token,
            message: "user logged.".to_string(),
        })
    }
}
