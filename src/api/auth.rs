//! Authentication Endpoints

use super::{ApiClient, Method, Transport};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, SessionUser};
use crate::session::{derive_user, KeyValueStore};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Log in and persist the session; returns the derived profile
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .send_json(Method::Post, "/Authenticate/login", &body)
            .await?
            .into_json()?;

        let token = response
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("Token não encontrado na resposta da API.".into()))?;

        let user = derive_user(email, token, &response);
        self.session().start(token, &user);
        log::info!("[AUTH] Logged in as {} ({})", user.username, user.role);
        Ok(user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/Authenticate/register", request).await?;
        Ok(())
    }
}
