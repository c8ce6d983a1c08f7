use axum::extract::FromRequestParts;
use tower_sessions::Session;

use crate::{
    error::AppError,
    session::{SESSION_KEY, SessionState},
};

/// Session context extracted per request. Missing state is created on first
/// access; call [`ShopSession::save`] after mutating `state`.
#[derive(Debug)]
pub struct ShopSession {
    pub state: SessionState,
    session: Session,
}

impl ShopSession {
    pub async fn save(&self) -> Result<(), AppError> {
        self.session.insert(SESSION_KEY, &self.state).await?;
        Ok(())
    }

    /// Drop every session-scoped entity and expire the session cookie.
    pub async fn end(self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for ShopSession
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(anyhow::anyhow!(message)))?;

        let state = session
            .get::<SessionState>(SESSION_KEY)
            .await?
            .unwrap_or_default();

        Ok(ShopSession { state, session })
    }
}
