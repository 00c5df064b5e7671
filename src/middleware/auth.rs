use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guard requiring an authenticated session on protected routes.
///
/// Guild-level authorization is not decided here; the settings service runs
/// the per-guild ability check against live Discord state. The guard only
/// establishes who is calling.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in user and returns their Discord ID.
    ///
    /// # Returns
    /// - `Ok(user_id)` - The authenticated user's Discord ID
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No session identity
    pub async fn require_user(&self) -> Result<u64, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        Ok(user_id)
    }
}
