use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session_id";
pub const LOGIN_PATH: &str = "/login/";

/// Signed-in user. Anonymous requests are redirected to the login page.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match session_user(parts, &app_state).await {
            Ok(Some(user)) => {
                Span::current().record("user_id", user.id.as_str());
                Ok(AuthUser(user))
            }
            Ok(None) => Err(Redirect::to(LOGIN_PATH).into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Resolves the session cookie to its user, if the session is still live.
pub(crate) async fn session_user(parts: &Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let cookies = parts.extensions.get::<Cookies>()
        .ok_or_else(|| AppError::InternalWithMsg("Cookie layer missing".into()))?;

    let Some(cookie) = cookies.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    state.auth_service.resolve(cookie.value()).await
}
