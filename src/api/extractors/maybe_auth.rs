use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use std::sync::Arc;
use tracing::Span;
use super::auth::session_user;

pub struct MaybeAuthUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = session_user(parts, &app_state).await.map_err(|e| e.into_response())?;
        if let Some(user) = &user {
            Span::current().record("user_id", user.id.as_str());
        }

        Ok(MaybeAuthUser(user))
    }
}
