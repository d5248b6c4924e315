use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tera::Context;
use tower_cookies::Cookies;
use tracing::error;
use crate::api::flash::{self, FlashMessage};
use crate::domain::models::{auth::UserProfile, user::User};
use crate::error::{AppError, ErrorPage};
use crate::state::AppState;

/// Base context shared by every page: the signed-in user and pending notices.
pub fn page_context(user: Option<&User>, cookies: &Cookies) -> Context {
    let mut context = Context::new();
    if let Some(user) = user {
        context.insert("current_user", &UserProfile {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name().to_string(),
        });
    }
    context.insert("messages", &flash::take(cookies));
    context
}

pub fn render(state: &AppState, template: &str, context: &Context) -> Result<Html<String>, AppError> {
    let body = state.templates.render(template, context)?;
    Ok(Html(body))
}

/// Replaces the plain-text body of an `AppError` response with the site's error page.
pub async fn render_error_pages(State(state): State<Arc<AppState>>, response: Response) -> Response {
    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let mut context = Context::new();
    context.insert("status", &page.status.as_u16());
    context.insert("message", &page.message);
    context.insert("messages", &Vec::<FlashMessage>::new());

    match state.templates.render("error.html", &context) {
        Ok(body) => (page.status, Html(body)).into_response(),
        Err(e) => {
            error!("Error page failed to render: {:?}", e);
            response
        }
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
