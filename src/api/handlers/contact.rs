use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::flash;
use crate::api::forms::{contact::ContactForm, FormErrors};
use crate::api::render::{page_context, render};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

pub async fn contact_page(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    render_form(&state, user.as_ref(), &cookies, &ContactForm::default(), &FormErrors::new())
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let message = match form.clean() {
        Ok(message) => message,
        Err(errors) => {
            let page = render_form(&state, user.as_ref(), &cookies, &form, &errors)?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let saved = state.contact_repo.create(&message).await?;
    info!("Contact message stored: {}", saved.id);

    flash::success(&cookies, "Thank you! We will contact you soon.");
    Ok(Redirect::to("/contact/").into_response())
}

fn render_form(
    state: &AppState,
    user: Option<&User>,
    cookies: &Cookies,
    form: &ContactForm,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let mut context = page_context(user, cookies);
    context.insert("form", form);
    context.insert("errors", errors);
    render(state, "contact.html", &context)
}
