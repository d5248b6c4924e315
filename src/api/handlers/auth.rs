use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use tracing::{info, warn};
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::flash;
use crate::api::forms::{signup::SignupForm, FormErrors};
use crate::api::render::{page_context, render};
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

const DASHBOARD_PATH: &str = "/dashboard/";
const INVALID_LOGIN: &str = "Invalid email or password.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn signup_page(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }
    let page = render_signup(&state, &cookies, &SignupForm::default(), &FormErrors::new())?;
    Ok(page.into_response())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    let data = match form.clean() {
        Ok(data) => data,
        Err(errors) => return signup_rejected(&state, &cookies, &form, &errors),
    };

    let user = match state.auth_service
        .register(data.email, data.first_name, data.last_name, &data.password)
        .await
    {
        Ok(user) => user,
        Err(AppError::Conflict(msg)) => {
            let mut errors = FormErrors::new();
            errors.add("email", msg);
            return signup_rejected(&state, &cookies, &form, &errors);
        }
        Err(e) => return Err(e),
    };

    let token = state.auth_service.login(&user).await?;
    set_session_cookie(&cookies, &token, &state.config);

    flash::success(&cookies, "Account created successfully!");
    Ok(Redirect::to(DASHBOARD_PATH).into_response())
}

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }
    let page = render_login(&state, &cookies, "", None)?;
    Ok(page.into_response())
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    let email = form.email.trim().to_lowercase();
    let user = if email.is_empty() || form.password.is_empty() {
        None
    } else {
        state.auth_service.authenticate(&email, &form.password).await?
    };

    let Some(user) = user else {
        let page = render_login(&state, &cookies, &email, Some(INVALID_LOGIN))?;
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    };

    let token = state.auth_service.login(&user).await?;
    set_session_cookie(&cookies, &token, &state.config);

    info!("User logged in: {}", user.id);
    flash::success(&cookies, format!("Welcome back, {}!", user.display_name()));
    Ok(Redirect::to(DASHBOARD_PATH).into_response())
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Err(e) = state.auth_service.logout(cookie.value()).await {
            warn!("Failed to delete session on logout: {}", e);
        }
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out");
    flash::info(&cookies, "You have been logged out.");
    Ok(Redirect::to("/").into_response())
}

fn set_session_cookie(cookies: &Cookies, token: &str, config: &Config) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(config.secure_cookies);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(config.session_ttl_hours));
    cookies.add(cookie);
}

fn signup_rejected(
    state: &AppState,
    cookies: &Cookies,
    form: &SignupForm,
    errors: &FormErrors,
) -> Result<Response, AppError> {
    let page = render_signup(state, cookies, form, errors)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}

fn render_signup(
    state: &AppState,
    cookies: &Cookies,
    form: &SignupForm,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let mut context = page_context(None, cookies);
    context.insert("form", form);
    context.insert("errors", errors);
    render(state, "signup.html", &context)
}

fn render_login(
    state: &AppState,
    cookies: &Cookies,
    email: &str,
    error: Option<&str>,
) -> Result<Html<String>, AppError> {
    let mut context = page_context(None, cookies);
    context.insert("email", email);
    if let Some(error) = error {
        context.insert("login_error", error);
    }
    render(state, "login.html", &context)
}
