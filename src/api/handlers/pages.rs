use axum::{extract::{Path, State}, response::Html};
use std::sync::Arc;
use tower_cookies::Cookies;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::render::{page_context, render};
use crate::error::AppError;
use crate::state::AppState;

const HOME_PARTY_TYPES: i64 = 6;
const HOME_TESTIMONIALS: i64 = 3;

pub async fn home(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let party_types = state.party_type_repo.list(Some(HOME_PARTY_TYPES)).await?;
    let testimonials = state.testimonial_repo.list(Some(HOME_TESTIMONIALS)).await?;

    let mut context = page_context(user.as_ref(), &cookies);
    context.insert("party_types", &party_types);
    context.insert("testimonials", &testimonials);
    render(&state, "home.html", &context)
}

pub async fn services(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let party_types = state.party_type_repo.list(None).await?;
    let services = state.service_repo.list().await?;

    let mut context = page_context(user.as_ref(), &cookies);
    context.insert("party_types", &party_types);
    context.insert("services", &services);
    render(&state, "services.html", &context)
}

pub async fn party_detail(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Path(party_type_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let party_type = state.party_type_repo.find_by_id(&party_type_id).await?
        .ok_or(AppError::NotFound("Party type not found".into()))?;
    let testimonials = state.testimonial_repo.list_by_party_type(&party_type.id).await?;

    let mut context = page_context(user.as_ref(), &cookies);
    context.insert("party_type", &party_type);
    context.insert("testimonials", &testimonials);
    render(&state, "party_detail.html", &context)
}

pub async fn about(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let context = page_context(user.as_ref(), &cookies);
    render(&state, "about.html", &context)
}
