use axum::{
    body::Body,
    extract::Request,
    middleware::map_response_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, contact, dashboard, event_plan, health, pages};
use crate::api::render::{not_found, render_error_pages};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public pages
        .route("/", get(pages::home))
        .route("/services/", get(pages::services))
        .route("/party/{id}/", get(pages::party_detail))
        .route("/about/", get(pages::about))
        .route("/contact/", get(contact::contact_page).post(contact::submit_contact))

        // Accounts
        .route("/signup/", get(auth::signup_page).post(auth::signup))
        .route("/login/", get(auth::login_page).post(auth::login))
        .route("/logout/", post(auth::logout))

        // Planning & booking
        .route("/dashboard/", get(dashboard::dashboard))
        .route("/event-plan/create/", get(event_plan::create_event_plan_page).post(event_plan::create_event_plan))
        .route("/booking/{plan_id}/", get(booking::booking_page).post(booking::confirm_booking))
        .route("/booking-details/{booking_id}/", get(booking::booking_details))
        .fallback(not_found)

        .layer(map_response_with_state(state.clone(), render_error_pages))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
