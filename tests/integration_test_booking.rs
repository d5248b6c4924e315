mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_text, location, TestApp};
use party_booking::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use party_booking::domain::services::booking_service::{place_booking, Placement, MAX_CODE_ATTEMPTS};
use rust_decimal_macros::dec;
use std::collections::HashSet;
use tokio::task::JoinSet;
use tower::ServiceExt;

async fn planned(app: &TestApp, email: &str) -> (String, String) {
    let session = app.signup(email).await;
    let party = app.seed_party_type("Birthday Bash", 10000).await;
    let photo = app.seed_service("Photography", 2000).await;
    let music = app.seed_service("DJ", 1500).await;
    let plan_id = app.create_plan(&session, &party.id, &[&photo.id, &music.id], 30).await;
    (session, plan_id)
}

fn booking_id_from(target: &str) -> String {
    target
        .trim_start_matches("/booking-details/")
        .trim_end_matches('/')
        .to_string()
}

#[tokio::test]
async fn test_booking_preview() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "preview@example.com").await;

    let response = app.get(&format!("/booking/{}/", plan_id), Some(&session)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("135.00"));
    assert!(body.contains("35.00"));
    assert!(body.contains("67.50"));
    assert_eq!(app.count("bookings").await, 0);
}

#[tokio::test]
async fn test_confirm_booking() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "confirm@example.com").await;

    let response = app.post_form(&format!("/booking/{}/", plan_id), "", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response).unwrap();
    assert!(target.starts_with("/booking-details/"));

    let user = app.state.user_repo.find_by_email("confirm@example.com").await.unwrap().unwrap();
    let booking = app.state.booking_repo.find_by_id(&user.id, &booking_id_from(&target)).await.unwrap().unwrap();

    assert_eq!(booking.event_plan_id, plan_id);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert!(!booking.is_paid);
    assert_eq!(booking.payment_amount, dec!(135.00));
    assert_eq!(booking.advance_payment, dec!(67.50));
    assert_eq!(booking.confirmation_code.len(), 8);
    assert!(booking.confirmation_code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    let details = app.get(&target, Some(&session)).await;
    assert_eq!(details.status(), StatusCode::OK);
    assert!(body_text(details).await.contains(&booking.confirmation_code));
}

#[tokio::test]
async fn test_booked_plan_redirects_to_existing_booking() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "again@example.com").await;
    let uri = format!("/booking/{}/", plan_id);

    let first = app.post_form(&uri, "", Some(&session)).await;
    let target = location(&first).unwrap();

    let revisit = app.get(&uri, Some(&session)).await;
    assert_eq!(revisit.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&revisit).as_deref(), Some(target.as_str()));

    let second = app.post_form(&uri, "", Some(&session)).await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&second).as_deref(), Some(target.as_str()));

    assert_eq!(app.count("bookings").await, 1);
}

#[tokio::test]
async fn test_second_booking_row_violates_uniqueness() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "unique@example.com").await;
    app.post_form(&format!("/booking/{}/", plan_id), "", Some(&session)).await;

    let user = app.state.user_repo.find_by_email("unique@example.com").await.unwrap().unwrap();
    let duplicate = Booking::new(NewBookingParams {
        user_id: user.id,
        event_plan_id: plan_id,
        status: BookingStatus::Confirmed,
        payment_amount: dec!(135.00),
        advance_payment: dec!(67.50),
    });

    let err = app.state.booking_repo.create(&duplicate).await.unwrap_err();
    assert!(err.is_unique_violation());
    assert_eq!(app.count("bookings").await, 1);
}

#[tokio::test]
async fn test_other_users_cannot_see_or_book() {
    let app = TestApp::new().await;
    let (owner, plan_id) = planned(&app, "owner@example.com").await;
    let intruder = app.signup("intruder@example.com").await;

    let preview = app.get(&format!("/booking/{}/", plan_id), Some(&intruder)).await;
    assert_eq!(preview.status(), StatusCode::NOT_FOUND);

    let confirm = app.post_form(&format!("/booking/{}/", plan_id), "", Some(&intruder)).await;
    assert_eq!(confirm.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.count("bookings").await, 0);

    let booked = app.post_form(&format!("/booking/{}/", plan_id), "", Some(&owner)).await;
    let target = location(&booked).unwrap();

    let details = app.get(&target, Some(&intruder)).await;
    assert_eq!(details.status(), StatusCode::NOT_FOUND);

    let missing = app.get("/booking-details/unknown/", Some(&owner)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_lists_plans_and_spend() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "dash@example.com").await;

    let before = body_text(app.get("/dashboard/", Some(&session)).await).await;
    assert!(before.contains("Birthday Bash"));
    assert!(before.contains("Book now"));

    app.post_form(&format!("/booking/{}/", plan_id), "", Some(&session)).await;

    let after = body_text(app.get("/dashboard/", Some(&session)).await).await;
    assert!(after.contains("View booking"));
    assert!(after.contains("Total spent: $135.00"));
}

#[tokio::test]
async fn test_preview_and_confirm_use_current_prices() {
    let app = TestApp::new().await;
    let session = app.signup("reprice@example.com").await;
    let party = app.seed_party_type("Baby Shower", 10000).await;
    let balloons = app.seed_service("Balloons", 2000).await;
    let plan_id = app.create_plan(&session, &party.id, &[&balloons.id], 20).await;

    sqlx::query("UPDATE services SET price_cents = 3000 WHERE id = ?")
        .bind(&balloons.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let preview = body_text(app.get(&format!("/booking/{}/", plan_id), Some(&session)).await).await;
    assert!(preview.contains("130.00"));
    assert!(preview.contains("65.00"));
    assert!(!preview.contains("120.00"));

    let response = app.post_form(&format!("/booking/{}/", plan_id), "", Some(&session)).await;
    let target = location(&response).unwrap();

    let user = app.state.user_repo.find_by_email("reprice@example.com").await.unwrap().unwrap();
    let booking = app.state.booking_repo.find_by_id(&user.id, &booking_id_from(&target)).await.unwrap().unwrap();
    assert_eq!(booking.payment_amount, dec!(130.00));
    assert_eq!(booking.advance_payment, dec!(65.00));
}

#[tokio::test]
async fn test_concurrent_confirmations_create_one_booking() {
    let app = TestApp::new().await;
    let (session, plan_id) = planned(&app, "race@example.com").await;
    let uri = format!("/booking/{}/", plan_id);

    let mut requests = JoinSet::new();
    for _ in 0..8 {
        let router = app.router.clone();
        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, format!("session_id={}", session))
            .body(Body::empty())
            .unwrap();
        requests.spawn(async move { router.oneshot(request).await.unwrap() });
    }

    let mut targets = HashSet::new();
    while let Some(response) = requests.join_next().await {
        let response = response.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        targets.insert(location(&response).unwrap());
    }

    assert_eq!(targets.len(), 1);
    assert_eq!(app.count("bookings").await, 1);
}

fn booking_for(user_id: &str, plan_id: &str, code: &str) -> Booking {
    let mut booking = Booking::new(NewBookingParams {
        user_id: user_id.to_string(),
        event_plan_id: plan_id.to_string(),
        status: BookingStatus::Confirmed,
        payment_amount: dec!(135.00),
        advance_payment: dec!(67.50),
    });
    booking.confirmation_code = code.to_string();
    booking
}

#[tokio::test]
async fn test_code_collision_draws_a_new_code() {
    let app = TestApp::new().await;
    let (session, first_plan) = planned(&app, "collide@example.com").await;
    let party = app.seed_party_type("Retirement", 5000).await;
    let second_plan = app.create_plan(&session, &party.id, &[], 10).await;
    let user = app.state.user_repo.find_by_email("collide@example.com").await.unwrap().unwrap();
    let repo = app.state.booking_repo.as_ref();

    app.state.booking_repo.create(&booking_for(&user.id, &first_plan, "AAAAAAAA")).await.unwrap();

    let placed = place_booking(repo, booking_for(&user.id, &second_plan, "AAAAAAAA"), || "BBBBBBBB".to_string())
        .await
        .unwrap();

    match placed {
        Placement::Created(booking) => {
            assert_eq!(booking.event_plan_id, second_plan);
            assert_eq!(booking.confirmation_code, "BBBBBBBB");
        }
        other => panic!("expected a new booking, got {:?}", other),
    }
    assert_eq!(app.count("bookings").await, 2);
}

#[tokio::test]
async fn test_code_collisions_give_up_after_max_attempts() {
    let app = TestApp::new().await;
    let (session, first_plan) = planned(&app, "unlucky@example.com").await;
    let party = app.seed_party_type("Graduation", 5000).await;
    let second_plan = app.create_plan(&session, &party.id, &[], 10).await;
    let user = app.state.user_repo.find_by_email("unlucky@example.com").await.unwrap().unwrap();

    app.state.booking_repo.create(&booking_for(&user.id, &first_plan, "AAAAAAAA")).await.unwrap();

    let mut draws = 0;
    let result = place_booking(
        app.state.booking_repo.as_ref(),
        booking_for(&user.id, &second_plan, "AAAAAAAA"),
        || {
            draws += 1;
            "AAAAAAAA".to_string()
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(draws, MAX_CODE_ATTEMPTS - 1);
    assert_eq!(app.count("bookings").await, 1);
}

#[tokio::test]
async fn test_placing_a_booked_plan_returns_the_existing_booking() {
    let app = TestApp::new().await;
    let (_session, plan_id) = planned(&app, "twice@example.com").await;
    let user = app.state.user_repo.find_by_email("twice@example.com").await.unwrap().unwrap();
    let repo = app.state.booking_repo.as_ref();

    let first = place_booking(repo, booking_for(&user.id, &plan_id, "CCCCCCCC"), || "DDDDDDDD".to_string())
        .await
        .unwrap();
    assert!(matches!(first, Placement::Created(_)));

    let second = place_booking(repo, booking_for(&user.id, &plan_id, "EEEEEEEE"), || "FFFFFFFF".to_string())
        .await
        .unwrap();

    match second {
        Placement::AlreadyBooked(existing) => {
            assert_eq!(existing.id, first.booking().id);
            assert_eq!(existing.confirmation_code, "CCCCCCCC");
        }
        other => panic!("expected the existing booking, got {:?}", other),
    }
    assert_eq!(app.count("bookings").await, 1);
}
