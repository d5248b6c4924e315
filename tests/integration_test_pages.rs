mod common;

use axum::http::StatusCode;
use common::{body_text, location, TestApp};
use party_booking::domain::models::testimonial::Testimonial;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_home_lists_party_types() {
    let app = TestApp::new().await;
    app.seed_party_type("Birthday Bash", 10000).await;

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Birthday Bash"));
    assert!(body.contains("100.00"));
    assert!(body.contains("Log in"));
}

#[tokio::test]
async fn test_home_shows_at_most_six_party_types() {
    let app = TestApp::new().await;
    for i in 0..8 {
        app.seed_party_type(&format!("Package {}", i), 5000).await;
    }

    let body = body_text(app.get("/", None).await).await;
    assert_eq!(body.matches("class=\"card\"").count(), 6);
}

#[tokio::test]
async fn test_services_page_lists_catalog() {
    let app = TestApp::new().await;
    app.seed_party_type("Wedding", 250000).await;
    app.seed_service("Photography", 2000).await;

    let body = body_text(app.get("/services/", None).await).await;
    assert!(body.contains("Wedding"));
    assert!(body.contains("Photography"));
    assert!(body.contains("20.00"));
}

#[tokio::test]
async fn test_party_detail() {
    let app = TestApp::new().await;
    let party = app.seed_party_type("Corporate Gala", 300000).await;

    let response = app.get(&format!("/party/{}/", party.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Corporate Gala"));

    let missing = app.get("/party/does-not-exist/", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_pages_use_error_template() {
    let app = TestApp::new().await;

    let missing = app.get("/party/does-not-exist/", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let html = body_text(missing).await;
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Party type not found"));

    let unknown = app.get("/no-such-page/", None).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    let html = body_text(unknown).await;
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_about_page() {
    let app = TestApp::new().await;
    let response = app.get("/about/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_anonymous_dashboard_redirects_to_login() {
    let app = TestApp::new().await;

    let response = app.get("/dashboard/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login/"));

    let response = app.get("/event-plan/create/", Some("not-a-real-token")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login/"));
}

#[tokio::test]
async fn test_seed_catalog_runs_once() {
    let app = TestApp::new().await;

    let inserted = party_booking::infra::factory::seed_catalog(&app.state).await.unwrap();
    assert!(inserted > 0);
    assert_eq!(app.count("party_types").await, 6);

    let again = party_booking::infra::factory::seed_catalog(&app.state).await.unwrap();
    assert_eq!(again, 0);
    assert_eq!(app.count("party_types").await, 6);
}

#[tokio::test]
async fn test_party_detail_lists_its_testimonials() {
    let app = TestApp::new().await;
    let party = app.seed_party_type("Wedding", 250000).await;
    let other = app.seed_party_type("Picnic", 5000).await;

    for (name, party_id, comment) in [
        ("Priya", &party.id, "Flawless evening"),
        ("Omar", &other.id, "Great sandwiches"),
    ] {
        let testimonial = Testimonial::new(name.into(), Some(party_id.clone()), 5, comment.into()).unwrap();
        app.state.testimonial_repo.create(&testimonial).await.unwrap();
    }

    let body = body_text(app.get(&format!("/party/{}/", party.id), None).await).await;
    assert!(body.contains("Flawless evening"));
    assert!(!body.contains("Great sandwiches"));
}

#[tokio::test]
async fn test_out_of_range_rating_writes_nothing() {
    let app = TestApp::new().await;

    assert!(Testimonial::new("Zed".into(), None, 6, "Too good".into()).is_err());
    assert!(Testimonial::new("Zed".into(), None, 0, "Too bad".into()).is_err());

    let insert = sqlx::query(
        "INSERT INTO testimonials (id, name, party_type_id, rating, comment, image, created_at) VALUES ('t1', 'Zed', NULL, 9, 'x', NULL, CURRENT_TIMESTAMP)"
    )
        .execute(&app.pool)
        .await;
    assert!(insert.is_err());
    assert_eq!(app.count("testimonials").await, 0);
}
