use party_booking::{
    api::router::create_router,
    config::Config,
    domain::models::{money::from_cents, party_type::PartyType, service::Service},
    infra::factory::{build_templates, sqlite_state},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;

pub const PASSWORD: &str = "Confetti-Cannon-77";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            session_ttl_hours: 336,
            secure_cookies: false,
            log_dir: "./logs".to_string(),
            seed_catalog: false,
        };

        let templates = Arc::new(build_templates().expect("Templates should parse"));
        let state = Arc::new(sqlite_state(pool.clone(), &config, templates));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session_id={}", token));
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    /// `body` must already be url-encoded.
    pub async fn post_form(&self, uri: &str, body: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session_id={}", token));
        }
        self.router.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }

    /// Registers an account through the signup form and returns its session token.
    pub async fn signup(&self, email: &str) -> String {
        let body = format!(
            "email={}&first_name=Test&last_name=User&password1={}&password2={}",
            email, PASSWORD, PASSWORD
        );
        let response = self.post_form("/signup/", &body, None).await;

        if !response.status().is_redirection() {
            panic!("Signup failed in test helper: status {}", response.status());
        }

        session_cookie(&response).expect("No session_id cookie returned")
    }

    pub async fn seed_party_type(&self, name: &str, price_cents: i64) -> PartyType {
        let party_type = PartyType::new(name.to_string(), format!("{} package", name), from_cents(price_cents)).unwrap();
        self.state.party_type_repo.create(&party_type).await.unwrap()
    }

    pub async fn seed_service(&self, name: &str, price_cents: i64) -> Service {
        let service = Service::new(name.to_string(), format!("{} service", name), from_cents(price_cents)).unwrap();
        self.state.service_repo.create(&service).await.unwrap()
    }

    /// Submits the plan form and returns the new plan id taken from the redirect.
    pub async fn create_plan(&self, session: &str, party_type_id: &str, service_ids: &[&str], guest_count: i32) -> String {
        let mut body = format!(
            "party_type={}&guest_count={}&event_date=2027-06-12&event_time=18:30&venue=Garden+Hall&special_requests=",
            party_type_id, guest_count
        );
        for id in service_ids {
            body.push_str(&format!("&services={}", id));
        }

        let response = self.post_form("/event-plan/create/", &body, Some(session)).await;
        let location = location(&response).expect("Plan creation should redirect");

        location
            .trim_start_matches("/booking/")
            .trim_end_matches('/')
            .to_string()
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub fn session_cookie(response: &Response) -> Option<String> {
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|c| {
            let value = c.strip_prefix("session_id=")?;
            let token = value.split(';').next()?;
            (!token.is_empty()).then(|| token.to_string())
        })
}

#[allow(dead_code)]
pub fn location(response: &Response) -> Option<String> {
    response.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
