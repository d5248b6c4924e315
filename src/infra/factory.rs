use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::domain::models::{
    money::from_cents, party_type::PartyType, service::Service, testimonial::Testimonial,
};
use crate::domain::services::{
    auth_service::AuthService,
    defaults::{DEFAULT_PARTY_TYPES, DEFAULT_SERVICES, DEFAULT_TESTIMONIALS},
    pricing::PricingService,
};
use crate::infra::repositories::{
    postgres_auth_repo::PostgresAuthRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_contact_repo::PostgresContactRepo, postgres_event_plan_repo::PostgresEventPlanRepo,
    postgres_party_type_repo::PostgresPartyTypeRepo, postgres_service_repo::PostgresServiceRepo,
    postgres_testimonial_repo::PostgresTestimonialRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_auth_repo::SqliteAuthRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_contact_repo::SqliteContactRepo, sqlite_event_plan_repo::SqliteEventPlanRepo,
    sqlite_party_type_repo::SqlitePartyTypeRepo, sqlite_service_repo::SqliteServiceRepo,
    sqlite_testimonial_repo::SqliteTestimonialRepo, sqlite_user_repo::SqliteUserRepo,
};

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("services.html", include_str!("../templates/services.html")),
        ("party_detail.html", include_str!("../templates/party_detail.html")),
        ("about.html", include_str!("../templates/about.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("signup.html", include_str!("../templates/signup.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("dashboard.html", include_str!("../templates/dashboard.html")),
        ("create_event_plan.html", include_str!("../templates/create_event_plan.html")),
        ("booking.html", include_str!("../templates/booking.html")),
        ("booking_details.html", include_str!("../templates/booking_details.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])?;
    Ok(tera)
}

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let database_url = &config.database_url;
    let templates = Arc::new(build_templates()?);

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse()?;
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await?;

        run_postgres_migrations(&pool).await?;
        postgres_state(pool, config, templates)
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        run_sqlite_migrations(&pool).await?;
        sqlite_state(pool, config, templates)
    };

    if config.seed_catalog {
        let inserted = seed_catalog(&state).await?;
        info!("Catalog seeding inserted {} records", inserted);
    }

    Ok(state)
}

pub fn sqlite_state(pool: SqlitePool, config: &Config, templates: Arc<Tera>) -> AppState {
    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
    let party_type_repo = Arc::new(SqlitePartyTypeRepo::new(pool.clone()));
    let event_plan_repo = Arc::new(SqliteEventPlanRepo::new(pool.clone()));

    AppState {
        config: config.clone(),
        auth_service: Arc::new(AuthService::new(auth_repo, user_repo.clone(), config)),
        pricing_service: Arc::new(PricingService::new(party_type_repo.clone(), event_plan_repo.clone())),
        user_repo,
        party_type_repo,
        service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
        event_plan_repo,
        booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        testimonial_repo: Arc::new(SqliteTestimonialRepo::new(pool.clone())),
        contact_repo: Arc::new(SqliteContactRepo::new(pool)),
        templates,
    }
}

pub fn postgres_state(pool: PgPool, config: &Config, templates: Arc<Tera>) -> AppState {
    let user_repo = Arc::new(PostgresUserRepo::new(pool.clone()));
    let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
    let party_type_repo = Arc::new(PostgresPartyTypeRepo::new(pool.clone()));
    let event_plan_repo = Arc::new(PostgresEventPlanRepo::new(pool.clone()));

    AppState {
        config: config.clone(),
        auth_service: Arc::new(AuthService::new(auth_repo, user_repo.clone(), config)),
        pricing_service: Arc::new(PricingService::new(party_type_repo.clone(), event_plan_repo.clone())),
        user_repo,
        party_type_repo,
        service_repo: Arc::new(PostgresServiceRepo::new(pool.clone())),
        event_plan_repo,
        booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
        testimonial_repo: Arc::new(PostgresTestimonialRepo::new(pool.clone())),
        contact_repo: Arc::new(PostgresContactRepo::new(pool)),
        templates,
    }
}

/// Inserts the default catalog when no party types exist yet.
pub async fn seed_catalog(state: &AppState) -> Result<usize, AppError> {
    if !state.party_type_repo.list(Some(1)).await?.is_empty() {
        info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    let mut party_ids = Vec::new();

    for (name, description, price_cents, duration_hours, max_guests) in DEFAULT_PARTY_TYPES {
        let mut party_type = PartyType::new(name.to_string(), description.to_string(), from_cents(*price_cents))?;
        party_type.duration_hours = *duration_hours;
        party_type.max_guests = *max_guests;
        let created = state.party_type_repo.create(&party_type).await?;
        party_ids.push((created.name, created.id));
        inserted += 1;
    }

    for (name, description, price_cents, icon) in DEFAULT_SERVICES {
        let mut service = Service::new(name.to_string(), description.to_string(), from_cents(*price_cents))?;
        service.icon = icon.to_string();
        state.service_repo.create(&service).await?;
        inserted += 1;
    }

    for (name, party_name, rating, comment) in DEFAULT_TESTIMONIALS {
        let party_type_id = party_ids.iter()
            .find(|(n, _)| n == party_name)
            .map(|(_, id)| id.clone());
        let testimonial = Testimonial::new(name.to_string(), party_type_id, *rating, comment.to_string())?;
        state.testimonial_repo.create(&testimonial).await?;
        inserted += 1;
    }

    Ok(inserted)
}

async fn run_postgres_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Postgres migrations failed: {}", e)))
}

async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("SQLite migrations failed: {}", e)))
}
