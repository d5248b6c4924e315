use std::sync::Arc;
use crate::domain::{
    models::{auth::SessionRecord, user::User},
    ports::{AuthRepository, UserRepository},
};
use crate::error::AppError;
use crate::config::Config;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    user_repo: Arc<dyn UserRepository>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>, user_repo: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            repo,
            user_repo,
            session_ttl: Duration::hours(config.session_ttl_hours),
        }
    }

    /// Creates the account. The e-mail must already be normalized by the form layer.
    pub async fn register(
        &self,
        email: String,
        first_name: String,
        last_name: String,
        password: &str,
    ) -> Result<User, AppError> {
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("This email is already registered.".into()));
        }

        let password_hash = self.hash_password(password)?;
        let user = User::new(email, first_name, last_name, password_hash);

        let created = self.user_repo.create(&user).await.map_err(|e| {
            if e.is_unique_violation() {
                AppError::Conflict("This email is already registered.".into())
            } else {
                e
            }
        })?;

        info!("Registered user: {}", created.id);
        Ok(created)
    }

    /// Looks the user up by e-mail and checks the password. `None` covers both
    /// an unknown address and a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal)?;

        if Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok() {
            Ok(Some(user))
        } else {
            warn!("Failed login attempt for user: {}", user.id);
            Ok(None)
        }
    }

    /// Returns the raw session token; only its hash is persisted.
    pub async fn login(&self, user: &User) -> Result<String, AppError> {
        let raw_token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect();
        let now = Utc::now();

        let swept = self.repo.delete_expired_sessions(now).await?;
        if swept > 0 {
            debug!("Removed {} expired sessions", swept);
        }

        let record = SessionRecord {
            token_hash: self.hash_token(&raw_token),
            user_id: user.id.clone(),
            expires_at: now + self.session_ttl,
            created_at: now,
        };

        self.repo.create_session(&record).await?;
        Ok(raw_token)
    }

    pub async fn resolve(&self, raw_token: &str) -> Result<Option<User>, AppError> {
        let token_hash = self.hash_token(raw_token);

        let Some(record) = self.repo.find_session(&token_hash).await? else {
            return Ok(None);
        };

        if record.is_expired() {
            self.repo.delete_session(&token_hash).await?;
            return Ok(None);
        }

        self.user_repo.find_by_id(&record.user_id).await
    }

    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(raw_token);
        self.repo.delete_session(&token_hash).await
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalWithMsg(format!("Password hashing failed: {}", e)))
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
