use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    accounts::{Account, Role},
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Score supplied at registration wins; professionals without one get a
/// pseudo-random demo score in [0, 100).
fn resolve_score(role: Role, given: Option<i32>) -> Result<i32, ApiError> {
    match (role, given) {
        (_, Some(s)) if !(0..=100).contains(&s) => Err(ApiError::Validation(
            "Score must be between 0 and 100".into(),
        )),
        (_, Some(s)) => Ok(s),
        (Role::Professional, None) => Ok(rand::thread_rng().gen_range(0..100)),
        (Role::Patient, None) => Ok(0),
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    let score = resolve_score(payload.role, payload.score)?;

    // Ensure email is not taken
    if Account::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("User already exists".into()));
    }

    let hash = hash_password(&payload.password)?;
    let account = Account::create(
        &state.db,
        &payload.name,
        &payload.email,
        &hash,
        payload.role,
        score,
    )
    .await?;

    info!(user_id = %account.id, email = %account.email, role = ?account.role, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    let account = Account::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::Auth("Invalid credentials".into())
        })?;

    if !verify_password(&payload.password, &account.password_hash)? {
        warn!(email = %payload.email, user_id = %account.id, "login invalid password");
        return Err(ApiError::Auth("Invalid credentials".into()));
    }

    let token = JwtKeys::from_ref(&state).sign(account.id, account.role)?;

    info!(user_id = %account.id, email = %account.email, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(&account),
    }))
}
