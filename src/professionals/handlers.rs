use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    accounts::{availability, Account, Role},
    auth::jwt::Guard,
    error::ApiError,
    professionals::dto::{SlotList, SlotRequest},
    state::AppState,
};

pub fn professional_routes() -> Router<AppState> {
    Router::new()
        .route("/professionals", get(list_professionals))
        .route(
            "/professionals/availability",
            post(add_slot).delete(remove_slot),
        )
        .route("/professionals/:id", get(get_professional))
}

/// All professionals, password excluded, best score first.
#[instrument(skip(state))]
pub async fn list_professionals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let professionals = Account::list_professionals(&state.db).await?;
    Ok(Json(professionals))
}

#[instrument(skip(state))]
pub async fn get_professional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, ApiError> {
    let professional = Account::find_by_id(&state.db, id)
        .await?
        .filter(|a| a.role == Role::Professional)
        .ok_or_else(|| {
            warn!(%id, "professional not found");
            ApiError::NotFound("Professional not found".into())
        })?;
    Ok(Json(professional))
}

#[instrument(skip(state, payload))]
pub async fn add_slot(
    State(state): State<AppState>,
    Guard(_claims): Guard,
    Json(payload): Json<SlotRequest>,
) -> Result<Json<SlotList>, ApiError> {
    let account = require_professional(&state, payload.user_id).await?;
    let slots = availability::insert_slot(&account.availability, payload.date);
    let stored = Account::set_availability(&state.db, account.id, &slots).await?;
    info!(user_id = %account.id, slots = stored.len(), "availability slot added");
    Ok(Json(SlotList(stored)))
}

#[instrument(skip(state, payload))]
pub async fn remove_slot(
    State(state): State<AppState>,
    Guard(_claims): Guard,
    Json(payload): Json<SlotRequest>,
) -> Result<Json<SlotList>, ApiError> {
    let account = require_professional(&state, payload.user_id).await?;
    let slots = availability::remove_slot(&account.availability, payload.date);
    let stored = Account::set_availability(&state.db, account.id, &slots).await?;
    info!(user_id = %account.id, slots = stored.len(), "availability slot removed");
    Ok(Json(SlotList(stored)))
}

async fn require_professional(state: &AppState, user_id: Uuid) -> Result<Account, ApiError> {
    Account::find_by_id(&state.db, user_id)
        .await?
        .filter(|a| a.role == Role::Professional)
        .ok_or_else(|| {
            warn!(%user_id, "availability change by non-professional");
            ApiError::Forbidden("Access denied. Professionals only.".into())
        })
}
