use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    accounts::{availability, Account},
    appointments::{
        dto::{AppointmentEntry, BookRequest, MessageResponse, RoleQuery},
        repo_types::Appointment,
    },
    auth::jwt::Guard,
    error::ApiError,
    state::AppState,
};

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(book))
        .route("/appointments/:id", get(list_for_user).delete(cancel))
}

/// Books a slot: the date must exactly match an open slot of the
/// professional, which is then taken out of the pool.
#[instrument(skip(state, payload))]
pub async fn book(
    State(state): State<AppState>,
    Guard(_claims): Guard,
    Json(payload): Json<BookRequest>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let pro = Account::find_by_id(&state.db, payload.professional_id)
        .await?
        .ok_or_else(|| {
            warn!(professional_id = %payload.professional_id, "professional not found");
            ApiError::NotFound("Professional not found".into())
        })?;

    let date = availability::truncate_to_millis(payload.date);
    if !availability::contains_slot(&pro.availability, date) {
        warn!(professional_id = %pro.id, %date, "slot not available");
        return Err(ApiError::Validation("Slot not available".into()));
    }

    let appointment =
        Appointment::create(&state.db, payload.patient_id, payload.professional_id, date).await?;

    // The slot check above and this removal are separate statements; two
    // concurrent bookings of the same slot can both pass the check.
    let remaining = availability::remove_slot(&pro.availability, date);
    Account::set_availability(&state.db, pro.id, &remaining).await?;

    info!(
        appointment_id = %appointment.id,
        patient_id = %appointment.patient_id,
        professional_id = %appointment.professional_id,
        "appointment booked"
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Lists a user's appointments, soonest first, both parties populated.
#[instrument(skip(state))]
pub async fn list_for_user(
    State(state): State<AppState>,
    Guard(_claims): Guard,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<Vec<AppointmentEntry>>, ApiError> {
    let rows = if wants_professional(query.role.as_deref()) {
        Appointment::list_for_professional(&state.db, user_id).await?
    } else {
        Appointment::list_for_patient(&state.db, user_id).await?
    };
    Ok(Json(rows.into_iter().map(AppointmentEntry::from).collect()))
}

/// Cancels an appointment and returns its date to the professional's pool.
#[instrument(skip(state))]
pub async fn cancel(
    State(state): State<AppState>,
    Guard(_claims): Guard,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let appointment = Appointment::delete(&state.db, id).await?.ok_or_else(|| {
        warn!(appointment_id = %id, "appointment not found");
        ApiError::NotFound("Appointment not found".into())
    })?;

    // The requesting account is not matched against the appointment here.
    if let Some(pro) = Account::find_by_id(&state.db, appointment.professional_id).await? {
        let slots = availability::restore_slot(&pro.availability, appointment.date);
        Account::set_availability(&state.db, pro.id, &slots).await?;
    }

    info!(appointment_id = %appointment.id, "appointment cancelled");
    Ok(Json(MessageResponse {
        message: "Appointment cancelled".into(),
    }))
}

fn wants_professional(role: Option<&str>) -> bool {
    role == Some("pro")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_query_selects_the_professional_side_only_for_pro() {
        assert!(wants_professional(Some("pro")));
        assert!(!wants_professional(Some("user")));
        assert!(!wants_professional(Some("professional")));
        assert!(!wants_professional(None));
    }
}
