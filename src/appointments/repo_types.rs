use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Appointment lifecycle. Booking creates `Booked`; cancel deletes the row,
/// so `Cancelled` and `Completed` are reachable only through future status
/// transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
pub enum AppointmentStatus {
    Booked,
    Cancelled,
    Completed,
}

/// Appointment record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Appointment joined with both parties, as listings return it.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentWithParties {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    pub created_at: OffsetDateTime,
    pub patient_name: String,
    pub patient_email: String,
    pub professional_name: String,
    pub professional_score: i32,
}
