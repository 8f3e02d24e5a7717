use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::appointments::repo_types::{AppointmentStatus, AppointmentWithParties};

/// Request body for booking an appointment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// `?role=pro` lists the professional's side; anything else the patient's.
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatientRef {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ProfessionalRef {
    pub id: Uuid,
    pub name: String,
    pub score: i32,
}

/// Listing entry with both parties populated.
#[derive(Debug, Serialize)]
pub struct AppointmentEntry {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub patient: PatientRef,
    pub professional: ProfessionalRef,
}

impl From<AppointmentWithParties> for AppointmentEntry {
    fn from(row: AppointmentWithParties) -> Self {
        Self {
            id: row.id,
            date: row.date,
            status: row.status,
            created_at: row.created_at,
            patient: PatientRef {
                id: row.patient_id,
                name: row.patient_name,
                email: row.patient_email,
            },
            professional: ProfessionalRef {
                id: row.professional_id,
                name: row.professional_name,
                score: row.professional_score,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn book_request_accepts_camel_case_body() {
        let req: BookRequest = serde_json::from_str(
            r#"{
                "patientId": "6d9d3cbd-4e2c-4f6a-9a38-9c6b1c62d6ce",
                "professionalId": "e1f8e6b8-34a4-4f5e-8f5e-1d2c3b4a5968",
                "date": "2025-01-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(req.date, datetime!(2025-01-01 10:00 UTC));
    }

    #[test]
    fn entry_populates_both_parties() {
        let row = AppointmentWithParties {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            professional_id: Uuid::new_v4(),
            date: datetime!(2025-01-01 10:00 UTC),
            status: AppointmentStatus::Booked,
            created_at: datetime!(2024-12-31 08:00 UTC),
            patient_name: "P1".into(),
            patient_email: "p1@example.com".into(),
            professional_name: "Dr. A".into(),
            professional_score: 90,
        };
        let json = serde_json::to_value(AppointmentEntry::from(row)).unwrap();
        assert_eq!(json["date"], "2025-01-01T10:00:00Z");
        assert_eq!(json["patient"]["name"], "P1");
        assert_eq!(json["patient"]["email"], "p1@example.com");
        assert_eq!(json["professional"]["name"], "Dr. A");
        assert_eq!(json["professional"]["score"], 90);
        // The professional ref carries score, not email
        assert!(json["professional"].get("email").is_none());
    }
}
