use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::appointments::repo_types::{Appointment, AppointmentWithParties};

impl Appointment {
    /// Insert a booked appointment.
    pub async fn create(
        db: &PgPool,
        patient_id: Uuid,
        professional_id: Uuid,
        date: OffsetDateTime,
    ) -> anyhow::Result<Appointment> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (patient_id, professional_id, date)
            VALUES ($1, $2, $3)
            RETURNING id, patient_id, professional_id, date, status, created_at, updated_at
            "#,
        )
        .bind(patient_id)
        .bind(professional_id)
        .bind(date)
        .fetch_one(db)
        .await?;
        Ok(appointment)
    }

    /// Delete an appointment, returning the removed row if it existed.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            DELETE FROM appointments
            WHERE id = $1
            RETURNING id, patient_id, professional_id, date, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(appointment)
    }

    /// Appointments where the given account is the patient, soonest first,
    /// with both parties joined in.
    pub async fn list_for_patient(
        db: &PgPool,
        user_id: Uuid,
    ) -> anyhow::Result<Vec<AppointmentWithParties>> {
        let rows = sqlx::query_as::<_, AppointmentWithParties>(
            r#"
            SELECT a.id, a.patient_id, a.professional_id, a.date, a.status, a.created_at,
                   p.name AS patient_name, p.email AS patient_email,
                   d.name AS professional_name, d.score AS professional_score
            FROM appointments a
            JOIN accounts p ON p.id = a.patient_id
            JOIN accounts d ON d.id = a.professional_id
            WHERE a.patient_id = $1
            ORDER BY a.date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Appointments where the given account is the professional.
    pub async fn list_for_professional(
        db: &PgPool,
        user_id: Uuid,
    ) -> anyhow::Result<Vec<AppointmentWithParties>> {
        let rows = sqlx::query_as::<_, AppointmentWithParties>(
            r#"
            SELECT a.id, a.patient_id, a.professional_id, a.date, a.status, a.created_at,
                   p.name AS patient_name, p.email AS patient_email,
                   d.name AS professional_name, d.score AS professional_score
            FROM appointments a
            JOIN accounts p ON p.id = a.patient_id
            JOIN accounts d ON d.id = a.professional_id
            WHERE a.professional_id = $1
            ORDER BY a.date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
