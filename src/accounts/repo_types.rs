use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

/// Account role. Score and availability are only meaningful for professionals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
pub enum Role {
    Patient,
    Professional,
}

impl Default for Role {
    fn default() -> Self {
        Role::Patient
    }
}

/// Account record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub role: Role,
    pub score: i32, // reputation, 0..=100
    #[serde(serialize_with = "serialize_slots")]
    pub availability: Vec<OffsetDateTime>, // open slots, insertion order
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Serializes a slot list as RFC 3339 strings.
pub fn serialize_slots<S>(slots: &[OffsetDateTime], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::{Error, SerializeSeq};

    let mut seq = serializer.serialize_seq(Some(slots.len()))?;
    for slot in slots {
        let formatted = slot.format(&Rfc3339).map_err(Error::custom)?;
        seq.serialize_element(&formatted)?;
    }
    seq.end()
}
