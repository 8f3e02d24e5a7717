use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::repo_types::serialize_slots;

/// Request body for adding or removing an availability slot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The professional's full slot list, RFC 3339 on the wire.
#[derive(Debug, Serialize)]
pub struct SlotList(#[serde(serialize_with = "serialize_slots")] pub Vec<OffsetDateTime>);

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn slot_request_accepts_camel_case_body() {
        let req: SlotRequest = serde_json::from_str(
            r#"{"userId":"6d9d3cbd-4e2c-4f6a-9a38-9c6b1c62d6ce","date":"2025-01-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.date, datetime!(2025-01-01 10:00 UTC));
    }

    #[test]
    fn slot_list_serializes_as_rfc3339_strings() {
        let list = SlotList(vec![
            datetime!(2025-01-01 10:00 UTC),
            datetime!(2025-01-02 09:30 UTC),
        ]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0], "2025-01-01T10:00:00Z");
        assert_eq!(json[1], "2025-01-02T09:30:00Z");
    }
}
