use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::{Account, Role};

/// Request body for user registration. Score is only honored for
/// professionals; when omitted a demo score is assigned at random.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub score: Option<i32>,
}

/// Response returned after registration. No session is issued.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the account returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub score: i32,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            role: account.role,
            score: account.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_defaults_to_patient() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"P1","email":"p1@example.com","password":"long-enough"}"#,
        )
        .unwrap();
        assert_eq!(req.role, Role::Patient);
        assert!(req.score.is_none());
    }

    #[test]
    fn public_user_serialization() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Dr. A".into(),
            role: Role::Professional,
            score: 42,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Dr. A");
        assert_eq!(json["role"], "professional");
        assert_eq!(json["score"], 42);
    }
}
