use exercises_responses::LogEntryResponse;
use serde::{Deserialize, Serialize};
use user_models::User;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<User> for CreatedUserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// A user together with every exercise they have logged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub log: Vec<LogEntryResponse>,
}

impl UserResponse {
    pub fn new(user: User, log: Vec<LogEntryResponse>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_created_user_json_shape() {
        let user = User::new("alice");
        let id = user.id;

        assert_eq!(
            serde_json::to_value(CreatedUserResponse::from(user)).unwrap(),
            json!({ "username": "alice", "_id": id })
        );
    }

    #[test]
    fn test_user_response_without_log() {
        let user = User::new("bob");
        let id = user.id;

        assert_eq!(
            serde_json::to_value(UserResponse::new(user, Vec::new())).unwrap(),
            json!({ "_id": id, "username": "bob", "log": [] })
        );
    }
}
