use common_errors::ValidationError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/users` as submitted, before validation.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserForm {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub username: String,
}

impl TryFrom<CreateUserForm> for CreateUserCommand {
    type Error = ValidationError;

    fn try_from(form: CreateUserForm) -> Result<Self, Self::Error> {
        let username = form
            .username
            .map(|name| name.trim().to_string())
            .ok_or_else(|| ValidationError::missing("username"))?;

        if username.is_empty() {
            return Err(ValidationError::new("username", "must not be blank"));
        }

        Ok(Self { username })
    }
}
