use chrono::NaiveDate;
use common_errors::ValidationError;
use exercises_models::parse_date_input;
use request_extract::FieldValue;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /api/users/{_id}/exercises` as submitted.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddExerciseForm {
    pub description: Option<String>,
    /// Minutes, as a number or a numeric string.
    #[schema(value_type = Option<i64>)]
    pub duration: Option<FieldValue>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp. Defaults to today (UTC).
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseCommand {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    /// `None` means the handler picks the current date.
    pub date: Option<NaiveDate>,
}

impl AddExerciseCommand {
    pub fn from_form(
        user_id: Uuid, form: AddExerciseForm,
    ) -> Result<Self, ValidationError> {
        let description = form
            .description
            .map(|text| text.trim().to_string())
            .ok_or_else(|| ValidationError::missing("description"))?;
        if description.is_empty() {
            return Err(ValidationError::new(
                "description",
                "must not be blank",
            ));
        }

        let duration = match form.duration {
            Some(value) if !value.is_blank() => parse_duration(&value)?,
            _ => return Err(ValidationError::missing("duration")),
        };

        let date = match form.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => {
                Some(parse_date_input(text).ok_or_else(|| {
                    ValidationError::new(
                        "date",
                        format!("'{text}' is not a valid date"),
                    )
                })?)
            }
        };

        Ok(Self {
            user_id,
            description,
            duration,
            date,
        })
    }
}

fn parse_duration(value: &FieldValue) -> Result<i32, ValidationError> {
    value
        .as_integer()
        .and_then(|minutes| i32::try_from(minutes).ok())
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| {
            ValidationError::new("duration", "must be a positive whole number")
        })
}
