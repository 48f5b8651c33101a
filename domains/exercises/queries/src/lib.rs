use chrono::NaiveDate;
use common_errors::ValidationError;
use exercises_models::parse_date_input;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

/// Raw query string of `GET /api/users/{_id}/logs`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogParams {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum number of entries. Absent means no cap.
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetExerciseLogQuery {
    pub user_id: Uuid,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl GetExerciseLogQuery {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    pub fn from_params(
        user_id: Uuid, params: LogParams,
    ) -> Result<Self, ValidationError> {
        let from = parse_bound("from", params.from.as_deref())?;
        let to = parse_bound("to", params.to.as_deref())?;

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(ValidationError::new(
                    "from",
                    "must not be later than 'to'",
                ));
            }
        }

        let limit = parse_limit(params.limit.as_deref())?;

        Ok(Self {
            user_id,
            from,
            to,
            limit,
        })
    }

    /// Whether an entry dated `date` falls inside the requested range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
    }
}

/// Any positive run of digits is accepted; values past `u64::MAX` saturate,
/// which is no cap in practice.
fn parse_limit(value: Option<&str>) -> Result<Option<u64>, ValidationError> {
    let text = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(text) => text,
    };
    let invalid =
        || ValidationError::new("limit", "must be a positive whole number");

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let limit = text.parse::<u64>().unwrap_or(u64::MAX);

    if limit == 0 {
        return Err(invalid());
    }

    Ok(Some(limit))
}

fn parse_bound(
    field: &'static str, value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            parse_date_input(text).map(Some).ok_or_else(|| {
                ValidationError::new(
                    field,
                    format!("'{text}' is not a valid date"),
                )
            })
        }
    }
}
