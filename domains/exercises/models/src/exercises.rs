use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes.
    pub duration: i32,
    pub date: NaiveDate,
}

/// An exercise whose owner has already been confirmed to exist.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct NewExercise {
    pub user_id: Uuid,
    #[builder(setter(into))]
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

impl NewExercise {
    pub fn into_exercise(self) -> Exercise {
        Exercise {
            id: Uuid::now_v7(),
            user_id: self.user_id,
            description: self.description,
            duration: self.duration,
            date: self.date,
        }
    }
}
