pub mod date;
pub mod exercises;

pub use date::{format_log_date, parse_date_input};
pub use exercises::{Exercise, NewExercise};
