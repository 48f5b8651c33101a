pub mod filtered_query;
pub mod query_helpers;

pub use filtered_query::FilteredQuery;
