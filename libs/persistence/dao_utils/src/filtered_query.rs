use tokio_postgres::types::ToSql;

use crate::query_helpers::PgParamVec;

/// Builds a `SELECT` with a conjunction of filters, an ordering and an
/// optional `LIMIT`, numbering the placeholders as clauses are added.
pub struct FilteredQuery {
    base_query: String,
    conditions: Vec<String>,
    params: PgParamVec,
    order_by: Option<String>,
    limit: Option<i64>,
}

impl FilteredQuery {
    pub fn new(base_query: &str) -> Self {
        Self {
            base_query: base_query.to_string(),
            conditions: Vec::new(),
            params: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Adds `<column> <op> $n`.
    pub fn and_where<T>(mut self, column: &str, op: &str, value: T) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.params.push(Box::new(value));
        self.conditions
            .push(format!("{column} {op} ${}", self.params.len()));
        self
    }

    pub fn and_where_opt<T>(
        self, column: &str, op: &str, value: Option<T>,
    ) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        match value {
            Some(value) => self.and_where(column, op, value),
            None => self,
        }
    }

    pub fn order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }

    pub fn limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(mut self) -> (String, PgParamVec) {
        let mut query = self.base_query;

        if !self.conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.conditions.join(" AND "));
        }

        if let Some(order_by) = &self.order_by {
            query.push_str(" ORDER BY ");
            query.push_str(order_by);
        }

        if let Some(limit) = self.limit {
            self.params.push(Box::new(limit));
            query.push_str(&format!(" LIMIT ${}", self.params.len()));
        }

        (query, self.params)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_without_filters() {
        let (sql, params) = FilteredQuery::new("SELECT * FROM exercises")
            .order_by("date ASC")
            .build();

        assert_eq!(sql, "SELECT * FROM exercises ORDER BY date ASC");
        assert!(params.is_empty());
    }

    #[test]
    fn test_placeholders_are_numbered_in_order() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1);
        let to: Option<NaiveDate> = None;

        let (sql, params) = FilteredQuery::new("SELECT * FROM exercises")
            .and_where("user_id", "=", Uuid::nil())
            .and_where_opt("date", ">=", from)
            .and_where_opt("date", "<=", to)
            .order_by("date ASC, id ASC")
            .limit(Some(5))
            .build();

        assert_eq!(
            sql,
            "SELECT * FROM exercises WHERE user_id = $1 AND date >= $2 \
             ORDER BY date ASC, id ASC LIMIT $3"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_limit_without_conditions() {
        let (sql, params) = FilteredQuery::new("SELECT id FROM users")
            .limit(Some(10))
            .build();

        assert_eq!(sql, "SELECT id FROM users LIMIT $1");
        assert_eq!(params.len(), 1);
    }
}
