use deadpool_postgres::{Object, Pool, PoolError};

/// Handle to the PostgreSQL pool. Cheap to clone; every DAO holds one.
#[derive(Debug, Clone)]
pub struct SqlConnect {
    pool: Pool,
}

impl SqlConnect {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn get_client(&self) -> Result<Object, PoolError> {
        self.pool.get().await
    }

    /// `(available, size, max_size)` of the pool, for the health endpoint.
    pub fn get_pool_status(&self) -> (usize, usize, usize) {
        let status = self.pool.status();
        (status.available, status.size, status.max_size)
    }
}
