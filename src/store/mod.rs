use sqlx::PgPool;

pub mod associates;
pub mod event_requests;
pub mod events;

/// Thin handle over the database pool. Each collection gets its own impl
/// block with the query/mutation primitives the views and the workflow
/// need; callers never see SQL.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
