use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;
use crate::models::{CityEntry, NewEntry};

/// Persistence seam for the submission workflow. The workflow only ever
/// appends; reads go through `db::entries` directly.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn append(&self, entry: &NewEntry) -> Result<CityEntry, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn append(&self, entry: &NewEntry) -> Result<CityEntry, sqlx::Error> {
        db::entries::create(&self.pool, entry).await
    }
}
