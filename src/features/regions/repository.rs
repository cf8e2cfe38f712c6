use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Province, Regency};

/// Read-only lookup seam over the region reference data.
///
/// The address resolver only ever needs point lookups by the legacy opaque
/// identifier; browsing and search stay in `RegionService`. Injected as a
/// trait object so the resolver can be exercised against canned data.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn find_province_by_id(&self, id: Uuid) -> Result<Option<Province>>;
    async fn find_regency_by_id(&self, id: Uuid) -> Result<Option<Regency>>;
}

/// Postgres-backed implementation over the seeded region tables
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn find_province_by_id(&self, id: Uuid) -> Result<Option<Province>> {
        sqlx::query_as::<_, Province>(
            r#"
            SELECT id, code, name, lat, lng, created_at, updated_at
            FROM provinces
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch province by id {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn find_regency_by_id(&self, id: Uuid) -> Result<Option<Regency>> {
        sqlx::query_as::<_, Regency>(
            r#"
            SELECT id, code, name, lat, lng, province_id, created_at, updated_at
            FROM regencies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regency by id {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}
