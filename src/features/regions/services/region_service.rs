use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, Province, Regency, Village};

/// Service for browsing Indonesian administrative regions
pub struct RegionService {
    pool: PgPool,
}

impl RegionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ==================== Province Methods ====================

    /// List all provinces with optional name/code search
    pub async fn list_provinces(&self, search: Option<&str>) -> Result<Vec<Province>> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT id, code, name, lat, lng, created_at, updated_at FROM provinces",
        );
        push_search(&mut qb, search, false);
        qb.push(" ORDER BY code ASC");
        self.fetch_all(qb, "provinces").await
    }

    /// Get a province by its BPS code
    pub async fn get_province_by_code(&self, code: &str) -> Result<Province> {
        sqlx::query_as::<_, Province>(
            r#"
            SELECT id, code, name, lat, lng, created_at, updated_at
            FROM provinces
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch province by code {}: {:?}", code, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Province with code '{}' not found", code)))
    }

    // ==================== Regency Methods ====================

    /// List all regencies in a province with optional search
    pub async fn list_regencies_by_province_code(
        &self,
        province_code: &str,
        search: Option<&str>,
    ) -> Result<Vec<Regency>> {
        // First verify the province exists
        let province = self.get_province_by_code(province_code).await?;

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT id, code, name, lat, lng, province_id, created_at, updated_at \
             FROM regencies WHERE province_id = ",
        );
        qb.push_bind(province.id);
        push_search(&mut qb, search, true);
        qb.push(" ORDER BY code ASC");
        self.fetch_all(qb, "regencies").await
    }

    /// Get a regency by its BPS code
    pub async fn get_regency_by_code(&self, code: &str) -> Result<Regency> {
        sqlx::query_as::<_, Regency>(
            r#"
            SELECT id, code, name, lat, lng, province_id, created_at, updated_at
            FROM regencies
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regency by code {}: {:?}", code, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Regency with code '{}' not found", code)))
    }

    // ==================== District Methods ====================

    /// List all districts in a regency with optional search
    pub async fn list_districts_by_regency_code(
        &self,
        regency_code: &str,
        search: Option<&str>,
    ) -> Result<Vec<District>> {
        // First verify the regency exists
        let regency = self.get_regency_by_code(regency_code).await?;

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT id, code, name, lat, lng, regency_id, created_at, updated_at \
             FROM districts WHERE regency_id = ",
        );
        qb.push_bind(regency.id);
        push_search(&mut qb, search, true);
        qb.push(" ORDER BY code ASC");
        self.fetch_all(qb, "districts").await
    }

    /// Get a district by its BPS code
    pub async fn get_district_by_code(&self, code: &str) -> Result<District> {
        sqlx::query_as::<_, District>(
            r#"
            SELECT id, code, name, lat, lng, regency_id, created_at, updated_at
            FROM districts
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district by code {}: {:?}", code, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("District with code '{}' not found", code)))
    }

    // ==================== Village Methods ====================

    /// List all villages in a district with optional search
    pub async fn list_villages_by_district_code(
        &self,
        district_code: &str,
        search: Option<&str>,
    ) -> Result<Vec<Village>> {
        // First verify the district exists
        let district = self.get_district_by_code(district_code).await?;

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT id, code, name, lat, lng, district_id, created_at, updated_at \
             FROM villages WHERE district_id = ",
        );
        qb.push_bind(district.id);
        push_search(&mut qb, search, true);
        qb.push(" ORDER BY code ASC");
        self.fetch_all(qb, "villages").await
    }

    /// Get a village by its BPS code
    pub async fn get_village_by_code(&self, code: &str) -> Result<Village> {
        sqlx::query_as::<_, Village>(
            r#"
            SELECT id, code, name, lat, lng, district_id, created_at, updated_at
            FROM villages
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch village by code {}: {:?}", code, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Village with code '{}' not found", code)))
    }

    async fn fetch_all<T>(&self, mut qb: QueryBuilder<'_, Postgres>, entity: &str) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        qb.build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {}: {:?}", entity, e);
                AppError::Database(e)
            })
    }
}

/// Append a case-insensitive name/code filter when a search term is present
fn push_search(qb: &mut QueryBuilder<'_, Postgres>, search: Option<&str>, has_where: bool) {
    if let Some(term) = search.filter(|t| !t.is_empty()) {
        let pattern = format!("%{}%", term.to_lowercase());
        qb.push(if has_where { " AND" } else { " WHERE" })
            .push(" (LOWER(name) LIKE ")
            .push_bind(pattern.clone())
            .push(" OR code LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}
