#![cfg(test)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::{Province, Regency};
use crate::features::regions::repository::RegionRepository;

pub const JAKARTA_PROVINCE_ID: &str = "a1b2c3d4-0000-4000-8000-000000000031";
pub const JAKARTA_REGENCY_ID: &str = "a1b2c3d4-0000-4000-8000-000000003171";

/// Canned region reference data for resolver and handler tests
#[derive(Default)]
pub struct InMemoryRegionRepository {
    provinces: HashMap<Uuid, Province>,
    regencies: HashMap<Uuid, Regency>,
}

impl InMemoryRegionRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_province(mut self, id: &str, code: &str, name: &str) -> Self {
        let id = Uuid::parse_str(id).unwrap();
        let now = Utc::now();
        self.provinces.insert(
            id,
            Province {
                id,
                code: code.to_string(),
                name: name.to_string(),
                lat: None,
                lng: None,
                created_at: now,
                updated_at: now,
            },
        );
        self
    }

    pub fn with_regency(mut self, id: &str, code: &str, name: &str, province_id: &str) -> Self {
        let id = Uuid::parse_str(id).unwrap();
        let now = Utc::now();
        self.regencies.insert(
            id,
            Regency {
                id,
                code: code.to_string(),
                name: name.to_string(),
                lat: None,
                lng: None,
                province_id: Uuid::parse_str(province_id).unwrap(),
                created_at: now,
                updated_at: now,
            },
        );
        self
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn find_province_by_id(&self, id: Uuid) -> Result<Option<Province>> {
        Ok(self.provinces.get(&id).cloned())
    }

    async fn find_regency_by_id(&self, id: Uuid) -> Result<Option<Regency>> {
        Ok(self.regencies.get(&id).cloned())
    }
}

/// DKI Jakarta with one regency, wired parent-to-child
pub fn jakarta_fixtures() -> InMemoryRegionRepository {
    InMemoryRegionRepository::empty()
        .with_province(JAKARTA_PROVINCE_ID, "31", "DKI Jakarta")
        .with_regency(
            JAKARTA_REGENCY_ID,
            "3171",
            "Jakarta Selatan",
            JAKARTA_PROVINCE_ID,
        )
}
