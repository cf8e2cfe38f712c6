//! Indonesian administrative regions (wilayah) reference data.
//!
//! Read-only hierarchy of provinces, regencies/cities, districts, and
//! villages, seeded from the BPS dataset. Serves two consumers: the
//! dropdown-browsing endpoints below, and the address resolver, which
//! reaches the same tables through the [`RegionRepository`] seam.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//! - Level 4: Villages (Kelurahan/Desa)

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgRegionRepository, RegionRepository};
pub use services::RegionService;
