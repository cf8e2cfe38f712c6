use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DistrictResponseDto, ProvinceResponseDto, RegencyResponseDto, RegionSearchQuery,
    VillageResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::ApiResponse;

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref()).await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a province by code
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_province_by_code(&code).await?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/regencies",
    params(
        ("code" = String, Path, description = "Province code (2 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of regencies in the province", body = ApiResponse<Vec<RegencyResponseDto>>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service
        .list_regencies_by_province_code(&code, query.search.as_deref())
        .await?;
    let dtos: Vec<RegencyResponseDto> = regencies.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a regency by code
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{code}",
    params(
        ("code" = String, Path, description = "Regency code (4 digits)")
    ),
    responses(
        (status = 200, description = "Regency details", body = ApiResponse<RegencyResponseDto>),
        (status = 404, description = "Regency not found")
    ),
    tag = "regions"
)]
pub async fn get_regency(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<RegencyResponseDto>>> {
    let regency = service.get_regency_by_code(&code).await?;
    Ok(Json(ApiResponse::success(Some(regency.into()), None, None)))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{code}/districts",
    params(
        ("code" = String, Path, description = "Regency code (4 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of districts in the regency", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "Regency not found")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service
        .list_districts_by_regency_code(&code, query.search.as_deref())
        .await?;
    let dtos: Vec<DistrictResponseDto> = districts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a district by code
#[utoipa::path(
    get,
    path = "/api/regions/districts/{code}",
    params(
        ("code" = String, Path, description = "District code (6 digits)")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictResponseDto>),
        (status = 404, description = "District not found")
    ),
    tag = "regions"
)]
pub async fn get_district(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<DistrictResponseDto>>> {
    let district = service.get_district_by_code(&code).await?;
    Ok(Json(ApiResponse::success(
        Some(district.into()),
        None,
        None,
    )))
}

/// List villages in a district
#[utoipa::path(
    get,
    path = "/api/regions/districts/{code}/villages",
    params(
        ("code" = String, Path, description = "District code (6 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of villages in the district", body = ApiResponse<Vec<VillageResponseDto>>),
        (status = 404, description = "District not found")
    ),
    tag = "regions"
)]
pub async fn list_villages_by_district(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<VillageResponseDto>>>> {
    let villages = service
        .list_villages_by_district_code(&code, query.search.as_deref())
        .await?;
    let dtos: Vec<VillageResponseDto> = villages.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a village by code
#[utoipa::path(
    get,
    path = "/api/regions/villages/{code}",
    params(
        ("code" = String, Path, description = "Village code (10 digits)")
    ),
    responses(
        (status = 200, description = "Village details", body = ApiResponse<VillageResponseDto>),
        (status = 404, description = "Village not found")
    ),
    tag = "regions"
)]
pub async fn get_village(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<VillageResponseDto>>> {
    let village = service.get_village_by_code(&code).await?;
    Ok(Json(ApiResponse::success(Some(village.into()), None, None)))
}
