use utoipa::{Modify, OpenApi};

use crate::features::addresses::{dtos as addresses_dtos, handlers as addresses_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Addresses
        addresses_handlers::validate_address,
        addresses_handlers::format_address,
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_regencies_by_province,
        regions_handlers::get_regency,
        regions_handlers::list_districts_by_regency,
        regions_handlers::get_district,
        regions_handlers::list_villages_by_district,
        regions_handlers::get_village,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Addresses
            addresses_dtos::AddressPayloadDto,
            addresses_dtos::RegionRefDto,
            addresses_dtos::AddressValidationDto,
            addresses_dtos::FormattedAddressDto,
            ApiResponse<addresses_dtos::AddressValidationDto>,
            ApiResponse<addresses_dtos::FormattedAddressDto>,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            regions_dtos::VillageResponseDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<Vec<regions_dtos::RegencyResponseDto>>,
            ApiResponse<regions_dtos::RegencyResponseDto>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            ApiResponse<regions_dtos::DistrictResponseDto>,
            ApiResponse<Vec<regions_dtos::VillageResponseDto>>,
            ApiResponse<regions_dtos::VillageResponseDto>,
        )
    ),
    tags(
        (name = "addresses", description = "Address payload validation and rendering"),
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts, villages)"),
    ),
    info(
        title = "Sewaroda Core API",
        version = "0.1.0",
        description = "Address resolution and region reference API for the Sewaroda marketplace",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
