use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documented shape of an address payload.
///
/// This DTO exists for the OpenAPI schema; the handlers deliberately accept
/// raw JSON so that payloads from older frontends (extra keys, numeric
/// codes, either flat or nested identifiers) are never rejected at the
/// deserialization boundary. The resolver decides what counts as valid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct AddressPayloadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<RegionRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<RegionRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<RegionRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<RegionRefDto>,
}

/// Nested region reference: a BPS code, a legacy opaque identifier, or a
/// display name, in any combination
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionRefDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Verdict of address payload validation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidationDto {
    pub valid: bool,
}

/// Human-readable rendering of an address payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAddressDto {
    pub formatted: String,
}
