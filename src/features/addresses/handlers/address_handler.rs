use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::core::error::Result;
use crate::features::addresses::dtos::{
    AddressPayloadDto, AddressValidationDto, FormattedAddressDto,
};
use crate::features::addresses::services::AddressResolver;
use crate::shared::types::ApiResponse;

/// Validate an address payload
///
/// Returns `valid: false` for malformed or inconsistent payloads; callers
/// should prompt the user to re-enter the address, not treat it as a fault.
#[utoipa::path(
    post,
    path = "/api/addresses/validate",
    request_body = AddressPayloadDto,
    responses(
        (status = 200, description = "Validation verdict", body = ApiResponse<AddressValidationDto>)
    ),
    tag = "addresses"
)]
pub async fn validate_address(
    State(resolver): State<Arc<AddressResolver>>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<AddressValidationDto>>> {
    let valid = resolver.validate(&payload).await?;
    Ok(Json(ApiResponse::success(
        Some(AddressValidationDto { valid }),
        None,
        None,
    )))
}

/// Render an address payload as a display string
#[utoipa::path(
    post,
    path = "/api/addresses/format",
    request_body = AddressPayloadDto,
    responses(
        (status = 200, description = "Formatted address", body = ApiResponse<FormattedAddressDto>)
    ),
    tag = "addresses"
)]
pub async fn format_address(
    State(resolver): State<Arc<AddressResolver>>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<FormattedAddressDto>>> {
    let formatted = resolver.format(&payload).await?;
    Ok(Json(ApiResponse::success(
        Some(FormattedAddressDto { formatted }),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::features::addresses::routes;
    use crate::shared::test_helpers::InMemoryRegionRepository;

    fn server() -> TestServer {
        let resolver = Arc::new(AddressResolver::new(Arc::new(
            InMemoryRegionRepository::empty(),
        )));
        TestServer::new(routes::routes(resolver)).unwrap()
    }

    #[tokio::test]
    async fn validate_endpoint_wraps_resolver_verdict() {
        let server = server();

        let response = server
            .post("/api/addresses/validate")
            .json(&json!({ "city_id": "3101", "province_id": "31" }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["valid"], json!(true));

        let response = server
            .post("/api/addresses/validate")
            .json(&json!({ "city_id": "3201", "province_id": "31" }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["valid"], json!(false));
    }

    #[tokio::test]
    async fn format_endpoint_returns_display_string() {
        let server = server();

        let response = server
            .post("/api/addresses/format")
            .json(&json!({
                "city": { "name": "Jakarta Selatan" },
                "province_name": "DKI Jakarta"
            }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["data"]["formatted"],
            json!("Jakarta Selatan, DKI Jakarta")
        );
    }

    #[tokio::test]
    async fn format_endpoint_never_rejects_malformed_payloads() {
        let server = server();

        let response = server.post("/api/addresses/format").json(&json!({})).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["formatted"], json!("Unknown location"));
    }
}
