use std::ops::RangeInclusive;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::addresses::models::{
    extract_identifier, extract_name, AddressLevel, IdentifierScheme,
};
use crate::features::regions::repository::RegionRepository;
use crate::shared::validation::LEGACY_ID_REGEX;

/// BPS province codes are assigned within this range
const PROVINCE_CODE_RANGE: RangeInclusive<i64> = 11..=94;

/// BPS regency/city codes are assigned within this range
const REGENCY_CODE_RANGE: RangeInclusive<i64> = 1101..=9471;

/// Province codes inside the assigned range that BPS has never issued.
/// Fixed enumeration; there is no rule to derive it from.
const RESERVED_PROVINCE_CODES: [i64; 26] = [
    17, 20, 25, 29, 30, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 59, 60, 69, 70, 79, 80,
    89, 90, 93,
];

/// Rendered when no part of an address resolves to anything displayable
const UNKNOWN_LOCATION: &str = "Unknown location";

/// Validates and renders loosely-structured address payloads against the
/// region reference data.
///
/// Both operations are pure functions of the payload and the current
/// reference data; the resolver holds no state of its own.
pub struct AddressResolver {
    regions: Arc<dyn RegionRepository>,
}

impl AddressResolver {
    pub fn new(regions: Arc<dyn RegionRepository>) -> Self {
        Self { regions }
    }

    /// Decide whether the payload denotes a valid, internally-consistent
    /// Indonesian location.
    ///
    /// Malformed input of any shape is absorbed into `Ok(false)`; only a
    /// reference-store failure surfaces as an error.
    ///
    /// The legacy opaque-identifier path checks row existence only and does
    /// not verify that the city belongs to the province, unlike the
    /// government-code path. Stored payloads rely on the lenient behavior,
    /// so it is kept as-is and pinned by a test.
    pub async fn validate(&self, payload: &Value) -> Result<bool> {
        let Some(obj) = payload.as_object() else {
            return Ok(false);
        };
        if obj.is_empty() {
            return Ok(false);
        }

        let Some(city) = extract_identifier(payload, AddressLevel::City) else {
            return Ok(false);
        };
        let Some(province) = extract_identifier(payload, AddressLevel::Province) else {
            return Ok(false);
        };

        match IdentifierScheme::classify(&city, &province) {
            Some(IdentifierScheme::Legacy { city, province }) => {
                let regency_exists = self.regions.find_regency_by_id(city).await?.is_some();
                let province_exists = self.regions.find_province_by_id(province).await?.is_some();
                let valid = regency_exists && province_exists;
                if !valid {
                    tracing::debug!(
                        "Legacy address identifiers not found: city={}, province={}",
                        city,
                        province
                    );
                }
                Ok(valid)
            }
            Some(IdentifierScheme::Government { city, province }) => {
                Ok(validate_government_codes(payload, city, province))
            }
            None => Ok(false),
        }
    }

    /// Render the payload as a best-effort human-readable string.
    ///
    /// More permissive than [`validate`](Self::validate): an unresolvable
    /// name degrades to an identifier-derived placeholder, and a payload
    /// with nothing displayable yields a fixed sentinel. Only a
    /// reference-store failure surfaces as an error.
    pub async fn format(&self, payload: &Value) -> Result<String> {
        let city = self.display_name(payload, AddressLevel::City).await?;
        let province = self.display_name(payload, AddressLevel::Province).await?;

        let parts: Vec<String> = [city, province].into_iter().flatten().collect();
        if parts.is_empty() {
            Ok(UNKNOWN_LOCATION.to_string())
        } else {
            Ok(parts.join(", "))
        }
    }

    /// Resolve a display name for one level.
    ///
    /// Precedence: name embedded in the payload, then a reference-store
    /// lookup (only for legacy-shaped identifiers), then a placeholder
    /// built from the identifier. A level with no identifier at all
    /// contributes nothing.
    async fn display_name(&self, payload: &Value, level: AddressLevel) -> Result<Option<String>> {
        if let Some(name) = extract_name(payload, level) {
            return Ok(Some(name));
        }

        let Some(id) = extract_identifier(payload, level) else {
            return Ok(None);
        };

        if LEGACY_ID_REGEX.is_match(&id) {
            if let Ok(uuid) = Uuid::parse_str(&id) {
                let found = match level {
                    AddressLevel::City => self
                        .regions
                        .find_regency_by_id(uuid)
                        .await?
                        .map(|regency| regency.name),
                    AddressLevel::Province => self
                        .regions
                        .find_province_by_id(uuid)
                        .await?
                        .map(|province| province.name),
                    _ => None,
                };
                if let Some(name) = found {
                    return Ok(Some(name));
                }
            }
        }

        Ok(Some(format!("{} {}", level.label(), id)))
    }
}

/// Apply the government-code checks: range, reserved denylist, and the
/// structural parent-prefix relationship at every supplied level.
fn validate_government_codes(payload: &Value, city: i64, province: i64) -> bool {
    if !PROVINCE_CODE_RANGE.contains(&province) || RESERVED_PROVINCE_CODES.contains(&province) {
        return false;
    }
    if !REGENCY_CODE_RANGE.contains(&city) {
        return false;
    }
    // The regency code's leading two digits are its province code
    if city / 100 != province {
        return false;
    }

    // District and village are optional, but when supplied they must be
    // numeric and prefix-consistent with their parent.
    let district = match optional_code(payload, AddressLevel::District) {
        Ok(district) => district,
        Err(NotNumeric) => return false,
    };
    if let Some(district) = district {
        if district / 100 != city {
            return false;
        }
    }

    let village = match optional_code(payload, AddressLevel::Village) {
        Ok(village) => village,
        Err(NotNumeric) => return false,
    };
    if let Some(village) = village {
        match district {
            // 10-digit village codes extend the 6-digit district code
            Some(district) => {
                if village / 10_000 != district {
                    return false;
                }
            }
            // No district supplied: fall back to the regency prefix
            None => {
                if village / 1_000_000 != city {
                    return false;
                }
            }
        }
    }

    true
}

struct NotNumeric;

/// Extract an optional deeper-level code: absent is fine, present but
/// non-numeric is a scheme violation within a government-code payload.
fn optional_code(
    payload: &Value,
    level: AddressLevel,
) -> std::result::Result<Option<i64>, NotNumeric> {
    match extract_identifier(payload, level) {
        None => Ok(None),
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| NotNumeric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        jakarta_fixtures, InMemoryRegionRepository, JAKARTA_PROVINCE_ID, JAKARTA_REGENCY_ID,
    };
    use serde_json::json;

    fn resolver(repo: InMemoryRegionRepository) -> AddressResolver {
        AddressResolver::new(Arc::new(repo))
    }

    // ==================== validate: payload shape ====================

    #[tokio::test]
    async fn empty_and_null_payloads_are_invalid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        assert!(!resolver.validate(&json!({})).await.unwrap());
        assert!(!resolver.validate(&json!(null)).await.unwrap());
        assert!(!resolver.validate(&json!("3171")).await.unwrap());
        assert!(!resolver.validate(&json!([1, 2, 3])).await.unwrap());
    }

    #[tokio::test]
    async fn missing_required_level_is_invalid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        assert!(!resolver
            .validate(&json!({ "city_id": "3171" }))
            .await
            .unwrap());
        assert!(!resolver
            .validate(&json!({ "province_id": "31" }))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn empty_string_flat_field_defers_to_nested_code() {
        // Regression guard: "" used to be treated as a present identifier,
        // which rejected payloads carrying the real code in the nested object
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({
            "city_id": "",
            "city": { "code": "3101" },
            "province_id": "31"
        });
        assert!(resolver.validate(&payload).await.unwrap());
    }

    // ==================== validate: government codes ====================

    #[tokio::test]
    async fn matching_government_pair_is_valid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "3101", "province_id": "31" });
        assert!(resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn mismatched_prefix_is_invalid() {
        // 3201 belongs to province 32, not 31
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "3201", "province_id": "31" });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn out_of_range_province_is_invalid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        for (city, province) in [("9901", "99"), ("1001", "10"), ("0101", "01")] {
            let payload = json!({ "city_id": city, "province_id": province });
            assert!(
                !resolver.validate(&payload).await.unwrap(),
                "province {} should be out of range",
                province
            );
        }
    }

    #[tokio::test]
    async fn reserved_province_codes_are_invalid_even_in_range() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        for province in [17, 20, 39, 50, 93] {
            let payload = json!({
                "city_id": format!("{}01", province),
                "province_id": province.to_string()
            });
            assert!(
                !resolver.validate(&payload).await.unwrap(),
                "province {} is reserved",
                province
            );
        }
    }

    #[tokio::test]
    async fn out_of_range_regency_is_invalid() {
        // Prefix matches province 94 but 9481 is past the assigned range
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "9481", "province_id": "94" });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn non_numeric_identifiers_are_invalid_not_errors() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "jakarta", "province_id": "31" });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn consistent_district_and_village_pass() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({
            "city_id": "3101",
            "province_id": "31",
            "district_id": "310101",
            "village_id": "3101011001"
        });
        assert!(resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn district_contradicting_city_is_invalid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({
            "city_id": "3101",
            "province_id": "31",
            "district_id": "320101"
        });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn village_contradicting_district_is_invalid() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({
            "city_id": "3101",
            "province_id": "31",
            "district_id": "310101",
            "village_id": "3102011001"
        });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    // ==================== validate: legacy identifiers ====================

    #[tokio::test]
    async fn legacy_pair_valid_when_both_rows_exist() {
        let resolver = resolver(jakarta_fixtures());
        let payload = json!({
            "city_id": JAKARTA_REGENCY_ID,
            "province_id": JAKARTA_PROVINCE_ID
        });
        assert!(resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn legacy_pair_invalid_when_either_row_missing() {
        let resolver = resolver(jakarta_fixtures());
        let unknown = "00000000-0000-0000-0000-00000000beef";

        let payload = json!({
            "city_id": unknown,
            "province_id": JAKARTA_PROVINCE_ID
        });
        assert!(!resolver.validate(&payload).await.unwrap());

        let payload = json!({
            "city_id": JAKARTA_REGENCY_ID,
            "province_id": unknown
        });
        assert!(!resolver.validate(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn legacy_ids_do_not_check_parent_link() {
        // Existence of both rows suffices even when the regency belongs to a
        // different province. Long-standing accepted behavior; see DESIGN.md.
        let repo = InMemoryRegionRepository::empty()
            .with_province("11111111-1111-1111-1111-111111111111", "31", "DKI Jakarta")
            .with_regency(
                "22222222-2222-2222-2222-222222222222",
                "3201",
                "Kabupaten Bogor",
                "33333333-3333-3333-3333-333333333333",
            );
        let resolver = resolver(repo);
        let payload = json!({
            "city_id": "22222222-2222-2222-2222-222222222222",
            "province_id": "11111111-1111-1111-1111-111111111111"
        });
        assert!(resolver.validate(&payload).await.unwrap());
    }

    // ==================== format ====================

    #[tokio::test]
    async fn format_empty_payload_yields_sentinel() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        assert_eq!(resolver.format(&json!({})).await.unwrap(), "Unknown location");
        assert_eq!(
            resolver.format(&json!(null)).await.unwrap(),
            "Unknown location"
        );
    }

    #[tokio::test]
    async fn format_joins_city_then_province() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({
            "city": { "name": "Jakarta Selatan" },
            "province_name": "DKI Jakarta"
        });
        assert_eq!(
            resolver.format(&payload).await.unwrap(),
            "Jakarta Selatan, DKI Jakarta"
        );
    }

    #[tokio::test]
    async fn format_single_name_stands_alone() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city": { "name": "Jakarta Selatan" } });
        assert_eq!(resolver.format(&payload).await.unwrap(), "Jakarta Selatan");
    }

    #[tokio::test]
    async fn format_resolves_legacy_identifiers_through_store() {
        let resolver = resolver(jakarta_fixtures());
        let payload = json!({
            "city_id": JAKARTA_REGENCY_ID,
            "province_id": JAKARTA_PROVINCE_ID
        });
        assert_eq!(
            resolver.format(&payload).await.unwrap(),
            "Jakarta Selatan, DKI Jakarta"
        );
    }

    #[tokio::test]
    async fn format_degrades_to_placeholders_for_bare_codes() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "3171", "province_id": "31" });
        assert_eq!(
            resolver.format(&payload).await.unwrap(),
            "City 3171, Province 31"
        );
    }

    #[tokio::test]
    async fn format_unknown_legacy_id_degrades_to_placeholder() {
        let resolver = resolver(InMemoryRegionRepository::empty());
        let payload = json!({ "city_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" });
        assert_eq!(
            resolver.format(&payload).await.unwrap(),
            "City 7c9e6679-7425-40de-944b-e07fc1f90ae7"
        );
    }

    // ==================== idempotence ====================

    #[tokio::test]
    async fn repeated_calls_yield_identical_results() {
        let resolver = resolver(jakarta_fixtures());
        let payload = json!({
            "city_id": JAKARTA_REGENCY_ID,
            "province_id": JAKARTA_PROVINCE_ID
        });

        let first_valid = resolver.validate(&payload).await.unwrap();
        let second_valid = resolver.validate(&payload).await.unwrap();
        assert_eq!(first_valid, second_valid);

        let first_formatted = resolver.format(&payload).await.unwrap();
        let second_formatted = resolver.format(&payload).await.unwrap();
        assert_eq!(first_formatted, second_formatted);
    }
}
