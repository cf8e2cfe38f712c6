use uuid::Uuid;

use crate::shared::validation::{BPS_CODE_REGEX, LEGACY_ID_REGEX};

/// Identifier scheme a payload uses for its region references.
///
/// Exactly one scheme is authoritative per payload: either both required
/// identifiers are legacy opaque primary keys into the region tables, or
/// both are BPS government codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScheme {
    /// Legacy opaque primary keys (pre-BPS-code payloads)
    Legacy { city: Uuid, province: Uuid },
    /// BPS government codes
    Government { city: i64, province: i64 },
}

impl IdentifierScheme {
    /// Classify the required city/province identifier pair.
    ///
    /// The legacy scheme applies only when both identifiers have the
    /// 8-4-4-4-12 opaque shape; anything else is tried as a pair of
    /// government codes. A pair that parses as neither yields `None` --
    /// a scheme mismatch, not an error.
    pub fn classify(city: &str, province: &str) -> Option<Self> {
        if LEGACY_ID_REGEX.is_match(city) && LEGACY_ID_REGEX.is_match(province) {
            let city = Uuid::parse_str(city).ok()?;
            let province = Uuid::parse_str(province).ok()?;
            return Some(IdentifierScheme::Legacy { city, province });
        }

        if !BPS_CODE_REGEX.is_match(city) || !BPS_CODE_REGEX.is_match(province) {
            return None;
        }
        let city = city.parse::<i64>().ok()?;
        let province = province.parse::<i64>().ok()?;
        Some(IdentifierScheme::Government { city, province })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_opaque_identifiers_classify_as_legacy() {
        let scheme = IdentifierScheme::classify(
            "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "16fd2706-8baf-433b-82eb-8c7fada847da",
        );
        assert!(matches!(scheme, Some(IdentifierScheme::Legacy { .. })));
    }

    #[test]
    fn numeric_pair_classifies_as_government() {
        assert_eq!(
            IdentifierScheme::classify("3171", "31"),
            Some(IdentifierScheme::Government {
                city: 3171,
                province: 31
            })
        );
    }

    #[test]
    fn mixed_pair_is_not_legacy() {
        // One opaque identifier plus one code cannot satisfy either scheme
        let scheme =
            IdentifierScheme::classify("7c9e6679-7425-40de-944b-e07fc1f90ae7", "31");
        assert_eq!(scheme, None);
    }

    #[test]
    fn garbage_classifies_as_neither() {
        assert_eq!(IdentifierScheme::classify("jakarta", "31"), None);
        assert_eq!(IdentifierScheme::classify("3171", ""), None);
    }
}
