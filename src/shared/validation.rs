use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the legacy opaque region identifier shape
    /// (32 hex digits in 8-4-4-4-12 grouping, the primary-key format
    /// the region tables used before BPS codes were adopted)
    /// - Valid: "7c9e6679-7425-40de-944b-e07fc1f90ae7"
    /// - Invalid: "7c9e667974254" (no grouping), "3171" (BPS code)
    pub static ref LEGACY_ID_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();

    /// Regex for BPS administrative codes as submitted by forms
    /// (digits only; length depends on the level: 2 for province,
    /// 4 for regency/city, 6 for district, 10 for village)
    pub static ref BPS_CODE_REGEX: Regex = Regex::new(r"^[0-9]{2,10}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_id_regex_valid() {
        assert!(LEGACY_ID_REGEX.is_match("7c9e6679-7425-40de-944b-e07fc1f90ae7"));
        assert!(LEGACY_ID_REGEX.is_match("00000000-0000-0000-0000-000000000000"));
        assert!(LEGACY_ID_REGEX.is_match("AABBCCDD-EEFF-0011-2233-445566778899"));
    }

    #[test]
    fn test_legacy_id_regex_invalid() {
        assert!(!LEGACY_ID_REGEX.is_match("7c9e6679742540de944be07fc1f90ae7")); // no hyphens
        assert!(!LEGACY_ID_REGEX.is_match("7c9e6679-7425-40de-944b")); // truncated
        assert!(!LEGACY_ID_REGEX.is_match("zc9e6679-7425-40de-944b-e07fc1f90ae7")); // non-hex
        assert!(!LEGACY_ID_REGEX.is_match("3171")); // BPS code
        assert!(!LEGACY_ID_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_bps_code_regex() {
        assert!(BPS_CODE_REGEX.is_match("31"));
        assert!(BPS_CODE_REGEX.is_match("3171"));
        assert!(BPS_CODE_REGEX.is_match("317101"));
        assert!(BPS_CODE_REGEX.is_match("3171011001"));
        assert!(!BPS_CODE_REGEX.is_match("3")); // too short
        assert!(!BPS_CODE_REGEX.is_match("31.71")); // dotted form not accepted
        assert!(!BPS_CODE_REGEX.is_match("abcd"));
    }
}
