use serde_json::Value;

/// Administrative level of an address component.
///
/// Booking and listing forms submit each level either as a flat
/// `<level>_id` field or as a nested `{code, id, name}` object; both
/// shapes are in the wild and must keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressLevel {
    Province,
    City,
    District,
    Village,
}

impl AddressLevel {
    /// Flat identifier field name
    pub fn flat_key(&self) -> &'static str {
        match self {
            AddressLevel::Province => "province_id",
            AddressLevel::City => "city_id",
            AddressLevel::District => "district_id",
            AddressLevel::Village => "village_id",
        }
    }

    /// Nested sub-object field name
    pub fn nested_key(&self) -> &'static str {
        match self {
            AddressLevel::Province => "province",
            AddressLevel::City => "city",
            AddressLevel::District => "district",
            AddressLevel::Village => "village",
        }
    }

    /// Flat display-name field name
    pub fn name_key(&self) -> &'static str {
        match self {
            AddressLevel::Province => "province_name",
            AddressLevel::City => "city_name",
            AddressLevel::District => "district_name",
            AddressLevel::Village => "village_name",
        }
    }

    /// Label used for placeholder rendering ("City 3171")
    pub fn label(&self) -> &'static str {
        match self {
            AddressLevel::Province => "Province",
            AddressLevel::City => "City",
            AddressLevel::District => "District",
            AddressLevel::Village => "Village",
        }
    }
}

/// Extract the identifier for one administrative level.
///
/// Precedence: flat `<level>_id` field, then the nested object's `code`,
/// then the nested object's `id`. An empty or whitespace-only string counts
/// as absent, not as a value: older frontends send `""` for untouched
/// dropdowns, and treating that as present rejected otherwise-valid
/// payloads carrying the code in the nested object.
pub fn extract_identifier(payload: &Value, level: AddressLevel) -> Option<String> {
    let obj = payload.as_object()?;

    if let Some(id) = obj.get(level.flat_key()).and_then(value_as_identifier) {
        return Some(id);
    }

    let nested = obj.get(level.nested_key())?.as_object()?;
    nested
        .get("code")
        .and_then(value_as_identifier)
        .or_else(|| nested.get("id").and_then(value_as_identifier))
}

/// Extract a display name for one level: nested `name` first, then the
/// flat `<level>_name` field.
pub fn extract_name(payload: &Value, level: AddressLevel) -> Option<String> {
    let obj = payload.as_object()?;
    obj.get(level.nested_key())
        .and_then(|nested| nested.get("name"))
        .and_then(value_as_identifier)
        .or_else(|| obj.get(level.name_key()).and_then(value_as_identifier))
}

/// Coerce a JSON value into an identifier string. Numbers are accepted
/// because some clients send BPS codes unquoted.
fn value_as_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_field_takes_precedence_over_nested() {
        let payload = json!({
            "city_id": "3171",
            "city": { "code": "9999", "id": "ignored" }
        });
        assert_eq!(
            extract_identifier(&payload, AddressLevel::City).as_deref(),
            Some("3171")
        );
    }

    #[test]
    fn empty_flat_field_falls_through_to_nested_code() {
        let payload = json!({
            "city_id": "",
            "city": { "code": "3171" }
        });
        assert_eq!(
            extract_identifier(&payload, AddressLevel::City).as_deref(),
            Some("3171")
        );
    }

    #[test]
    fn nested_code_takes_precedence_over_nested_id() {
        let payload = json!({
            "province": { "code": "31", "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" }
        });
        assert_eq!(
            extract_identifier(&payload, AddressLevel::Province).as_deref(),
            Some("31")
        );
    }

    #[test]
    fn nested_id_used_when_code_missing() {
        let payload = json!({
            "province": { "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" }
        });
        assert_eq!(
            extract_identifier(&payload, AddressLevel::Province).as_deref(),
            Some("7c9e6679-7425-40de-944b-e07fc1f90ae7")
        );
    }

    #[test]
    fn numeric_codes_are_accepted() {
        let payload = json!({ "city_id": 3171 });
        assert_eq!(
            extract_identifier(&payload, AddressLevel::City).as_deref(),
            Some("3171")
        );
    }

    #[test]
    fn missing_level_yields_none() {
        let payload = json!({ "street_address": "Jl. Sudirman 1" });
        assert_eq!(extract_identifier(&payload, AddressLevel::City), None);
        assert_eq!(extract_identifier(&json!(null), AddressLevel::City), None);
        assert_eq!(extract_identifier(&json!([1, 2]), AddressLevel::City), None);
    }

    #[test]
    fn name_prefers_nested_over_flat() {
        let payload = json!({
            "city_name": "Bekasi",
            "city": { "name": "Jakarta Selatan" }
        });
        assert_eq!(
            extract_name(&payload, AddressLevel::City).as_deref(),
            Some("Jakarta Selatan")
        );
    }

    #[test]
    fn flat_name_used_when_nested_absent() {
        let payload = json!({ "province_name": "DKI Jakarta" });
        assert_eq!(
            extract_name(&payload, AddressLevel::Province).as_deref(),
            Some("DKI Jakarta")
        );
    }
}
