//! Schema name generation
//!
//! Derives stable PascalCase schema names from endpoint identifiers.

/// Derive a PascalCase schema name ending in `Response`.
///
/// Every literal `api_` and `_GET`/`_POST` occurrence is stripped, the
/// remainder is split on underscores, empty segments are dropped, and each
/// segment is capitalized. Deterministic and pure: two endpoints that
/// normalize to the same name collide, and the later one wins in the
/// combined document.
pub fn schema_name(endpoint: &str) -> String {
    let cleaned = endpoint
        .replace("api_", "")
        .replace("_GET", "")
        .replace("_POST", "");

    let mut name: String = cleaned
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();
    name.push_str("Response");
    name
}

/// Uppercase the first character, lowercase the rest
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("api_users_GET", "UsersResponse"; "get endpoint")]
    #[test_case("api_orders_items_POST", "OrdersItemsResponse"; "nested post endpoint")]
    #[test_case("", "Response"; "empty identifier")]
    #[test_case("users", "UsersResponse"; "no affixes")]
    #[test_case("api_api_users", "UsersResponse"; "repeated prefix")]
    #[test_case("health_check", "HealthCheckResponse"; "two segments")]
    #[test_case("api_v2_users_GET", "V2UsersResponse"; "versioned path")]
    #[test_case("USERS", "UsersResponse"; "uppercase input lowered")]
    #[test_case("__users__", "UsersResponse"; "stray underscores dropped")]
    fn test_schema_name(endpoint: &str, expected: &str) {
        assert_eq!(schema_name(endpoint), expected);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(schema_name("api_users_GET"), schema_name("api_users_GET"));
    }

    #[test]
    fn test_distinct_endpoints_can_collide() {
        // Accepted behavior: the combined document keeps the later entry
        assert_eq!(schema_name("users_GET"), schema_name("users_POST"));
    }
}
