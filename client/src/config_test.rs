use super::*;

#[test]
fn default_points_at_local_backend() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "http://localhost:8000");
    assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn api_base_trailing_slashes_trimmed() {
    let cfg = ClientConfig::from_raw(Some("https://api.example.test//"), None);
    assert_eq!(cfg.api_base, "https://api.example.test");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let cfg = ClientConfig::from_raw(Some("   "), None);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn timeout_parses_override() {
    let cfg = ClientConfig::from_raw(None, Some(" 5000 "));
    assert_eq!(cfg.request_timeout_ms, 5000);
}

#[test]
fn timeout_zero_or_garbage_falls_back() {
    assert_eq!(parse_timeout_ms(Some("0")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(Some("soon")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(Some("-1")), DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::from_raw(Some("http://localhost:8000/"), None);
    assert_eq!(cfg.endpoint("/query"), "http://localhost:8000/query");
    assert_eq!(cfg.endpoint("login"), "http://localhost:8000/login");
}
