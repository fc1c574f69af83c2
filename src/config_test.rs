use super::*;

#[test]
fn default_matches_constants() {
    let cfg = FetchConfig::default();
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
    assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("PANELKIT_TEST_UNSET_VAR", 7u64), 7);
}

#[test]
fn env_parse_reads_override() {
    // Unique var name so parallel tests cannot race on it.
    unsafe { std::env::set_var("PANELKIT_TEST_OVERRIDE_VAR", "42") };
    assert_eq!(env_parse("PANELKIT_TEST_OVERRIDE_VAR", 7u64), 42);
    unsafe { std::env::remove_var("PANELKIT_TEST_OVERRIDE_VAR") };
}

#[test]
fn env_parse_ignores_unparseable_values() {
    unsafe { std::env::set_var("PANELKIT_TEST_GARBAGE_VAR", "not-a-number") };
    assert_eq!(env_parse("PANELKIT_TEST_GARBAGE_VAR", 7u64), 7);
    unsafe { std::env::remove_var("PANELKIT_TEST_GARBAGE_VAR") };
}
