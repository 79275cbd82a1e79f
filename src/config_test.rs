use super::*;

/// # Safety
/// Only one test in this crate touches these variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("RMS_API_BASE");
    }
}

#[test]
fn from_env_defaults_then_overrides() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api, ApiConfig::default());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("RMS_API_BASE", "https://rms.example.org/api/v1/");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.base(), "https://rms.example.org/api/v1");
    assert_eq!(cfg.api.ratings_url(), "https://rms.example.org/api/v1/ratings");

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_api_base_accepts_urls_and_paths() {
    assert_eq!(parse_api_base(None), Ok(ApiConfig::default()));
    assert_eq!(parse_api_base(Some("http://10.0.0.5:8000/api/v1")).unwrap().base(), "http://10.0.0.5:8000/api/v1");
    assert_eq!(parse_api_base(Some("/api/v1")).unwrap().base(), "/api/v1");
}

#[test]
fn parse_api_base_rejects_blank_and_schemeless() {
    assert_eq!(parse_api_base(Some("   ")), Err(ConfigError::InvalidApiBase(String::new())));
    assert_eq!(
        parse_api_base(Some("rms.example.org/api")),
        Err(ConfigError::InvalidApiBase("rms.example.org/api".into()))
    );
}

#[test]
fn parse_api_base_rejects_bare_root() {
    assert_eq!(parse_api_base(Some("/")), Err(ConfigError::InvalidApiBase("/".into())));
    assert_eq!(parse_api_base(Some(" // ")), Err(ConfigError::InvalidApiBase("//".into())));
}
