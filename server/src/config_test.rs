use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PORTFOLIO_ASSETS_DIR");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("../assets"));
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("PORTFOLIO_ASSETS_DIR", "/srv/portfolio/assets");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/portfolio/assets"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_invalid_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { value } if value == "eighty"));

    unsafe { clear_server_env() };
}

#[test]
fn load_catalog_accepts_embedded_data() {
    let catalog = load_catalog().unwrap();
    assert!(catalog.get("atm").is_some());
}
