use flowershop_admin::{
    AppConfig,
    config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_SESSION_FILE, Env},
};
use serial_test::serial;
use std::{env, panic, path::PathBuf};

// --- Setup/Teardown Utilities ---

const VARS: [&str; 3] = ["APP_ENV", "API_BASE_URL", "ADMIN_SESSION_FILE"];

/// Runs `test` with the given variables set (or removed when `None`) and
/// restores the previous environment afterwards, even if `test` panics.
fn run_with_env<T, R>(vars: &[(&str, Option<&str>)], test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> =
        VARS.iter().map(|&var| (var, env::var(var).ok())).collect();

    unsafe {
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            if let Some(value) = value {
                env::set_var(key, value);
            }
        }
    }

    let result = panic::catch_unwind(test);

    unsafe {
        for (key, original) in originals {
            match original {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_local_defaults_when_nothing_is_set() {
    let config = run_with_env(&[], AppConfig::load);

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
}

#[test]
#[serial]
fn test_base_url_read_from_environment() {
    let config = run_with_env(
        &[
            ("API_BASE_URL", Some("https://shop.example.com/api")),
            ("ADMIN_SESSION_FILE", Some("/tmp/flowershop-session.json")),
        ],
        AppConfig::load,
    );

    assert_eq!(config.base_url, "https://shop.example.com/api");
    assert_eq!(
        config.session_file,
        PathBuf::from("/tmp/flowershop-session.json")
    );
}

#[test]
#[serial]
fn test_empty_base_url_falls_back_locally() {
    let config = run_with_env(&[("API_BASE_URL", Some("  "))], AppConfig::load);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
#[serial]
fn test_production_fail_fast_without_base_url() {
    let result = run_with_env(&[("APP_ENV", Some("production"))], || {
        panic::catch_unwind(AppConfig::load)
    });

    assert!(
        result.is_err(),
        "Production config loading should panic without API_BASE_URL"
    );
}

#[test]
#[serial]
fn test_production_with_base_url() {
    let config = run_with_env(
        &[
            ("APP_ENV", Some("production")),
            ("API_BASE_URL", Some("https://api.quahoa.vn/api")),
        ],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.base_url, "https://api.quahoa.vn/api");
}

#[test]
fn test_explicit_config_rejects_empty_base_url() {
    assert_eq!(AppConfig::new("").unwrap_err(), ConfigError::EmptyBaseUrl);
    assert_eq!(AppConfig::new(" \t").unwrap_err(), ConfigError::EmptyBaseUrl);

    let config = AppConfig::new("http://x/api").unwrap();
    assert_eq!(config.base_url, "http://x/api");
    assert_eq!(config.env, Env::Local);
}
