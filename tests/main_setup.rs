use foodisus::{
    AppConfig,
    config::{ConfigError, DEFAULT_SESSION_SECRET, Env},
};
use serial_test::serial;
use std::{env, panic, path::PathBuf};

const CONFIG_VARS: &[&str] = &[
    "APP_ENV",
    "SESSION_SECRET",
    "DB_HOST",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_PORT",
    "PORT",
    "PUBLIC_DIR",
];

// --- Setup/Teardown Utilities ---

/// Clears every config variable, applies `vars`, runs `test`, then restores the
/// original environment.
fn run_with_env<T, R>(vars: &[(&str, &str)], test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|&var| (var, env::var(var).ok()))
        .collect();

    unsafe {
        for var in CONFIG_VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
    }

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            match original_value {
                Some(val) => env::set_var(key, val),
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
fn test_empty_environment_uses_defaults() {
    let config = run_with_env(&[], AppConfig::load).expect("defaults load");

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.session_secret, DEFAULT_SESSION_SECRET);
    assert!(config.session_secret_is_default);
    assert_eq!(config.db.host, "localhost");
    assert_eq!(config.db.user, "postgres");
    assert_eq!(config.db.password, "admin");
    assert_eq!(config.db.name, "foodisus");
    assert_eq!(config.db.port, 5432);
    assert_eq!(config.port, 3000);
    assert_eq!(config.public_dir, PathBuf::from("public"));
}

#[test]
#[serial]
fn test_environment_overrides_every_setting() {
    let config = run_with_env(
        &[
            ("APP_ENV", "production"),
            ("SESSION_SECRET", "a-real-secret"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "site"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_NAME", "recipes"),
            ("DB_PORT", "6543"),
            ("PORT", "8080"),
            ("PUBLIC_DIR", "/srv/public"),
        ],
        AppConfig::load,
    )
    .expect("overrides load");

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.session_secret, "a-real-secret");
    assert!(!config.session_secret_is_default);
    assert_eq!(config.db.host, "db.internal");
    assert_eq!(config.db.user, "site");
    assert_eq!(config.db.password, "hunter2");
    assert_eq!(config.db.name, "recipes");
    assert_eq!(config.db.port, 6543);
    assert_eq!(config.port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
}

#[test]
#[serial]
fn test_empty_session_secret_falls_back() {
    let config = run_with_env(&[("SESSION_SECRET", "")], AppConfig::load).unwrap();

    assert_eq!(config.session_secret, DEFAULT_SESSION_SECRET);
    assert!(config.session_secret_is_default);
}

#[test]
#[serial]
fn test_unknown_app_env_is_local() {
    let config = run_with_env(&[("APP_ENV", "staging")], AppConfig::load).unwrap();
    assert_eq!(config.env, Env::Local);
}

#[test]
#[serial]
fn test_malformed_port_is_rejected() {
    let err = run_with_env(&[("PORT", "three-thousand")], AppConfig::load)
        .expect_err("non-numeric PORT must fail");

    match err {
        ConfigError::InvalidPort { var, value } => {
            assert_eq!(var, "PORT");
            assert_eq!(value, "three-thousand");
        }
    }
}

#[test]
#[serial]
fn test_out_of_range_db_port_is_rejected() {
    let err = run_with_env(&[("DB_PORT", "70000")], AppConfig::load).unwrap_err();
    assert!(err.to_string().contains("DB_PORT"));
}

#[test]
fn test_default_config_matches_empty_environment_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.port, 3000);
    assert!(config.session_secret_is_default);
}
