//! Tests for configuration module.

use super::*;

fn settings_with_caps(default_cap: usize, max_cap: usize, preview_cap: usize) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8698,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        generation: GenerationConfig {
            default_cap,
            max_cap,
            preview_cap,
        },
    }
}

#[test]
fn test_bind_addr_and_origin() {
    let settings = settings_with_caps(100, 1000, 50);
    assert_eq!(settings.server.bind_addr(), "127.0.0.1:8698");
    assert_eq!(settings.server.origin(), "http://127.0.0.1:8698");
}

#[test]
fn test_explicit_origin_wins() {
    let mut settings = settings_with_caps(100, 1000, 50);
    settings.server.serve_origin = Some("https://dates.example.com".to_string());
    assert_eq!(settings.server.origin(), "https://dates.example.com");
}

#[test]
fn test_resolve_cap_defaults_and_clamps() {
    let generation = GenerationConfig {
        default_cap: 100,
        max_cap: 500,
        preview_cap: 50,
    };

    assert_eq!(generation.resolve_cap(None), 100);
    assert_eq!(generation.resolve_cap(Some(7)), 7);
    assert_eq!(generation.resolve_cap(Some(0)), 0);
    assert_eq!(generation.resolve_cap(Some(10_000)), 500);
}

#[test_log::test]
fn test_check_accepts_consistent_caps() {
    tracing::debug!("Checking consistent generation caps");
    assert!(settings_with_caps(100, 1000, 50).check().is_ok());
    assert!(settings_with_caps(1000, 1000, 1000).check().is_ok());
}

#[test]
fn test_check_rejects_zero_max_cap() {
    let err = settings_with_caps(0, 0, 0).check().unwrap_err();
    assert!(matches!(err, CoreError::ConfigError(_)));
}

#[test]
fn test_check_rejects_default_above_max() {
    let err = settings_with_caps(200, 100, 50).check().unwrap_err();
    assert!(err.to_string().contains("default_cap"));
}

#[test]
fn test_check_rejects_preview_above_max() {
    let err = settings_with_caps(10, 100, 150).check().unwrap_err();
    assert!(err.to_string().contains("preview_cap"));
}

#[test]
fn test_settings_debug() {
    let settings = settings_with_caps(100, 1000, 50);

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("server"));
    assert!(debug_str.contains("generation"));
}

#[test]
fn test_defaults_alone_form_valid_settings() {
    let settings = Settings::defaults()
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();

    assert_eq!(settings.server.bind_addr(), "0.0.0.0:8698");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(
        u64::try_from(settings.generation.default_cap).unwrap(),
        DEFAULT_GENERATE_CAP
    );
    assert_eq!(u64::try_from(settings.generation.max_cap).unwrap(), DEFAULT_MAX_CAP);
    assert_eq!(
        u64::try_from(settings.generation.preview_cap).unwrap(),
        DEFAULT_PREVIEW_CAP
    );
    assert!(settings.check().is_ok());
    assert_eq!(settings.generation.resolve_cap(None), 100);
}
