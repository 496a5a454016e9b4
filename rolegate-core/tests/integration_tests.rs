//! Integration tests for rolegate-core infrastructure

use rolegate_core::{
    config_error, init_logging, not_found_error, resolver_error, validation_error, ErrorContext,
    GroupType, LogFormat, LoggingConfig, RolegateConfig, RolegateError,
};

#[test]
fn test_error_handling() {
    // Test error creation with context
    let error = resolver_error!("Backend unavailable", "alice", "test_component");

    match &error {
        RolegateError::Resolver {
            message,
            login,
            context,
            ..
        } => {
            assert_eq!(message, "Backend unavailable");
            assert_eq!(login.as_deref(), Some("alice"));
            assert_eq!(context.component, "test_component");
            assert!(!context.error_id.is_empty());
        }
        _ => panic!("Expected Resolver error"),
    }

    // Test error logging (should not panic)
    error.log();

    // Resolver faults are treated as recoverable backend problems
    assert!(error.is_recoverable());
    assert!(error.retry_delay_ms().is_some());

    let config_error = config_error!("Invalid config", "test");
    assert!(!config_error.is_recoverable());
    assert!(config_error.retry_delay_ms().is_none());

    let not_found = not_found_error!("session-123", "test");
    assert!(!not_found.is_recoverable());

    let validation = validation_error!("bad value", "logging.level", "test");
    match &validation {
        RolegateError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("logging.level"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_error_context_builders() {
    let context = ErrorContext::new("group_cache")
        .with_operation("initialize")
        .with_metadata("login", "alice")
        .with_suggestion("Retry the login");

    assert_eq!(context.component, "group_cache");
    assert_eq!(context.operation.as_deref(), Some("initialize"));
    assert_eq!(context.metadata.get("login").map(String::as_str), Some("alice"));
    assert_eq!(context.recovery_suggestions.len(), 1);
}

#[test]
fn test_logging_initialization() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Compact,
        include_location: false,
        include_thread: false,
        filter_directives: vec!["rolegate_core=debug".to_string()],
    };

    // Note: the tracing subscriber can only be installed once per process, so
    // a second initialization may fail; the first call must not panic.
    let _ = init_logging(&config);
}

#[test]
fn test_config_defaults() {
    let config = RolegateConfig::default();

    assert_eq!(config.session.timeout_minutes, 480);
    assert_eq!(
        config.resolver.default_groups,
        vec!["ADMIN", "USER", "GROUP2"]
    );
    assert!(config.resolver.overrides.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rolegate.toml");

    let mut config = RolegateConfig::default();
    config.session.timeout_minutes = 60;
    config
        .resolver
        .overrides
        .insert("bob".to_string(), vec!["USER".to_string()]);

    config.save_to_file(&path).unwrap();
    let loaded = RolegateConfig::from_file(&path).unwrap();

    assert_eq!(loaded.session.timeout_minutes, 60);
    assert_eq!(
        loaded.resolver.overrides.get("bob"),
        Some(&vec!["USER".to_string()])
    );
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_validation_failures() {
    let mut config = RolegateConfig::default();
    config.session.timeout_minutes = 0;
    assert!(config.validate().is_err());

    let mut config = RolegateConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    let mut config = RolegateConfig::default();
    config.resolver.default_groups = vec!["WHEEL".to_string()];
    assert!(config.validate().is_err());

    // Group names in config are case-insensitive, like GroupType parsing
    let mut config = RolegateConfig::default();
    config.resolver.default_groups = vec!["admin".to_string()];
    assert!(config.validate().is_ok());
    assert_eq!("admin".parse::<GroupType>().unwrap(), GroupType::Admin);
}

#[test]
fn test_missing_config_file() {
    let result = RolegateConfig::from_file("/nonexistent/rolegate.toml");
    assert!(matches!(result, Err(RolegateError::Config { .. })));
}
