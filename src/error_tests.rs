//! Tests for LookupError and ConfigError

use super::*;

#[test]
fn test_cancelled_error_display() {
    let error = LookupError::Cancelled;
    assert_eq!(error.to_string(), "Lookup cancelled");
}

#[test]
fn test_not_configured_error_display() {
    let error = LookupError::NotConfigured("missing url".to_string());
    assert!(error.to_string().contains("not configured"));
}

#[test]
fn test_network_error_display() {
    let error = LookupError::Network("connection refused".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Network error"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn test_status_error_display() {
    let error = LookupError::Status {
        code: 503,
        message: "unavailable".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("503"));
    assert!(msg.contains("unavailable"));
}

#[test]
fn test_parse_error_display() {
    let error = LookupError::Parse("expected value at line 1".to_string());
    assert!(error.to_string().contains("Malformed response"));
}

#[test]
fn test_only_cancelled_is_cancelled() {
    assert!(LookupError::Cancelled.is_cancelled());
    assert!(!LookupError::Network("x".to_string()).is_cancelled());
    assert!(!LookupError::Parse("x".to_string()).is_cancelled());
    assert!(
        !LookupError::Status {
            code: 500,
            message: String::new()
        }
        .is_cancelled()
    );
}

#[test]
fn test_error_equality() {
    let err1 = LookupError::Network("test".to_string());
    let err2 = LookupError::Network("test".to_string());
    let err3 = LookupError::Network("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_config_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let config_err = ConfigError::from(io_err);
    assert!(matches!(config_err, ConfigError::Io(_)));
    assert!(config_err.to_string().contains("denied"));
}

#[test]
fn test_config_parse_error_from_toml_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let config_err = ConfigError::from(toml_err);
    assert!(matches!(config_err, ConfigError::Parse(_)));
    assert!(config_err.to_string().starts_with("Invalid config file"));
}
