//! Integration test for the bundled sample configuration.

use price_engine::LocaleHint;
use price_engine::config::{PersistenceBackend, load_config};
use rust_decimal_macros::dec;

#[test]
fn test_sample_config_loads_with_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.yaml");
    let config = load_config(Some(path)).unwrap();

    assert_eq!(config.extraction.locale_hint, LocaleHint::Auto);
    assert_eq!(config.extraction.proxy_country, None);
    assert_eq!(config.monitoring.threshold_percent, dec!(10));
    assert_eq!(config.persistence.backend, PersistenceBackend::Duckdb);
    assert_eq!(config.persistence.db_path, "./data/prices.duckdb");
    assert_eq!(config.observability.logging.format, "compact");
}

#[test]
fn test_missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_config(path.to_str()).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}
