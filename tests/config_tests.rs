// File: tests/config_tests.rs
use coursedeck::config::Config;
use coursedeck::context::{AppContext, TestContext};
use coursedeck::logging;
use serial_test::serial;
use std::fs;

#[test]
fn test_defaults() {
    let c = Config::default();
    assert_eq!(c.path_prefix, "/~obaumgartner");
    assert_eq!(c.phasor_frequency_hz, 0.5);
    assert!(c.show_sum);
    assert_eq!(c.frame_rate, 30);
    assert_eq!(c.epicycle_trace_len, 500);
    assert!(!c.default_obligatory);
    assert_eq!(c.log_level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_missing_file_is_reported_and_defaulted() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));
    assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());

    // The defaults are written on first run.
    assert!(ctx.get_config_file_path().unwrap().exists());
    assert_eq!(Config::load(&ctx).unwrap(), Config::default());
}

#[test]
fn test_save_load_roundtrip() {
    let ctx = TestContext::new();
    let config = Config {
        path_prefix: "/course".to_string(),
        phasor_frequency_hz: 1.2,
        show_sum: false,
        frame_rate: 60,
        epicycle_trace_len: 100,
        default_obligatory: true,
        log_level: "debug".to_string(),
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.log_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let ctx = TestContext::new();
    fs::write(ctx.get_config_file_path().unwrap(), "frame_rate = 12\n").unwrap();
    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.frame_rate, 12);
    assert_eq!(loaded.path_prefix, "/~obaumgartner");
    assert!(loaded.show_sum);
}

#[test]
fn test_malformed_file_is_an_error() {
    let ctx = TestContext::new();
    fs::write(ctx.get_config_file_path().unwrap(), "frame_rate = \"fast\"\n").unwrap();
    let err = Config::load_or_default(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_frequency_and_level_fallbacks() {
    let config = Config {
        phasor_frequency_hz: 9.0,
        log_level: "chatty".to_string(),
        ..Config::default()
    };
    assert_eq!(config.clamped_frequency(), 2.0);
    assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
}

#[test]
#[serial]
fn test_logger_writes_to_data_dir() {
    let ctx = TestContext::new();
    let path = logging::init(&ctx, log::LevelFilter::Info).unwrap();
    assert!(path.starts_with(ctx.get_data_dir().unwrap()));
    assert!(path.exists());
}
