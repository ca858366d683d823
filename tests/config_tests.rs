use std::io::Write;

use whaletrack::error::{ConfigError, Error};
use whaletrack::infrastructure::config::settings::Config;

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_from_file() {
    let file = write_temp_config(
        r#"
[logging]
level = "warn"

[ledger]
sample_wallets = 3
cache_ttl_secs = 5

[[wallets]]
address = "0x28C6c06298d514Db089934071355E5743bf21d60"
label = "Binance Hot"

[[wallets]]
address = "0xdfd5293d8e347dfe59e90efd55b2956a1343963d"
label = "Bitfinex"
"#,
    );

    let config = Config::load(file.path()).expect("config should load");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.ledger.sample_wallets, 3);
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.count(), 2);
    assert_eq!(catalog.list()[1].label, "Bitfinex");
}

#[test]
fn config_rejects_duplicate_wallets() {
    let file = write_temp_config(
        r#"
[[wallets]]
address = "0x28C6c06298d514Db089934071355E5743bf21d60"
label = "One"

[[wallets]]
address = "0x28c6c06298d514db089934071355e5743bf21d60"
label = "Two"
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "wallets.address",
            ..
        })) => {}
        Err(err) => panic!("Expected duplicate wallet error, got {err}"),
        Ok(_) => panic!("Expected duplicate wallets to be rejected"),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let file = write_temp_config("[ledger]\ntimeout_ms = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_ms",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load_or_default(&path).expect("defaults should apply");

    assert_eq!(config.ledger.max_display, 8);
    assert_eq!(config.catalog().unwrap().count(), 10);
}
