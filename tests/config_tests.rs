use std::collections::HashMap;
use std::time::Duration;

use cricket_live::Error;
use cricket_live::config::{Config, DEFAULT_BASE_URL, DEFAULT_POLL_SECS};

fn from_pairs(pairs: &[(&str, &str)]) -> cricket_live::Result<Config> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = from_pairs(&[]).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.poll_interval, Duration::from_secs(DEFAULT_POLL_SECS));
    assert_eq!(config.environment, "development");
}

#[test]
fn reads_every_variable() {
    let config = from_pairs(&[
        ("CRICKET_API_BASE_URL", "https://scores.example.invalid/api"),
        ("CRICKET_API_KEY", "secret"),
        ("APP_ENV", "production"),
        ("USE_MOCK_DATA", "false"),
        ("POLL_INTERVAL_SECS", "10"),
        ("DISPLAY_TZ", "Africa/Harare"),
    ])
    .unwrap();
    assert_eq!(config.base_url, "https://scores.example.invalid/api");
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.environment, "production");
    assert!(!config.use_mock_data);
    assert_eq!(config.poll_interval, Duration::from_secs(10));
    assert_eq!(config.display_tz, chrono_tz::Africa::Harare);
}

#[test]
fn blank_values_keep_defaults() {
    let config = from_pairs(&[("CRICKET_API_KEY", "  "), ("USE_MOCK_DATA", "")]).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn invalid_values_are_rejected() {
    for (var, value) in [("USE_MOCK_DATA", "maybe"), ("POLL_INTERVAL_SECS", "0"), ("DISPLAY_TZ", "Mars/Olympus")] {
        match from_pairs(&[(var, value)]) {
            Err(Error::Config { var: got, .. }) => assert_eq!(got, var),
            other => panic!("{var}={value} should be rejected, got {other:?}"),
        }
    }
}
