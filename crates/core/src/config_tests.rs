// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_match_protocol_constants() {
    let config = DispatchConfig::default();
    assert_eq!(config.trigger_timeout, Duration::from_secs(30));
    assert_eq!(config.preflight_timeout, Duration::from_secs(10));
    assert_eq!(config.not_found_grace, Duration::from_secs(30));
    assert_eq!(config.min_timeout, Duration::from_secs(60));
    assert_eq!(config.default_timeout, Duration::from_secs(1800));
    assert_eq!(config.default_poll_interval, Duration::from_secs(5));
    assert!(config.preflight);
}

#[test]
fn setters_override_defaults() {
    let config = DispatchConfig::default()
        .with_preflight(false)
        .with_trigger_attempts(5)
        .with_trigger_backoff(Duration::from_millis(100))
        .with_not_found_grace(Duration::from_secs(5));
    assert!(!config.preflight);
    assert_eq!(config.trigger_attempts, 5);
    assert_eq!(config.trigger_backoff, Duration::from_millis(100));
    assert_eq!(config.not_found_grace, Duration::from_secs(5));
}

#[test]
fn at_least_one_trigger_attempt() {
    let config = DispatchConfig::default().with_trigger_attempts(0);
    assert_eq!(config.trigger_attempts, 1);
}
