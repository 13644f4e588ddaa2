// ABOUTME: Tests for environment-driven logging configuration
// ABOUTME: Serialized because every case mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]

use std::env;

use pierre_strength::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const VARIABLES: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear_env() {
    for name in VARIABLES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "pierre-strength");
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_production_records_location_and_thread() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    clear_env();
}

#[test]
#[serial]
fn test_service_identity_overrides() {
    clear_env();
    env::set_var("SERVICE_NAME", "strength-worker");
    env::set_var("SERVICE_VERSION", "9.9.9");
    env::set_var("RUST_LOG", "debug");

    let config = LoggingConfig::from_env();

    assert_eq!(config.service_name, "strength-worker");
    assert_eq!(config.service_version, "9.9.9");
    assert_eq!(config.level, "debug");
    clear_env();
}
