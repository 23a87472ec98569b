use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StoreBackend};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
fn given_backend_names_when_from_str_then_parsed_case_insensitively() {
    assert_that!(StoreBackend::from_str("Rest"), ok(eq(&StoreBackend::Rest)));
    assert_that!(
        StoreBackend::from_str("memory"),
        ok(eq(&StoreBackend::Memory))
    );
    assert_that!(StoreBackend::from_str("sqlite"), err(anything()));
}

#[test]
#[serial]
fn given_rest_backend_without_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("AM_STORE_BACKEND", "rest");
    let _key = EnvGuard::set("AM_STORE_API_KEY", "anon");
    let _url = EnvGuard::remove("AM_STORE_URL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_rest_backend_without_api_key_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("AM_STORE_BACKEND", "rest");
    let _url = EnvGuard::set("AM_STORE_URL", "https://project.example.co");
    let _key = EnvGuard::set("AM_STORE_API_KEY", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_rest_backend_with_non_http_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("AM_STORE_BACKEND", "rest");
    let _url = EnvGuard::set("AM_STORE_URL", "ftp://project.example.co");
    let _key = EnvGuard::set("AM_STORE_API_KEY", "anon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_memory_backend_without_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("AM_STORE_BACKEND", "memory");
    let _url = EnvGuard::remove("AM_STORE_URL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_empty_image_bucket_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _bucket = EnvGuard::set("AM_STORE_IMAGE_BUCKET", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_store_timeout_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("AM_STORE_TIMEOUT_SECS", "301");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
