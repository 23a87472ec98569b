use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("AM_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("AM_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_port_1024_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("AM_SERVER_PORT", "1024");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_read_timeout_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("AM_SERVER_READ_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_read_timeout_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("AM_SERVER_READ_TIMEOUT_SECS", "61");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
