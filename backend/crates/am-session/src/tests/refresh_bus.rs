use crate::RefreshBus;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_new_bus_when_current_then_zero() {
    assert_that!(RefreshBus::new().current(), eq(0));
}

#[test]
fn given_clones_when_trigger_then_shared_counter_increments() {
    // Given
    let bus = RefreshBus::new();
    let other = bus.clone();

    // When
    let first = bus.trigger_refresh();
    let second = other.trigger_refresh();

    // Then
    assert_that!(first, eq(1));
    assert_that!(second, eq(2));
    assert_that!(bus.current(), eq(2));
}

#[tokio::test]
async fn given_subscriber_when_trigger_then_woken_with_latest_value() {
    // Given
    let bus = RefreshBus::new();
    let mut rx = bus.subscribe();

    // When
    bus.trigger_refresh();
    bus.trigger_refresh();

    // Then
    rx.changed().await.unwrap();
    assert_that!(*rx.borrow_and_update(), eq(2));
}
