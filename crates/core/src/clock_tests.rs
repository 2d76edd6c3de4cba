// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_returns_increasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance(Duration::from_secs(60));
    let t2 = clock.now();
    assert!(t2.duration_since(t1) >= Duration::from_secs(60));
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    let t2 = clock1.now();
    assert!(t2.duration_since(t1) >= Duration::from_secs(30));
}

#[tokio::test]
async fn fake_clock_sleep_advances_without_waiting() {
    let clock = FakeClock::new();
    let before = clock.now();
    let wall = Instant::now();
    clock.sleep(Duration::from_secs(3600)).await;
    assert!(clock.now().duration_since(before) >= Duration::from_secs(3600));
    assert!(wall.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn system_clock_sleep_waits() {
    let clock = SystemClock;
    let wall = Instant::now();
    clock.sleep(Duration::from_millis(5)).await;
    assert!(wall.elapsed() >= Duration::from_millis(5));
}

#[test]
fn timestamp_is_rfc3339_utc() {
    let clock = FakeClock::new();
    clock.set_epoch_ms(1_767_225_600_000); // 2026-01-01T00:00:00Z
    assert_eq!(clock.timestamp_rfc3339(), "2026-01-01T00:00:00Z");
}

#[test]
fn fake_clock_epoch_tracks_advances() {
    let clock = FakeClock::new();
    clock.set_epoch_ms(1_000);
    clock.advance(Duration::from_millis(2_500));
    assert_eq!(clock.epoch_ms(), 3_500);
}
