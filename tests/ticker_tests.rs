// File: tests/ticker_tests.rs
use coursedeck::ticker::Ticker;
use std::time::Duration;

#[tokio::test]
async fn test_ticks_arrive_in_order() {
    let mut ticker = Ticker::start(100);
    tokio::time::sleep(Duration::from_millis(30)).await;
    let first = ticker.try_latest().unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    let second = ticker.try_latest().unwrap();
    assert!(second.0 > first.0);
}

#[tokio::test]
async fn test_try_latest_drains_pending() {
    let mut ticker = Ticker::start(200);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(ticker.try_latest().is_some());
    assert!(ticker.try_latest().is_none());
}

#[tokio::test]
async fn test_zero_fps_is_treated_as_one() {
    let mut ticker = Ticker::start(0);
    // The first tick is immediate, the next one a second later.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(ticker.try_latest().is_some());
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(ticker.try_latest().is_none());
}
