mod support;

use std::time::Duration;

use folio_common::{DisplaySource, DriverError, GalleryDriver, GalleryEvent, GalleryState};
use support::{three_item_catalog, tracing_init};

const PERIOD: Duration = Duration::from_millis(2000);

#[tokio::test(start_paused = true)]
async fn test_seven_ticks_show_third_slide() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();

    assert_eq!(driver.frame().ids(), vec!["3d-1", "3d-animation", "line-art"]);

    tokio::time::sleep(PERIOD * 7 + Duration::from_millis(500)).await;

    let frame = driver.frame();
    match &frame.get("line-art").unwrap().source {
        DisplaySource::Slide { src, index, count } => {
            assert_eq!(src, "/work/line art/3.jpg");
            assert_eq!(*index, 2);
            assert_eq!(*count, 5);
        }
        other => panic!("Expected Slide, got {other:?}"),
    }

    let state = driver.shutdown().await.unwrap();
    assert_eq!(state.rotator().ticks(), 7);
    assert!(!state.rotator().is_active());
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_waits_a_full_period() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();

    tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;
    assert_eq!(driver.frame().get("line-art").unwrap().source.src(), Some("/work/line art/1.jpg"));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(driver.frame().get("line-art").unwrap().source.src(), Some("/work/line art/2.jpg"));
}

#[tokio::test(start_paused = true)]
async fn test_selection_events_publish_frames() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();
    let mut frames = driver.subscribe();

    driver.select_category("Line Art").unwrap();
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow().ids(), vec!["line-art"]);
    assert_eq!(frames.borrow().selected, "Line Art");

    driver.select_category("Sculpture").unwrap();
    frames.changed().await.unwrap();
    assert!(frames.borrow().entries.is_empty());

    driver.send(GalleryEvent::SelectCategory("All".into())).unwrap();
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow().entries.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hover_swaps_and_falls_back() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();
    let mut frames = driver.subscribe();

    driver.send(GalleryEvent::PointerEnter("3d-1".into())).unwrap();
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow().get("3d-1").unwrap().source.src(), Some("/work/anvil-2.jpg"));

    driver.send(GalleryEvent::PointerLeave("3d-1".into())).unwrap();
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow().get("3d-1").unwrap().source.src(), Some("/work/anvil-1.jpg"));
}

#[tokio::test(start_paused = true)]
async fn test_no_mutation_after_shutdown() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();
    let frames = driver.subscribe();

    tokio::time::sleep(PERIOD * 3 + Duration::from_millis(10)).await;
    let state = driver.shutdown().await.unwrap();
    let before = frames.borrow().clone();

    tokio::time::sleep(PERIOD * 10).await;
    assert_eq!(*frames.borrow(), before);
    assert_eq!(state.rotator().ticks(), 3);
    assert_eq!(state.rotator().index_of("line-art"), 3);
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_timer() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();
    let frames = driver.subscribe();

    tokio::time::sleep(PERIOD + Duration::from_millis(10)).await;
    drop(driver);
    let before = frames.borrow().clone();

    tokio::time::sleep(PERIOD * 5).await;
    assert_eq!(*frames.borrow(), before);
    assert_eq!(before.get("line-art").unwrap().source.src(), Some("/work/line art/2.jpg"));
}

#[tokio::test(start_paused = true)]
async fn test_send_after_teardown_event_fails() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();

    driver.send(GalleryEvent::Teardown).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let err = driver.select_category("3D Art").unwrap_err();
    assert!(matches!(err, DriverError::Stopped));
}

#[tokio::test]
async fn test_zero_period_is_rejected() {
    tracing_init();
    let result = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), Duration::ZERO);
    assert!(matches!(result, Err(DriverError::ZeroPeriod)));
}

#[tokio::test(start_paused = true)]
async fn test_queued_events_apply_in_arrival_order() {
    tracing_init();
    let driver = GalleryDriver::spawn(GalleryState::new(three_item_catalog()), PERIOD).unwrap();

    driver.select_category("Line Art").unwrap();
    driver.send(GalleryEvent::PointerEnter("3d-1".into())).unwrap();
    driver.select_category("3D Art").unwrap();
    driver.send(GalleryEvent::PointerLeave("3d-1".into())).unwrap();
    driver.send(GalleryEvent::PointerEnter("3d-1".into())).unwrap();

    tokio::time::sleep(PERIOD + Duration::from_millis(1)).await;

    let frame = driver.frame();
    assert_eq!(frame.selected, "3D Art");
    assert_eq!(frame.get("3d-1").unwrap().source.src(), Some("/work/anvil-2.jpg"));

    let state = driver.shutdown().await.unwrap();
    assert_eq!(state.rotator().ticks(), 1);
    assert_eq!(state.hovered(), Some("3d-1"));
}
