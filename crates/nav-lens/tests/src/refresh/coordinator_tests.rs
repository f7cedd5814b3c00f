use std::sync::atomic::AtomicUsize;

use super::*;

fn counting(coordinator: &RefreshCoordinator) -> (Arc<AtomicUsize>, SubscriptionId) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let id = coordinator.subscribe(Arc::new(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    }));
    (count, id)
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_interval() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(120));
    let (count, _) = counting(&coordinator);

    coordinator.schedule_refresh();
    assert!(coordinator.has_pending());
    advance(100).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    advance(40).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!coordinator.has_pending());
    assert_eq!(coordinator.fired_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_calls_coalesce_into_one_refresh() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(50));
    let (count, _) = counting(&coordinator);

    for _ in 0..5 {
        coordinator.schedule_refresh();
        advance(10).await;
    }
    advance(200).await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn spaced_calls_each_refresh() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(50));
    let (count, _) = counting(&coordinator);

    for _ in 0..3 {
        coordinator.schedule_refresh();
        advance(100).await;
    }

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn zero_interval_still_defers() {
    let coordinator = RefreshCoordinator::new(Duration::ZERO);
    let (count, _) = counting(&coordinator);

    coordinator.schedule_refresh();
    assert_eq!(count.load(Ordering::SeqCst), 0);
    advance(1).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn new_interval_applies_to_next_schedule() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(120));
    let (count, _) = counting(&coordinator);

    coordinator.set_interval(Duration::from_millis(500));
    assert_eq!(coordinator.interval(), Duration::from_millis(500));
    coordinator.schedule_refresh();

    advance(200).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
    advance(400).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn unsubscribed_listener_is_not_called() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(10));
    let (kept, _) = counting(&coordinator);
    let (dropped, id) = counting(&coordinator);

    assert!(coordinator.unsubscribe(id));
    assert!(!coordinator.unsubscribe(id));
    coordinator.schedule_refresh();
    advance(20).await;

    assert_eq!(kept.load(Ordering::SeqCst), 1);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_and_ignores_later_schedules() {
    let coordinator = RefreshCoordinator::new(Duration::from_millis(10));
    let (count, _) = counting(&coordinator);

    coordinator.schedule_refresh();
    coordinator.dispose();
    coordinator.dispose();
    assert!(!coordinator.has_pending());

    coordinator.schedule_refresh();
    advance(50).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
