//! Tests for the process-wide publisher instance.
//!
//! These tests share global state, so they are serialized and clean up the
//! registry entries they create.

mod helpers;

use helpers::CountingObserver;
use pollcast::PollingPublisher;
use serial_test::serial;
use std::sync::Barrier;
use std::thread;

#[test]
#[serial]
fn concurrent_first_access_yields_one_instance() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    // Rendezvous so the first calls race for real.
                    barrier.wait();
                    PollingPublisher::global() as *const PollingPublisher as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = addresses[0];
    assert!(addresses.iter().all(|&addr| addr == first));
}

#[test]
#[serial]
fn global_registry_is_shared_across_accesses() {
    let publisher = PollingPublisher::global();
    let before = publisher.observer_count();

    publisher.add_observer("singleton-test", CountingObserver::new());
    assert_eq!(PollingPublisher::global().observer_count(), before + 1);

    PollingPublisher::global().remove_observer("singleton-test");
    assert_eq!(publisher.observer_count(), before);
}
