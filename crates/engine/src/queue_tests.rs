// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use super::*;
use oac_core::JobState;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn pop_on_empty_queue_returns_empty_sentinel() {
    let queue = EventQueue::new();
    assert_eq!(queue.pop(), DomainEvent::Empty);
}

#[test]
fn fifo_order_is_preserved() {
    let queue = EventQueue::new();
    for state in [JobState::Initial, JobState::Running, JobState::Succeeded] {
        queue.push(DomainEvent::JobStateChanged { state });
    }

    let mut seen = Vec::new();
    loop {
        match queue.pop() {
            DomainEvent::Empty => break,
            DomainEvent::JobStateChanged { state } => seen.push(state),
            _ => unreachable!(),
        }
    }

    assert_eq!(seen, vec![JobState::Initial, JobState::Running, JobState::Succeeded]);
}

#[test]
fn size_reflects_pending_events() {
    let queue = EventQueue::new();
    assert_eq!(queue.size(), 0);
    queue.push(DomainEvent::JobStateChanged { state: JobState::Running });
    assert_eq!(queue.size(), 1);
    queue.pop();
    assert_eq!(queue.size(), 0);
}

#[test]
fn push_notifies_wake_hook_once_per_event() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let queue = EventQueue::with_wake(Arc::new(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
    }));

    queue.push(DomainEvent::JobStateChanged { state: JobState::Running });
    queue.push(DomainEvent::JobStateChanged { state: JobState::Succeeded });

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn no_loss_across_threads() {
    let queue = Arc::new(EventQueue::new());
    let producer = {
        let queue = queue.clone();
        std::thread::spawn(move || {
            for i in 0..200u32 {
                queue.push(DomainEvent::InstructionStateUpdated {
                    index: oac_core::InstructionIndex::new(i),
                    execution_status: oac_core::ExecutionStatus::Running,
                    breakpoint_set: false,
                });
            }
        })
    };
    producer.join().unwrap();

    let mut count = 0;
    while queue.pop() != DomainEvent::Empty {
        count += 1;
    }
    assert_eq!(count, 200);
}

proptest::proptest! {
    // FIFO and no-loss: for any engine-side push sequence, draining the
    // queue to exhaustion returns every event, in the order it was
    // pushed.
    #[test]
    fn arbitrary_push_sequences_drain_fifo_and_lossless(
        events in proptest::collection::vec(oac_core::test_support::arb_domain_event(), 0..64)
    ) {
        let queue = EventQueue::new();
        for event in &events {
            queue.push(event.clone());
        }

        let mut drained = Vec::new();
        loop {
            match queue.pop() {
                DomainEvent::Empty => break,
                event => drained.push(event),
            }
        }

        proptest::prop_assert_eq!(drained, events);
    }
}
