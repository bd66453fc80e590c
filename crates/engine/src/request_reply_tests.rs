// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use super::*;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn ask_without_open_returns_none_immediately() {
    let bridge: RequestReplyBridge<i32> = RequestReplyBridge::new();
    assert_eq!(bridge.ask(None), None);
}

#[test]
fn reply_unblocks_ask_with_the_given_value() {
    let bridge = Arc::new(RequestReplyBridge::<i32>::new());
    bridge.open();

    let asker = {
        let bridge = bridge.clone();
        std::thread::spawn(move || bridge.ask(None))
    };

    std::thread::sleep(Duration::from_millis(20));
    assert!(bridge.is_pending());
    bridge.reply(42);

    assert_eq!(asker.join().unwrap(), Some(42));
}

#[test]
fn cancel_unblocks_ask_with_none() {
    let bridge = Arc::new(RequestReplyBridge::<i32>::new());
    bridge.open();

    let asker = {
        let bridge = bridge.clone();
        std::thread::spawn(move || bridge.ask(None))
    };

    std::thread::sleep(Duration::from_millis(20));
    bridge.cancel();

    assert_eq!(asker.join().unwrap(), None);
}

#[test]
fn ask_times_out_when_no_reply_arrives() {
    let bridge: RequestReplyBridge<i32> = RequestReplyBridge::new();
    bridge.open();
    let start = std::time::Instant::now();
    let result = bridge.ask(Some(Duration::from_millis(30)));
    assert_eq!(result, None);
    assert!(start.elapsed() >= Duration::from_millis(25));
}

#[test]
fn reply_after_cancel_is_ignored() {
    let bridge: RequestReplyBridge<i32> = RequestReplyBridge::new();
    bridge.open();
    bridge.cancel();
    bridge.reply(7);
    assert_eq!(bridge.ask(None), None);
}

#[test]
fn open_discards_a_stale_answered_reply() {
    let bridge: RequestReplyBridge<i32> = RequestReplyBridge::new();
    bridge.open();
    bridge.reply(1);
    bridge.open();
    assert_eq!(bridge.ask(None), None);
}
