// Host-side tests for the cancellable frame task, driven by a manual host.

#![allow(dead_code)]
mod common;

use common::engine::error::GlassError;
use common::engine::schedule::*;
use std::cell::{Cell, RefCell};

/// Hands out increasing handles and records cancellations.
#[derive(Default)]
struct ManualHost {
    next: Cell<i32>,
    requested: RefCell<Vec<i32>>,
    cancelled: RefCell<Vec<i32>>,
}

impl FrameHost for ManualHost {
    fn request_frame(&self) -> Option<i32> {
        let id = self.next.get() + 1;
        self.next.set(id);
        self.requested.borrow_mut().push(id);
        Some(id)
    }

    fn cancel_frame(&self, handle: i32) {
        self.cancelled.borrow_mut().push(handle);
    }
}

#[test]
fn start_arms_exactly_once() {
    let mut task = RepeatingTask::new(ManualHost::default());
    assert!(!task.is_armed());
    task.start();
    task.start();
    assert!(task.is_armed());
    assert_eq!(*task.host().requested.borrow(), vec![1]);
}

#[test]
fn each_frame_runs_the_step_and_rearms() {
    let mut task = RepeatingTask::new(ManualHost::default());
    task.start();
    let mut seen = Vec::new();
    for _ in 0..3 {
        task.on_frame(|tick| seen.push(tick)).unwrap();
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(task.ticks(), 3);
    assert_eq!(*task.host().requested.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn cancel_withdraws_the_pending_request() {
    let mut task = RepeatingTask::new(ManualHost::default());
    task.start();
    task.on_frame(|_| {}).unwrap();
    task.cancel();
    assert!(task.is_cancelled());
    assert!(!task.is_armed());
    assert_eq!(*task.host().cancelled.borrow(), vec![2]);
}

#[test]
fn no_step_runs_after_cancel() {
    let mut task = RepeatingTask::new(ManualHost::default());
    task.start();
    task.cancel();

    let ran = Cell::new(false);
    // A frame already in flight is still delivered by the host
    assert_eq!(task.on_frame(|_| ran.set(true)), Err(GlassError::Cancelled));
    assert!(!ran.get());
    assert_eq!(task.ticks(), 0);
    assert_eq!(task.host().requested.borrow().len(), 1);
}

#[test]
fn cancel_is_idempotent_and_final() {
    let mut task = RepeatingTask::new(ManualHost::default());
    task.start();
    task.cancel();
    task.cancel();
    task.start();
    assert!(task.is_cancelled());
    assert_eq!(*task.host().cancelled.borrow(), vec![1]);
    assert_eq!(task.host().requested.borrow().len(), 1);
}

#[test]
fn cancel_before_start_requests_nothing() {
    let mut task = RepeatingTask::new(ManualHost::default());
    task.cancel();
    task.start();
    assert!(task.host().requested.borrow().is_empty());
    assert!(task.host().cancelled.borrow().is_empty());
}
