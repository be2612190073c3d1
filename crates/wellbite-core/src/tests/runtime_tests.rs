use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn drained_callbacks_receive_frame_time() {
    let runtime = Runtime::new();
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| sink.borrow_mut().push(time));

    assert!(runtime.handle().needs_frame());
    runtime.handle().drain_frame_callbacks(16_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.handle().has_frame_callbacks());
    assert!(!runtime.handle().needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new();
    let clock = runtime.frame_clock();
    let fired = Rc::new(RefCell::new(false));

    let flag = Rc::clone(&fired);
    let registration = clock.with_frame_nanos(move |_| *flag.borrow_mut() = true);
    drop(registration);

    runtime.handle().drain_frame_callbacks(0);
    assert!(!*fired.borrow());
}

#[test]
fn callbacks_registered_during_drain_run_next_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    let outer_frames = Rc::clone(&frames);
    let inner_handle = handle.clone();
    handle.register_frame_callback(move |time| {
        outer_frames.borrow_mut().push(("outer", time));
        let inner_frames = Rc::clone(&outer_frames);
        inner_handle.register_frame_callback(move |time| {
            inner_frames.borrow_mut().push(("inner", time));
        });
    });

    handle.drain_frame_callbacks(1);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 1)]);

    handle.drain_frame_callbacks(2);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 1), ("inner", 2)]);
}

#[test]
fn registration_on_dropped_runtime_is_inactive() {
    let runtime = Runtime::new();
    let clock = runtime.frame_clock();
    drop(runtime);

    let registration = clock.with_frame_millis(|_| {});
    assert!(!registration.is_active());
    assert!(!clock.runtime_handle().is_alive());
}
