//! Frame-clock driver for snap flings.
//!
//! Runs a [`SnapperFlingBehavior`] session one frame callback at a time
//! against a shared host list.

use std::cell::RefCell;
use std::rc::Rc;

use wellbite_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use wellbite_foundation::gesture_constants::MAX_FLING_VELOCITY;
use wellbite_foundation::{
    FlingOutcome, FlingStart, FlingStep, LazyListScrollScope, LazyListSnapperLayoutInfo,
    SessionToken, SnapOffset, SnapperFlingBehavior,
};

struct SnapFlingState {
    token: SessionToken,
    registration: Option<FrameCallbackRegistration>,
}

/// Schedules the next frame of the session in `state`. Re-registers itself
/// until the session finishes or goes stale.
fn schedule_next_frame<H, G>(
    behavior: Rc<RefCell<SnapperFlingBehavior>>,
    state: Rc<RefCell<Option<SnapFlingState>>>,
    frame_clock: FrameClock,
    host: Rc<RefCell<H>>,
    snap_offset: SnapOffset,
    on_end: G,
) where
    H: LazyListScrollScope + 'static,
    G: FnOnce(FlingOutcome) + 'static,
{
    let state_for_frame = Rc::clone(&state);
    let clock_for_frame = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let Some(token) = state_for_frame.borrow().as_ref().map(|state| state.token) else {
            return;
        };

        let step = {
            let mut host = host.borrow_mut();
            let mut scope = LazyListSnapperLayoutInfo::new(&mut *host, snap_offset);
            behavior.borrow_mut().on_frame(token, frame_time_nanos, &mut scope)
        };

        match step {
            FlingStep::Running => schedule_next_frame(
                behavior,
                state_for_frame,
                clock_for_frame,
                host,
                snap_offset,
                on_end,
            ),
            FlingStep::Finished(outcome) => {
                state_for_frame.borrow_mut().take();
                on_end(outcome);
            }
            FlingStep::Stale => {
                log::debug!("dropping frame for stale fling {:?}", token);
                state_for_frame.borrow_mut().take();
            }
        }
    });

    if let Some(state) = state.borrow_mut().as_mut() {
        state.registration = Some(registration);
    }
}

/// Drives snap flings from a [`FrameClock`].
pub struct SnapFlingAnimation {
    behavior: Rc<RefCell<SnapperFlingBehavior>>,
    state: Rc<RefCell<Option<SnapFlingState>>>,
    frame_clock: FrameClock,
}

impl SnapFlingAnimation {
    pub fn new(runtime: RuntimeHandle, behavior: SnapperFlingBehavior) -> Self {
        Self {
            behavior: Rc::new(RefCell::new(behavior)),
            state: Rc::new(RefCell::new(None)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts a fling of `host` at `velocity` px/s, cancelling any running one.
    ///
    /// `on_end` runs once when the fling finishes, immediately if there is
    /// nothing to animate. It does not run for a cancelled fling.
    pub fn start_fling<H, G>(
        &self,
        host: Rc<RefCell<H>>,
        snap_offset: SnapOffset,
        velocity: f32,
        on_end: G,
    ) where
        H: LazyListScrollScope + 'static,
        G: FnOnce(FlingOutcome) + 'static,
    {
        self.cancel();

        let velocity = velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let start = {
            let mut host = host.borrow_mut();
            let mut scope = LazyListSnapperLayoutInfo::new(&mut *host, snap_offset);
            self.behavior.borrow_mut().start_fling(&mut scope, velocity)
        };

        match start {
            FlingStart::Finished(outcome) => on_end(outcome),
            FlingStart::Running(token) => {
                *self.state.borrow_mut() = Some(SnapFlingState {
                    token,
                    registration: None,
                });
                schedule_next_frame(
                    Rc::clone(&self.behavior),
                    Rc::clone(&self.state),
                    self.frame_clock.clone(),
                    host,
                    snap_offset,
                    on_end,
                );
            }
        }
    }

    /// Stops the running fling where it is.
    pub fn cancel(&self) {
        self.behavior.borrow_mut().cancel();
        self.state.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn animation_target(&self) -> Option<usize> {
        self.behavior.borrow().animation_target()
    }
}

impl Drop for SnapFlingAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}
