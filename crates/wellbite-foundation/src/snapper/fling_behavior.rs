use std::rc::Rc;

use wellbite_animation::{
    Animation, AnimationState, DecayAnimation, FloatDecayAnimationSpec, SplineBasedDecaySpec,
    SpringAnimation, SpringSpec,
};

use crate::error::SnapError;
use crate::gesture_constants::{BOUNDARY_EPSILON, MAX_FLING_FRAMES};
use crate::scroll_scope::ScrollScope;

use super::layout_info::{SnapperLayoutInfo, SnapperLayoutItemInfo};
use super::snap_index::{SnapIndex, SnapTargetResolver};

/// Largest leftover after a settle that is still treated as rounding and
/// scrolled away.
const MAX_RESIDUAL_PX: i32 = 1;

/// Default tuning for [`SnapperFlingBehavior`].
pub struct SnapperFlingBehaviorDefaults;

impl SnapperFlingBehaviorDefaults {
    /// No limit on how far a single fling may travel.
    pub const MAXIMUM_FLING_DISTANCE: f32 = f32::MAX;

    pub fn spring_spec() -> SpringSpec {
        SpringSpec::snap()
    }

    pub fn snap_index() -> SnapIndex {
        SnapIndex::identity()
    }
}

/// Identifies one fling session. Frames carrying an old token are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlingPhase {
    Idle,
    Decaying,
    Springing,
}

/// How a fling ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingOutcome {
    /// Velocity the list did not use, for a parent scroller to take over.
    pub remaining_velocity: f32,
    /// Item the fling settled on. `None` when the fling passed through
    /// without snapping.
    pub settled_index: Option<usize>,
}

impl FlingOutcome {
    pub fn passed_through(velocity: f32) -> Self {
        Self {
            remaining_velocity: velocity,
            settled_index: None,
        }
    }

    pub fn settled(index: usize, remaining_velocity: f32) -> Self {
        Self {
            remaining_velocity,
            settled_index: Some(index),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled_index.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlingStart {
    /// Nothing to animate. The fling is already over.
    Finished(FlingOutcome),
    /// Animation started. Feed frames to [`SnapperFlingBehavior::on_frame`].
    Running(SessionToken),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlingStep {
    Running,
    Finished(FlingOutcome),
    /// The token does not belong to the active session.
    Stale,
}

struct PhaseRun<A> {
    animation: A,
    state: AnimationState,
    last_value: f32,
}

impl<A: Animation> PhaseRun<A> {
    fn new(animation: A, initial_velocity: f32) -> Self {
        Self {
            animation,
            state: AnimationState::new(0.0, initial_velocity),
            last_value: 0.0,
        }
    }

    /// Advances to `frame_time_nanos`. Returns (delta, velocity, finished).
    fn advance(&mut self, frame_time_nanos: u64) -> (f32, f32, bool) {
        let finished = self.state.advance(&self.animation, frame_time_nanos);
        let delta = self.state.value - self.last_value;
        self.last_value = self.state.value;
        (delta, self.state.velocity, finished)
    }
}

enum ActivePhase {
    Decay {
        run: PhaseRun<DecayAnimation>,
        spring_then_fling: bool,
    },
    Spring(PhaseRun<SpringAnimation>),
}

/// State of one in-flight fling.
pub struct FlingSession {
    token: SessionToken,
    target_index: usize,
    velocity_remaining: f32,
    phase: ActivePhase,
}

impl FlingSession {
    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn velocity_remaining(&self) -> f32 {
        self.velocity_remaining
    }

    pub fn phase(&self) -> FlingPhase {
        match self.phase {
            ActivePhase::Decay { .. } => FlingPhase::Decaying,
            ActivePhase::Spring(_) => FlingPhase::Springing,
        }
    }
}

enum Next {
    Continue(FlingSession),
    Done(FlingOutcome),
}

/// Fling behavior that always comes to rest with an item on its snap
/// position.
///
/// A fling is a session of frames. [`start_fling`](Self::start_fling) picks a
/// target and either finishes at once or returns a token. Each later frame
/// goes through [`on_frame`](Self::on_frame) with the same list. Starting a
/// new fling or calling [`cancel`](Self::cancel) abandons the running one;
/// frames for it then report [`FlingStep::Stale`].
pub struct SnapperFlingBehavior {
    decay_spec: Rc<dyn FloatDecayAnimationSpec>,
    spring_spec: SpringSpec,
    snap_index: SnapIndex,
    maximum_fling_distance: f32,
    session: Option<FlingSession>,
    next_token: u64,
}

impl SnapperFlingBehavior {
    pub fn new(decay_spec: impl FloatDecayAnimationSpec + 'static) -> Self {
        Self {
            decay_spec: Rc::new(decay_spec),
            spring_spec: SnapperFlingBehaviorDefaults::spring_spec(),
            snap_index: SnapperFlingBehaviorDefaults::snap_index(),
            maximum_fling_distance: SnapperFlingBehaviorDefaults::MAXIMUM_FLING_DISTANCE,
            session: None,
            next_token: 1,
        }
    }

    pub fn with_spring_spec(mut self, spring_spec: SpringSpec) -> Self {
        self.spring_spec = spring_spec;
        self
    }

    pub fn with_snap_index(mut self, snap_index: SnapIndex) -> Self {
        self.snap_index = snap_index;
        self
    }

    pub fn with_maximum_fling_distance(mut self, distance: f32) -> Self {
        self.maximum_fling_distance = distance.abs();
        self
    }

    pub fn resolver(&self) -> SnapTargetResolver<'_> {
        SnapTargetResolver::new(
            self.decay_spec.as_ref(),
            &self.snap_index,
            self.maximum_fling_distance,
        )
    }

    /// Index the running fling is heading to.
    pub fn animation_target(&self) -> Option<usize> {
        self.session.as_ref().map(FlingSession::target_index)
    }

    pub fn phase(&self) -> FlingPhase {
        self.session
            .as_ref()
            .map(FlingSession::phase)
            .unwrap_or(FlingPhase::Idle)
    }

    pub fn session(&self) -> Option<&FlingSession> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!(
                "fling towards {} cancelled during {:?}",
                session.target_index,
                session.phase()
            );
        }
    }

    /// Begins a fling at `velocity` pixels per second.
    ///
    /// Any running fling is cancelled first.
    pub fn start_fling<S>(&mut self, scope: &mut S, velocity: f32) -> FlingStart
    where
        S: SnapperLayoutInfo + ScrollScope,
    {
        self.cancel();

        // A list against either edge leaves the fling to its parent.
        if !scope.can_scroll_towards_start() || !scope.can_scroll_towards_end() {
            log::trace!("list is at an edge, passing {} through", velocity);
            return FlingStart::Finished(FlingOutcome::passed_through(velocity));
        }

        let Some(initial_item) = scope.current_item() else {
            log::debug!("{}", SnapError::NoCurrentItem);
            return FlingStart::Finished(FlingOutcome::passed_through(velocity));
        };

        let target_index = match self.resolver().resolve(&*scope, velocity) {
            Ok(index) => index,
            Err(err) => {
                log::warn!("fling aborted: {}", err);
                return FlingStart::Finished(FlingOutcome::passed_through(velocity));
            }
        };

        if initial_item.index == target_index
            && scope.distance_to_index_snap(target_index) == Some(0)
        {
            let remaining = consume_velocity_if_not_at_scroll_edge(&*scope, velocity);
            return FlingStart::Finished(FlingOutcome::settled(target_index, remaining));
        }

        let phase = if self
            .resolver()
            .can_decay_beyond_current_item(&*scope, &initial_item, velocity)
        {
            let spring_then_fling = initial_item.index.abs_diff(target_index) >= 2;
            ActivePhase::Decay {
                run: PhaseRun::new(
                    DecayAnimation::new(Rc::clone(&self.decay_spec), 0.0, velocity),
                    velocity,
                ),
                spring_then_fling,
            }
        } else {
            match self.spring_phase(&*scope, &initial_item, target_index, velocity) {
                Some(run) => ActivePhase::Spring(run),
                None => {
                    log::debug!("{}", SnapError::NoCurrentItem);
                    return FlingStart::Finished(FlingOutcome::passed_through(velocity));
                }
            }
        };

        let token = SessionToken(self.next_token);
        self.next_token += 1;
        log::debug!(
            "fling {:?} from item {} to {} at {}px/s",
            token,
            initial_item.index,
            target_index,
            velocity
        );
        self.session = Some(FlingSession {
            token,
            target_index,
            velocity_remaining: velocity,
            phase,
        });
        FlingStart::Running(token)
    }

    /// Advances the session identified by `token` to `frame_time_nanos`.
    pub fn on_frame<S>(
        &mut self,
        token: SessionToken,
        frame_time_nanos: u64,
        scope: &mut S,
    ) -> FlingStep
    where
        S: SnapperLayoutInfo + ScrollScope,
    {
        let Some(session) = self.session.take() else {
            return FlingStep::Stale;
        };
        if session.token != token {
            self.session = Some(session);
            return FlingStep::Stale;
        }

        match self.advance_session(session, frame_time_nanos, scope) {
            Next::Continue(session) => {
                self.session = Some(session);
                FlingStep::Running
            }
            Next::Done(outcome) => {
                log::debug!("fling {:?} finished: {:?}", token, outcome);
                FlingStep::Finished(outcome)
            }
        }
    }

    /// Runs a whole fling synchronously, one frame every `frame_interval_nanos`.
    pub fn perform_fling<S>(
        &mut self,
        scope: &mut S,
        velocity: f32,
        frame_interval_nanos: u64,
    ) -> FlingOutcome
    where
        S: SnapperLayoutInfo + ScrollScope,
    {
        let token = match self.start_fling(scope, velocity) {
            FlingStart::Finished(outcome) => return outcome,
            FlingStart::Running(token) => token,
        };

        let mut frame_time = 0u64;
        for _ in 0..MAX_FLING_FRAMES {
            frame_time += frame_interval_nanos.max(1);
            match self.on_frame(token, frame_time, scope) {
                FlingStep::Running => continue,
                FlingStep::Finished(outcome) => return outcome,
                FlingStep::Stale => break,
            }
        }

        log::warn!("fling did not finish within {} frames", MAX_FLING_FRAMES);
        self.cancel();
        FlingOutcome::passed_through(velocity)
    }

    fn advance_session<S>(
        &self,
        mut session: FlingSession,
        frame_time_nanos: u64,
        scope: &mut S,
    ) -> Next
    where
        S: SnapperLayoutInfo + ScrollScope,
    {
        let target = session.target_index;
        match &mut session.phase {
            ActivePhase::Decay {
                run,
                spring_then_fling,
            } => {
                let (delta, velocity, finished) = run.advance(frame_time_nanos);
                session.velocity_remaining = velocity;
                let ended = decay_frame_ends(
                    scope,
                    delta,
                    velocity,
                    finished,
                    target,
                    *spring_then_fling,
                );
                if ended {
                    self.after_decay(session, scope)
                } else {
                    Next::Continue(session)
                }
            }
            ActivePhase::Spring(run) => {
                let (delta, velocity, finished) = run.advance(frame_time_nanos);
                session.velocity_remaining = velocity;
                match spring_frame_ends(scope, delta, velocity, finished, target) {
                    None => Next::Continue(session),
                    Some(Ok(())) => {
                        settle_residual(scope, target);
                        Next::Done(self.completed(&*scope, &session))
                    }
                    Some(Err(err)) => {
                        log::debug!("settle spring stopped: {}", err);
                        match err {
                            SnapError::NoCurrentItem => {
                                Next::Done(lost_current_item(&*scope, &session))
                            }
                            _ => Next::Done(self.completed(&*scope, &session)),
                        }
                    }
                }
            }
        }
    }

    fn after_decay<S>(&self, mut session: FlingSession, scope: &mut S) -> Next
    where
        S: SnapperLayoutInfo + ScrollScope,
    {
        let target = session.target_index;
        let Some(current) = scope.current_item() else {
            log::debug!("{}", SnapError::NoCurrentItem);
            return Next::Done(lost_current_item(&*scope, &session));
        };

        if current.index == target && scope.distance_to_index_snap(target) == Some(0) {
            return Next::Done(self.completed(&*scope, &session));
        }

        match self.spring_phase(&*scope, &current, target, session.velocity_remaining) {
            Some(run) => {
                log::trace!("decay ended on item {}, settling on {}", current.index, target);
                session.phase = ActivePhase::Spring(run);
                Next::Continue(session)
            }
            None => Next::Done(lost_current_item(&*scope, &session)),
        }
    }

    /// Settle spring from `current` towards `target`. Keeps `velocity` only
    /// when it already points at the target.
    fn spring_phase(
        &self,
        layout: &dyn SnapperLayoutInfo,
        current: &SnapperLayoutItemInfo,
        target: usize,
        velocity: f32,
    ) -> Option<PhaseRun<SpringAnimation>> {
        let initial_velocity = if (target > current.index && velocity > 0.0)
            || (target <= current.index && velocity < 0.0)
        {
            velocity
        } else {
            0.0
        };
        let distance = layout.distance_to_index_snap(target)?;
        let animation =
            SpringAnimation::new(self.spring_spec, 0.0, distance as f32, initial_velocity);
        Some(PhaseRun::new(animation, initial_velocity))
    }

    fn completed(&self, layout: &dyn SnapperLayoutInfo, session: &FlingSession) -> FlingOutcome {
        FlingOutcome::settled(
            session.target_index,
            consume_velocity_if_not_at_scroll_edge(layout, session.velocity_remaining),
        )
    }
}

impl Default for SnapperFlingBehavior {
    fn default() -> Self {
        Self::new(SplineBasedDecaySpec::default())
    }
}

fn is_edge_mismatch(requested: f32, consumed: f32) -> bool {
    if (requested - consumed).abs() > BOUNDARY_EPSILON {
        log::debug!("{}", SnapError::EdgeOverscrollMismatch { requested, consumed });
        true
    } else {
        false
    }
}

/// Applies one decay frame. Returns true when the decay phase is over.
fn decay_frame_ends<S>(
    scope: &mut S,
    delta: f32,
    velocity: f32,
    finished: bool,
    target: usize,
    spring_then_fling: bool,
) -> bool
where
    S: SnapperLayoutInfo + ScrollScope,
{
    let consumed = scope.scroll_by(delta);
    if is_edge_mismatch(delta, consumed) {
        return true;
    }
    let Some(current) = scope.current_item() else {
        log::debug!("{}", SnapError::NoCurrentItem);
        return true;
    };

    // Hand over to the spring one item early so it can settle smoothly.
    if spring_then_fling
        && ((velocity > 0.0 && current.index + 1 == target)
            || (velocity < 0.0 && current.index == target))
    {
        return true;
    }
    if snap_back_if_needed(scope, &current, target, velocity) {
        return true;
    }
    finished
}

/// Applies one spring frame. `Some(Ok)` when the spring reached its target,
/// `Some(Err)` when it had to stop early.
fn spring_frame_ends<S>(
    scope: &mut S,
    delta: f32,
    velocity: f32,
    finished: bool,
    target: usize,
) -> Option<Result<(), SnapError>>
where
    S: SnapperLayoutInfo + ScrollScope,
{
    let consumed = scope.scroll_by(delta);
    let Some(current) = scope.current_item() else {
        return Some(Err(SnapError::NoCurrentItem));
    };
    if snap_back_if_needed(scope, &current, target, velocity) {
        return Some(Ok(()));
    }
    if is_edge_mismatch(delta, consumed) {
        return Some(Err(SnapError::EdgeOverscrollMismatch {
            requested: delta,
            consumed,
        }));
    }
    finished.then_some(Ok(()))
}

/// Scrolls back onto the target when the list has moved past it.
fn snap_back_if_needed<S>(
    scope: &mut S,
    current: &SnapperLayoutItemInfo,
    target: usize,
    velocity: f32,
) -> bool
where
    S: SnapperLayoutInfo + ScrollScope,
{
    let amount = if velocity > 0.0 && current.index >= target {
        scope.distance_to_index_snap(current.index)
    } else if velocity < 0.0 && current.index < target {
        scope.distance_to_index_snap(current.index + 1)
    } else {
        None
    };

    match amount {
        Some(amount) if amount != 0 => {
            log::trace!("snapping back {}px onto item {}", amount, target);
            scope.scroll_by(amount as f32);
            true
        }
        _ => false,
    }
}

/// Removes a sub-pixel leftover once the target item is in place.
fn settle_residual<S>(scope: &mut S, target: usize)
where
    S: SnapperLayoutInfo + ScrollScope,
{
    if scope.current_item().map(|item| item.index) != Some(target) {
        return;
    }
    if let Some(residual) = scope.distance_to_index_snap(target) {
        if residual != 0 && residual.abs() <= MAX_RESIDUAL_PX {
            scope.scroll_by(residual as f32);
        }
    }
}

/// Ends a session whose list has nothing to snap to.
fn lost_current_item(layout: &dyn SnapperLayoutInfo, session: &FlingSession) -> FlingOutcome {
    FlingOutcome::passed_through(consume_velocity_if_not_at_scroll_edge(
        layout,
        session.velocity_remaining,
    ))
}

/// Velocity left for a parent scroller. Only returned when the list is
/// pinned against the edge it is moving towards.
pub(crate) fn consume_velocity_if_not_at_scroll_edge(
    layout: &dyn SnapperLayoutInfo,
    velocity: f32,
) -> f32 {
    if (velocity < 0.0 && !layout.can_scroll_towards_start())
        || (velocity > 0.0 && !layout.can_scroll_towards_end())
    {
        velocity
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "tests/fling_behavior_tests.rs"]
mod tests;
