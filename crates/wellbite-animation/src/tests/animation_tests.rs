use super::*;

use crate::decay::ExponentialDecaySpec;

#[test]
fn spring_animation_lands_exactly_on_target() {
    let animation = SpringAnimation::new(SpringSpec::snap(), 0.0, 37.0, 120.0);
    let duration = animation.duration_nanos();

    assert!(duration > 0);
    assert_eq!(animation.value_from_nanos(duration), 37.0);
    assert_eq!(animation.velocity_from_nanos(duration), 0.0);
    assert!(animation.value_from_nanos(duration / 2) < 37.0);
}

#[test]
fn spring_already_at_rest_has_no_duration() {
    let animation = SpringAnimation::new(SpringSpec::snap(), 5.0, 5.0, 0.0);
    assert_eq!(animation.duration_nanos(), 0);
    assert!(animation.is_finished_from_nanos(0));
}

#[test]
fn decay_animation_reports_target_once_finished() {
    let animation = DecayAnimation::new(Rc::new(ExponentialDecaySpec::default()), 0.0, 630.1);
    let end = animation.duration_nanos();

    assert_eq!(animation.value_from_nanos(end), animation.target_value());
    assert_eq!(animation.velocity_from_nanos(end), 0.0);
    assert!(animation.value_from_nanos(end / 4) > 0.0);
}

#[test]
fn first_frame_is_play_time_zero() {
    let animation = DecayAnimation::new(Rc::new(ExponentialDecaySpec::default()), 0.0, 1000.0);
    let mut state = AnimationState::new(0.0, 1000.0);

    assert!(!state.advance(&animation, 5_000_000_000));
    assert_eq!(state.value, 0.0);
    assert!(state.is_running());

    state.advance(&animation, 5_016_000_000);
    assert!(state.value > 0.0);
    assert!(state.velocity < 1000.0);
    assert_eq!(state.last_frame_time_nanos(), Some(5_016_000_000));
}

#[test]
fn state_finishes_with_animation() {
    let animation = SpringAnimation::new(SpringSpec::snap(), 0.0, 10.0, 0.0);
    let mut state = AnimationState::default();
    state.advance(&animation, 0);

    assert!(state.advance(&animation, animation.duration_nanos() as u64));
    assert!(state.is_finished());
    assert!(!state.is_running());
    assert_eq!(state.value, 10.0);
}
