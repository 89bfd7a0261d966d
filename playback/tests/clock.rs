use playback::{ClockState, Command, SPEEDS};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

const DURATIONS: [f64; 3] = [10.0, 20.0, 0.0];

fn playing_at(current_time: f64) -> ClockState {
    ClockState {
        current_time,
        ..ClockState::default()
    }
}

#[test]
fn starts_playing_first_round() {
    assert_eq!(
        ClockState {
            is_playing: true,
            speed: 1.0,
            round_index: 0,
            current_time: 0.0,
        },
        ClockState::default()
    );
}

#[test]
fn tick_scales_with_speed() {
    let state = ClockState {
        speed: 2.0,
        ..playing_at(1.0)
    };

    let state = state.apply(Command::Tick { elapsed: 0.25 }, &DURATIONS);
    assert_eq!(1.5, state.current_time);
    assert!(state.is_playing);
}

#[test]
fn tick_while_paused_does_nothing() {
    let state = ClockState {
        is_playing: false,
        ..playing_at(3.0)
    };

    assert_eq!(state, state.apply(Command::Tick { elapsed: 1.0 }, &DURATIONS));
}

#[test]
fn tick_stops_at_round_end() {
    let state = playing_at(9.9).apply(Command::Tick { elapsed: 1.0 }, &DURATIONS);

    assert_eq!(10.0, state.current_time);
    assert!(!state.is_playing);

    let again = state.apply(Command::Tick { elapsed: 1.0 }, &DURATIONS);
    assert_eq!(state, again);
}

#[test]
fn play_at_end_restarts() {
    let state = ClockState {
        is_playing: false,
        ..playing_at(10.0)
    };

    let state = state.apply(Command::Play, &DURATIONS);
    assert_eq!(0.0, state.current_time);
    assert!(state.is_playing);
}

#[test]
fn play_mid_round_resumes() {
    let state = ClockState {
        is_playing: false,
        ..playing_at(4.0)
    };

    let state = state.apply(Command::Play, &DURATIONS);
    assert_eq!(4.0, state.current_time);
    assert!(state.is_playing);
}

#[test]
fn toggle() {
    let paused = playing_at(4.0).apply(Command::TogglePlay, &DURATIONS);
    assert!(!paused.is_playing);
    assert_eq!(4.0, paused.current_time);

    let playing = paused.apply(Command::TogglePlay, &DURATIONS);
    assert!(playing.is_playing);
}

#[test]
fn pause_keeps_time() {
    let state = playing_at(4.0).apply(Command::Pause, &DURATIONS);

    assert_eq!(4.0, state.current_time);
    assert!(!state.is_playing);
}

#[test]
fn seek_is_clamped() {
    let state = playing_at(4.0);

    assert_eq!(7.5, state.apply(Command::Seek(7.5), &DURATIONS).current_time);
    assert_eq!(0.0, state.apply(Command::Seek(-2.0), &DURATIONS).current_time);
    assert_eq!(10.0, state.apply(Command::Seek(99.0), &DURATIONS).current_time);

    let paused = ClockState {
        is_playing: false,
        ..state
    };
    let sought = paused.apply(Command::Seek(2.0), &DURATIONS);
    assert_eq!(2.0, sought.current_time);
    assert!(!sought.is_playing);
}

#[test]
fn set_round_resets_and_plays() {
    let state = ClockState {
        is_playing: false,
        ..playing_at(4.0)
    };

    let state = state.apply(Command::SetRound(1), &DURATIONS);
    assert_eq!(
        ClockState {
            is_playing: true,
            speed: 1.0,
            round_index: 1,
            current_time: 0.0,
        },
        state
    );
}

#[test]
#[traced_test]
fn set_unknown_round_is_ignored() {
    let state = playing_at(4.0);

    assert_eq!(state, state.apply(Command::SetRound(3), &DURATIONS));
    assert!(logs_contain("Ignoring unknown round"));
}

#[test]
fn empty_round_pauses_on_first_tick() {
    let state = playing_at(0.0)
        .apply(Command::SetRound(2), &DURATIONS)
        .apply(Command::Tick { elapsed: 0.016 }, &DURATIONS);

    assert_eq!(0.0, state.current_time);
    assert!(!state.is_playing);
}

#[test]
#[traced_test]
fn unsupported_speed_is_ignored() {
    let state = ClockState::default();

    assert_eq!(state, state.apply(Command::SetSpeed(3.0), &DURATIONS));
    assert!(logs_contain("Ignoring unsupported speed"));

    assert_eq!(4.0, state.apply(Command::SetSpeed(4.0), &DURATIONS).speed);
}

#[test]
fn speed_cycles_and_wraps() {
    let mut state = ClockState {
        speed: SPEEDS[0],
        ..ClockState::default()
    };

    let mut seen = Vec::new();
    for _ in 0..SPEEDS.len() {
        state = state.apply(Command::CycleSpeed, &DURATIONS);
        seen.push(state.speed);
    }

    assert_eq!(vec![1.0, 2.0, 4.0, 0.5], seen);
}

#[test]
fn last_command_before_tick_wins() {
    let state = [
        Command::Seek(3.0),
        Command::Pause,
        Command::Seek(6.0),
        Command::Play,
    ]
    .into_iter()
    .fold(playing_at(0.0), |state, command| state.apply(command, &DURATIONS));

    let state = state.apply(Command::Tick { elapsed: 0.5 }, &DURATIONS);
    assert_eq!(6.5, state.current_time);
    assert!(state.is_playing);
}
