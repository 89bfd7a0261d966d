//! The playback clock as an explicit state machine.
//!
//! [`ClockState::apply`] is the single transition function. The host feeds it
//! user commands and [`Command::Tick`] with the wall time elapsed since the
//! previous frame.

/// The only playback speeds a viewer can select, in cycling order.
pub const SPEEDS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// One rendered frame, `elapsed` is wall time in seconds.
    Tick { elapsed: f64 },
    Play,
    Pause,
    TogglePlay,
    Seek(f64),
    /// Zero based round index.
    SetRound(usize),
    SetSpeed(f64),
    CycleSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    pub is_playing: bool,
    pub speed: f64,
    pub round_index: usize,
    pub current_time: f64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            is_playing: true,
            speed: 1.0,
            round_index: 0,
            current_time: 0.0,
        }
    }
}

impl ClockState {
    /// Applies `command` given the duration of every round of the match.
    pub fn apply(self, command: Command, durations: &[f64]) -> Self {
        let duration = durations.get(self.round_index).copied().unwrap_or(0.0);

        match command {
            Command::Tick { elapsed } => self.tick(elapsed, duration),
            Command::Play => self.play(duration),
            Command::Pause => Self {
                is_playing: false,
                ..self
            },
            Command::TogglePlay if self.is_playing => Self {
                is_playing: false,
                ..self
            },
            Command::TogglePlay => self.play(duration),
            Command::Seek(time) => Self {
                current_time: time.max(0.0).min(duration),
                ..self
            },
            Command::SetRound(index) if index < durations.len() => {
                tracing::debug!(round = index, "Switching round");

                Self {
                    round_index: index,
                    current_time: 0.0,
                    is_playing: true,
                    ..self
                }
            }
            Command::SetRound(index) => {
                tracing::debug!(round = index, rounds = durations.len(), "Ignoring unknown round");
                self
            }
            Command::SetSpeed(speed) if SPEEDS.contains(&speed) => Self { speed, ..self },
            Command::SetSpeed(speed) => {
                tracing::debug!(speed, "Ignoring unsupported speed");
                self
            }
            Command::CycleSpeed => {
                let next = SPEEDS
                    .iter()
                    .position(|s| *s == self.speed)
                    .map(|idx| (idx + 1) % SPEEDS.len())
                    .unwrap_or(0);

                Self {
                    speed: SPEEDS[next],
                    ..self
                }
            }
        }
    }

    fn tick(self, elapsed: f64, duration: f64) -> Self {
        if !self.is_playing {
            return self;
        }

        let next = self.current_time + elapsed.max(0.0) * self.speed;
        if next >= duration {
            tracing::trace!(duration, "Reached end of round");

            return Self {
                current_time: duration,
                is_playing: false,
                ..self
            };
        }

        Self {
            current_time: next,
            ..self
        }
    }

    fn play(self, duration: f64) -> Self {
        let current_time = if self.current_time >= duration {
            0.0
        } else {
            self.current_time
        };

        Self {
            is_playing: true,
            current_time,
            ..self
        }
    }
}
