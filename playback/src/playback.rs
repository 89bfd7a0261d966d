use common::{MapConfig, Round};

use crate::clock::{ClockState, Command};
use crate::frame::{Frame, ProjectedBomb, ProjectedGrenade, ProjectedPlayer, Score};
use crate::grenades::active_grenades;
use crate::killfeed::visible_kills;
use crate::projection::{yaw_to_screen, Projector};
use crate::timeline::RoundTimeline;
use crate::Config;

/// Drives the clock over a match and projects the world at the current time.
///
/// The rounds are borrowed for the whole viewing session and never modified.
#[derive(Debug)]
pub struct Playback<'m> {
    config: Config,
    timelines: Vec<RoundTimeline<'m>>,
    durations: Vec<f64>,
    projector: Projector,
    clock: ClockState,
}

impl<'m> Playback<'m> {
    pub fn new(rounds: &'m [Round], map: &MapConfig, config: Config) -> Self {
        let timelines: Vec<_> = rounds.iter().map(RoundTimeline::new).collect();
        let durations = timelines.iter().map(|t| t.duration()).collect();
        let projector = Projector::new(map, config.surface_width, config.surface_height);

        tracing::info!(rounds = rounds.len(), map = %map.name, "Loaded match");

        Self {
            config,
            timelines,
            durations,
            projector,
            clock: ClockState::default(),
        }
    }

    pub fn clock(&self) -> ClockState {
        self.clock
    }

    pub fn round_count(&self) -> usize {
        self.timelines.len()
    }

    /// Duration of a round, 0 for unknown rounds.
    pub fn duration(&self, round_index: usize) -> f64 {
        self.durations.get(round_index).copied().unwrap_or(0.0)
    }

    pub fn handle(&mut self, command: Command) {
        let next = self.clock.apply(command, &self.durations);
        if next != self.clock {
            tracing::trace!(?command, ?next, "Clock transition");
        }
        self.clock = next;
    }

    /// Advances by one frame worth of wall time and returns the new frame.
    pub fn advance(&mut self, elapsed: std::time::Duration) -> Frame {
        self.handle(Command::Tick {
            elapsed: elapsed.as_secs_f64(),
        });
        self.frame()
    }

    /// The frame at the clock's current round and time.
    pub fn frame(&self) -> Frame {
        self.frame_at(self.clock.round_index, self.clock.current_time)
    }

    /// The frame for any round and time, independent of how the clock got
    /// there.
    ///
    /// `is_playing` and `speed` always reflect the live clock, even when
    /// `round_index` and `time` are not where the clock currently is.
    pub fn frame_at(&self, round_index: usize, time: f64) -> Frame {
        let mut frame = Frame {
            round_index,
            round_number: 0,
            current_time: time,
            round_duration: self.duration(round_index),
            is_playing: self.clock.is_playing,
            speed: self.clock.speed,
            score: Score::default(),
            players: Vec::new(),
            grenades: Vec::new(),
            bomb: None,
            kill_feed: Vec::new(),
        };

        let timeline = match self.timelines.get(round_index) {
            Some(t) => t,
            None => return frame,
        };
        let round = timeline.round();

        frame.round_number = round.number;
        frame.score = Score {
            ct: round.start_score(common::Side::Ct),
            t: round.start_score(common::Side::T),
        };

        if let Some(sample) = timeline.sample(time) {
            frame.kill_feed = visible_kills(
                &round.kills,
                &sample.players,
                time,
                self.config.kill_feed_window,
                self.config.kill_feed_size,
            );

            frame.bomb = sample.snapshot.bomb.as_ref().map(|bomb| ProjectedBomb {
                state: bomb.state,
                carrier: bomb.carrier,
                screen: self.projector.world_to_surface(bomb.x, bomb.y),
            });

            frame.players = sample
                .players
                .into_iter()
                .map(|state| ProjectedPlayer {
                    screen: self.projector.world_to_surface(state.x, state.y),
                    screen_yaw: yaw_to_screen(state.yaw),
                    state,
                })
                .collect();
        }

        frame.grenades = active_grenades(&round.grenades, time, self.config.trail_length)
            .into_iter()
            .map(|grenade| ProjectedGrenade {
                kind: grenade.kind,
                thrower: grenade.thrower,
                phase: grenade.phase,
                screen: self.projector.world_to_surface(grenade.x, grenade.y),
                trail: grenade
                    .trail
                    .iter()
                    .map(|p| self.projector.world_to_surface(p.x, p.y))
                    .collect(),
            })
            .collect();

        frame
    }
}
