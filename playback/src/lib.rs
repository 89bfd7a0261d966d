//! Replay playback for parsed matches.
//!
//! Turns the discrete snapshots of a round into continuous motion at any
//! point in time and drives a clock a viewer can play, pause, seek and speed
//! up. Every frame is a pure function of the round and the query time.

pub mod actors;
pub mod clock;
pub mod frame;
pub mod grenades;
pub mod killfeed;
pub mod locator;
pub mod math;
pub mod projection;
pub mod timeline;

mod playback;
pub use playback::Playback;

pub use clock::{ClockState, Command, SPEEDS};
pub use frame::Frame;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f64,
    pub surface_height: f64,
    /// Most recent points kept in a grenade trail, including the live one.
    pub trail_length: usize,
    pub kill_feed_window: f64,
    pub kill_feed_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: 700.0,
            surface_height: 700.0,
            trail_length: 32,
            kill_feed_window: killfeed::DISPLAY_DURATION,
            kill_feed_size: killfeed::MAX_VISIBLE,
        }
    }
}
