use playback::Playback;
use tokio::sync::mpsc::error::TryRecvError;

use crate::commands::Input;
use crate::sink::{RenderSink, SinkError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverOptions {
    pub fps: u32,
    /// Stop once the round reached its end and the clock paused.
    pub exit_at_end: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            exit_at_end: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Shutdown,
    Quit,
    RoundEnded,
}

/// Renders frames at a fixed rate until `shutdown` resolves, a quit command
/// arrives or, with `exit_at_end`, the round is over.
///
/// Commands received between two frames are applied in arrival order right
/// before the next frame, so the latest one decides what that frame shows.
/// Returning drops the interval, no further frames are scheduled.
pub async fn run<S, F>(
    mut playback: Playback<'_>,
    sink: &mut S,
    commands: &mut tokio::sync::mpsc::UnboundedReceiver<Input>,
    options: DriverOptions,
    shutdown: F,
) -> Result<StopReason, SinkError>
where
    S: RenderSink,
    F: std::future::Future<Output = ()>,
{
    let period = std::time::Duration::from_secs_f64(1.0 / f64::from(options.fps.max(1)));
    let mut frames = tokio::time::interval(period);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    tokio::pin!(shutdown);

    let mut last_frame = tokio::time::Instant::now();
    let mut rendered: u64 = 0;
    let mut commands_open = true;

    let reason = loop {
        tokio::select! {
            _ = frames.tick() => {}
            _ = &mut shutdown => break StopReason::Shutdown,
        }

        let mut quit = false;
        while commands_open {
            match commands.try_recv() {
                Ok(Input::Command(command)) => playback.handle(command),
                Ok(Input::Quit) => {
                    quit = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("Command channel closed");
                    commands_open = false;
                }
            }
        }
        if quit {
            break StopReason::Quit;
        }

        let now = tokio::time::Instant::now();
        let frame = playback.advance(now - last_frame);
        last_frame = now;

        sink.render(&frame)?;
        rendered += 1;

        if options.exit_at_end && !frame.is_playing && frame.current_time >= frame.round_duration {
            break StopReason::RoundEnded;
        }
    };

    tracing::info!(?reason, frames = rendered, "Stopped playback");

    Ok(reason)
}
