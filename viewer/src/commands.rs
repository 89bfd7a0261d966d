use playback::Command;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Command(Command),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    InvalidArgument { command: &'static str, value: String },
    MissingArgument(&'static str),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(cmd) => write!(f, "Unknown command '{}'", cmd),
            Self::InvalidArgument { command, value } => {
                write!(f, "Invalid argument '{}' for '{}'", value, command)
            }
            Self::MissingArgument(command) => write!(f, "'{}' needs an argument", command),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses one line of user input, `Ok(None)` for blank lines.
///
/// Rounds are numbered from 1, speeds may carry a trailing `x`.
pub fn parse(line: &str) -> Result<Option<Input>, CommandError> {
    let mut parts = line.split_whitespace();
    let name = match parts.next() {
        Some(n) => n,
        None => return Ok(None),
    };
    let argument = parts.next();

    let command = match name.to_ascii_lowercase().as_str() {
        "play" => Command::Play,
        "pause" => Command::Pause,
        "toggle" | "p" => Command::TogglePlay,
        "seek" => {
            let value = argument.ok_or(CommandError::MissingArgument("seek"))?;
            Command::Seek(number("seek", value)?)
        }
        "round" => {
            let value = argument.ok_or(CommandError::MissingArgument("round"))?;
            let round: usize = value.parse().ok().filter(|r| *r > 0).ok_or_else(|| {
                CommandError::InvalidArgument {
                    command: "round",
                    value: value.to_owned(),
                }
            })?;
            Command::SetRound(round - 1)
        }
        "speed" => match argument {
            Some(value) => Command::SetSpeed(number("speed", value.trim_end_matches('x'))?),
            None => Command::CycleSpeed,
        },
        "quit" | "q" => return Ok(Some(Input::Quit)),
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    Ok(Some(Input::Command(command)))
}

fn number(command: &'static str, value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidArgument {
            command,
            value: value.to_owned(),
        })
}

/// Forwards parsed stdin lines until stdin closes or the receiver is gone.
///
/// Runs on a plain thread, a blocking stdin read would otherwise hold up
/// runtime shutdown.
pub fn spawn_stdin_reader(
    tx: tokio::sync::mpsc::UnboundedSender<Input>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-commands".to_owned())
        .spawn(move || {
            use std::io::BufRead;

            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        tracing::warn!("Reading stdin: {}", e);
                        break;
                    }
                };

                match parse(&line) {
                    Ok(Some(input)) => {
                        if tx.send(input).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("{}", e),
                }
            }

            tracing::debug!("Stopped reading commands");
        })
}
