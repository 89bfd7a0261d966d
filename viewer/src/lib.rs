pub mod commands;
pub mod driver;
pub mod loading;
pub mod maps;
pub mod sink;

#[derive(Debug)]
pub enum Error {
    Load(loading::LoadError),
    Sink(sink::SinkError),
    Io(std::io::Error),
}

impl From<loading::LoadError> for Error {
    fn from(value: loading::LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<sink::SinkError> for Error {
    fn from(value: sink::SinkError) -> Self {
        Self::Sink(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => e.fmt(f),
            Self::Sink(e) => e.fmt(f),
            Self::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
