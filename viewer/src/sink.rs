use playback::Frame;

#[derive(Debug)]
pub enum SinkError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Writing frame: {}", e),
            Self::Json(e) => write!(f, "Serializing frame: {}", e),
        }
    }
}

impl std::error::Error for SinkError {}

/// Whatever draws the frames.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError>;
}

/// Writes every frame as one line of JSON.
pub struct JsonLines<W> {
    writer: W,
}

impl<W> JsonLines<W>
where
    W: std::io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> RenderSink for JsonLines<W>
where
    W: std::io::Write,
{
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl RenderSink for Vec<Frame> {
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError> {
        self.push(frame.clone());
        Ok(())
    }
}
