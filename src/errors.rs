use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the chunker
#[derive(Debug)]
pub enum VideoChunkerError {
    Cue(InvalidCueError),
    Vtt(VttError),
    Other(io::Error),
}

/// Malformed cue input: an empty or inverted time range, or a cue
/// sequence that regresses in start time beyond the configured tolerance
#[derive(Debug)]
pub struct InvalidCueError {
    pub message: String,
}

impl InvalidCueError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// WebVTT parsing specific errors
#[derive(Debug)]
pub struct VttError {
    pub message: String,
}

impl VttError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for VideoChunkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoChunkerError::Cue(err) => write!(f, "Cue error: {}", err),
            VideoChunkerError::Vtt(err) => write!(f, "WebVTT error: {}", err),
            VideoChunkerError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for InvalidCueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for VttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for VideoChunkerError {}
impl Error for InvalidCueError {}
impl Error for VttError {}

// Conversion implementations
impl From<io::Error> for VideoChunkerError {
    fn from(err: io::Error) -> Self {
        VideoChunkerError::Other(err)
    }
}

impl From<InvalidCueError> for VideoChunkerError {
    fn from(err: InvalidCueError) -> Self {
        VideoChunkerError::Cue(err)
    }
}

impl From<VttError> for VideoChunkerError {
    fn from(err: VttError) -> Self {
        VideoChunkerError::Vtt(err)
    }
}

// Conversion to io::Error for callers that funnel everything through io
impl From<VideoChunkerError> for io::Error {
    fn from(err: VideoChunkerError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with VideoChunkerError
pub type VideoChunkerResult<T> = Result<T, VideoChunkerError>;
