use thiserror::Error;

/// Result type alias using TrackDiffError
pub type Result<T> = std::result::Result<T, TrackDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all
/// recoverable errors in trackdiff. Each kind maps to a stable error code
/// that can be used for programmatic error handling, testing, and CLI output.
///
/// Internal invariant violations (a matcher-produced edit script that fails
/// its replay check) are not represented here: they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input parsing
    /// A track line does not follow the track line grammar
    MalformedTrack,
    /// An edit script does not follow the clause grammar or overruns its tracks
    MalformedEditScript,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedTrack => "ERR_MALFORMED_TRACK",
            ExErrorKind::MalformedEditScript => "ERR_MALFORMED_EDIT_SCRIPT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    line: Option<usize>,
    position: Option<usize>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            line: None,
            position: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add 1-based track line context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add byte offset context inside an edit script
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the track line context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the edit script position context, if any
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {})", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for trackdiff operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackDiffError {
    /// A track line could not be parsed; the whole track is rejected
    #[error("Malformed track at line {line}: {reason}")]
    MalformedTrack { line: usize, reason: String },

    /// An edit script could not be decoded against its track lengths
    #[error("Malformed edit script at position {position}: {reason}")]
    MalformedEditScript { position: usize, reason: String },

    /// Reading a track file failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Rendering a machine-readable report failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TrackDiffError {
    pub(crate) fn malformed_track(line: usize, reason: impl Into<String>) -> Self {
        TrackDiffError::MalformedTrack {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_script(position: usize, reason: impl Into<String>) -> Self {
        TrackDiffError::MalformedEditScript {
            position,
            reason: reason.into(),
        }
    }
}

impl From<TrackDiffError> for ExError {
    fn from(err: TrackDiffError) -> Self {
        let message = err.to_string();
        match err {
            TrackDiffError::MalformedTrack { line, .. } => {
                ExError::new(ExErrorKind::MalformedTrack)
                    .with_op("parse_track")
                    .with_line(line)
                    .with_message(message)
            }
            TrackDiffError::MalformedEditScript { position, .. } => {
                ExError::new(ExErrorKind::MalformedEditScript)
                    .with_op("decode_edit_script")
                    .with_position(position)
                    .with_message(message)
            }
            TrackDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_track_file")
                .with_path(path)
                .with_message(message),
            TrackDiffError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("render_json_report")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for TrackDiffError {
    fn from(err: serde_json::Error) -> Self {
        TrackDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
