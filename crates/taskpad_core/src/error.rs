use std::fmt;

/// Failures surfaced during a session. The task store itself can only
/// reject bad input; the other variants come from the config layer and the
/// input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// User input rejected before any state changed; surfaced as a one-shot
    /// notice.
    Validation(String),
    /// The session config file could not be read or parsed.
    Config(String),
    /// Reading the input stream failed.
    Io(String),
}

impl AppError {
    /// The one failure mode of task creation.
    pub fn empty_title() -> Self {
        Self::Validation("empty task title".to_string())
    }

    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }

    pub fn message(&self) -> &str {
        let (Self::Validation(message) | Self::Config(message) | Self::Io(message)) = self;
        message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
