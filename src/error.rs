use std::io;
use thiserror::Error;

/// Error type for host probing
///
/// Detector queries never return these to their callers; they are the
/// internal outcomes that get logged and folded into a conservative answer.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("No security identity is available for the current process")]
    MissingIdentity,

    #[error("Native call {call} failed with error code {code}")]
    NativeQuery { call: &'static str, code: u32 },
}

/// Result type alias for hostprobe
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProbeError::Config(msg.into())
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform<S: Into<String>>(msg: S) -> Self {
        ProbeError::UnsupportedPlatform(msg.into())
    }

    pub fn native_query(call: &'static str, code: u32) -> Self {
        ProbeError::NativeQuery { call, code }
    }

    /// OS error code carried by a failed native call, if any
    pub fn native_code(&self) -> Option<u32> {
        match self {
            ProbeError::NativeQuery { code, .. } => Some(*code),
            _ => None,
        }
    }
}
