//! Engine errors
//!
//! Only construction-time invariant violations and bad configuration are
//! errors. Transient geometry problems (coincident centres) are skipped for
//! the frame and never surface here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Radius must be positive and finite
    #[error("invalid radius {0}: must be positive and finite")]
    InvalidRadius(f32),

    #[error("invalid arena {width}x{height}: both sides must be positive and finite")]
    InvalidArena { width: f32, height: f32 },

    /// Config JSON failed to parse or a value is out of range
    #[error("invalid physics config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}
