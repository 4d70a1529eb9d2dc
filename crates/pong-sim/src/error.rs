//! Simulator errors

use thiserror::Error;

/// Errors from loading and running a simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error("script line {line}: bad frame count `{text}`")]
    BadFrameCount { line: usize, text: String },

    #[error("script line {line}: unknown button `{name}`")]
    UnknownButton { line: usize, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn bad_frame_count(line: usize, text: impl Into<String>) -> Self {
        Self::BadFrameCount {
            line,
            text: text.into(),
        }
    }

    pub fn unknown_button(line: usize, name: impl Into<String>) -> Self {
        Self::UnknownButton {
            line,
            name: name.into(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
