//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid trial configuration, point-set persistence and post-processing failures, IO, and
//! generic errors. Generation itself never fails.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to persist point set to '{}': {message}", path.display())]
    Persist { path: PathBuf, message: String },

    #[error("post-processing failed: {0}")]
    Analysis(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Builds a [`Error::Persist`] for `path` from any displayable cause.
    pub fn persist(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Error::Persist {
            path: path.into(),
            message: cause.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_become_other_errors() {
        let owned: Error = format!("trial {} failed", 3).into();
        let borrowed: Error = "analysis skipped".into();
        assert_eq!(owned.to_string(), Error::Other("trial 3 failed".into()).to_string());
        assert!(matches!(borrowed, Error::Other(ref msg) if msg == "analysis skipped"));
    }

    #[test]
    fn io_errors_convert_through_question_mark() {
        fn open_missing() -> Result<()> {
            std::fs::File::open("/definitely/missing/MBC_0.png")?;
            Ok(())
        }
        assert!(matches!(open_missing(), Err(Error::Io(_))));
    }

    #[test]
    fn persist_message_names_the_path() {
        let err = Error::persist("out/MBC_3.png", "disk full");
        assert_eq!(
            err.to_string(),
            "failed to persist point set to 'out/MBC_3.png': disk full"
        );
    }
}
