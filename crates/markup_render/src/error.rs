use thiserror::Error as ThisError;

/// Failures from decoding trees or options. Rendering itself can't fail.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid node shape: {0}")]
    InvalidNodeShape(serde_json::Error),
    #[error("Invalid render options: {0}")]
    InvalidOptions(serde_json::Error),
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the type name of this error
    pub fn name(&self) -> &'static str {
        match self {
            Error::InvalidNodeShape(_) => "InvalidNodeShape",
            Error::InvalidOptions(_) => "InvalidOptions",
            Error::Io(_) => "Io",
        }
    }

    /// Returns the 1-based line and column in the source document where
    /// decoding failed, if the failure came from the document's content.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::InvalidNodeShape(error) | Error::InvalidOptions(error) if error.line() > 0 => {
                Some((error.line(), error.column()))
            }
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
