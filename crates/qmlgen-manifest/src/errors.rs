use std::io;
use thiserror::Error;

/// Errors that can occur while writing manifest output files
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Nothing to emit: {0}")]
    Empty(String),
}
