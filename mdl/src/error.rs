//! Crate error type.

use thiserror::Error;

use crate::validation::PatternError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
