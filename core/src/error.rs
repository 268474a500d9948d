use thiserror::Error;

use crate::{MAX_FIELD_SIZE, MIN_FIELD_SIZE};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Field size must not be empty")]
    EmptySize,
    #[error("Field size is not a number")]
    InvalidNumber,
    #[error("Field size {value} is outside {}..={}", MIN_FIELD_SIZE, MAX_FIELD_SIZE)]
    SizeOutOfRange { value: f64 },
    #[error("Hole probability {0} is not within 0..=1")]
    InvalidProbability(f64),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Field shape does not match declared size")]
    InvalidFieldShape,
    #[error("Unknown cell glyph {0:?}")]
    UnknownGlyph(char),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
