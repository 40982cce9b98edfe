use thiserror::Error;

use crate::codec::{EncodeError, FormatError};
use crate::transport::TransportError;
use crate::validation::ValidationError;

/// One error type for the whole validate → encode → base64 → decode path.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
