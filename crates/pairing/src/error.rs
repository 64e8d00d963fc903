use bw6_algebra::ChipError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PairingError {
    #[error("new base api: {0}")]
    NewBaseApi(#[source] ChipError),
    /// A Miller loop digit outside `{-1, 0, 1}`.
    #[error("invalid loop counter digit {digit} at index {index}")]
    InvalidLoopCounter { index: usize, digit: i8 },
    #[error("pairing check failed")]
    PairingCheck(#[source] ChipError),
}
