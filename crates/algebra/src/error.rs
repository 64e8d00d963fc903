use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("limb size must be between 1 and 64 bits, got {limb_bits}")]
    LimbBits { limb_bits: usize },
    #[error("emulated representation holds {capacity} bits, modulus needs {required}")]
    InsufficientCapacity { capacity: usize, required: usize },
    #[error("elements are not equal")]
    NotEqual,
}
