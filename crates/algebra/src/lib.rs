//! Arithmetic capabilities consumed by the BW6-761 pairing engine.
//!
//! The engine never touches limbs or constraints directly. It drives a
//! [`FieldChip`] over the base field `Fp` and an [`Ext6Chip`] over the
//! `Fp6 = Fp3[v]/(v^2 - u)`, `Fp3 = Fp[u]/(u^3 + 4)` tower, both produced by a
//! [`CircuitApi`] handle.

mod config;
mod counting;
mod error;
mod field;
pub mod native;
pub mod params;
mod tower;

pub use config::*;
pub use counting::*;
pub use error::*;
pub use field::*;
pub use tower::*;
