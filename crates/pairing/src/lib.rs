//! BW6-761 pairing engine.
//!
//! The optimal-ate Miller loop is split into two seed-dependent sub-loops,
//! `f_{x₀+1,Q}(P) · f_{x₀³-x₀²-x₀,Q}(P)^p`, followed by the El Housni and
//! Guillevic final exponentiation. All arithmetic goes through the
//! [`bw6_algebra`] capabilities, so the same code drives native witness
//! computation and in-circuit emulation.
//!
//! Inputs are not checked for subgroup membership. Callers handling untrusted
//! points must check that `P` and `Q` have order `r` beforehand.

pub mod curve;
mod error;
mod final_exp;
mod line;
mod miller_loop;
mod miller_step;
mod pairing;
mod point;

pub use error::*;
pub use line::*;
pub use miller_loop::*;
pub use miller_step::*;
pub use pairing::*;
pub use point::*;

#[cfg(test)]
mod tests;
