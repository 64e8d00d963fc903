use ark_bw6_761::Fq;
use ark_ff::{Field, One, Zero};

use crate::{EmulationConfig, FieldChip};

/// Base-field chip evaluating every operation on [`Fq`].
#[derive(Clone, Copy, Debug)]
pub struct NativeFp {
    config: EmulationConfig,
}

impl NativeFp {
    pub(crate) fn from_config(config: EmulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmulationConfig {
        &self.config
    }
}

impl FieldChip for NativeFp {
    type Element = Fq;

    fn zero(&self) -> Fq {
        Fq::zero()
    }

    fn one(&self) -> Fq {
        Fq::one()
    }

    fn value_of(&self, value: &Fq) -> Fq {
        *value
    }

    fn add(&self, a: &Fq, b: &Fq) -> Fq {
        *a + b
    }

    fn sub(&self, a: &Fq, b: &Fq) -> Fq {
        *a - b
    }

    fn neg(&self, a: &Fq) -> Fq {
        -*a
    }

    fn mul(&self, a: &Fq, b: &Fq) -> Fq {
        *a * b
    }

    fn mul_const(&self, a: &Fq, k: u64) -> Fq {
        *a * Fq::from(k)
    }

    /// # Panics
    /// If `b` is zero.
    fn div(&self, a: &Fq, b: &Fq) -> Fq {
        *a * self.inverse(b)
    }

    /// # Panics
    /// If `a` is zero.
    fn inverse(&self, a: &Fq) -> Fq {
        a.inverse().expect("inverse of zero in the BW6-761 base field")
    }
}
