//! Out-of-circuit capability implementations.
//!
//! Each operation is evaluated directly on arkworks BW6-761 values. This is
//! what a witness generator runs, and it is the reference the pairing engine
//! is tested against.

mod field;
mod tower;

pub use field::*;
pub use tower::*;

use ark_bw6_761::{Fq, Fq3, Fq6};

use crate::{ChipError, CircuitApi, EmulationConfig, E3, E6};

#[derive(Clone, Copy, Debug, Default)]
pub struct NativeApi {
    pub config: EmulationConfig,
}

impl NativeApi {
    pub fn new(config: EmulationConfig) -> Self {
        Self { config }
    }
}

impl CircuitApi for NativeApi {
    type Fp = NativeFp;
    type Ext6 = NativeExt6;

    fn new_base_field(&self) -> Result<NativeFp, ChipError> {
        self.config.validate()?;
        tracing::trace!(
            limb_bits = self.config.limb_bits,
            num_limbs = self.config.num_limbs,
            "native base field"
        );
        Ok(NativeFp::from_config(self.config))
    }

    fn new_ext6(&self, fp: NativeFp) -> NativeExt6 {
        NativeExt6::new(fp)
    }
}

impl From<Fq3> for E3<Fq> {
    fn from(a: Fq3) -> Self {
        E3::new(a.c0, a.c1, a.c2)
    }
}

impl From<&E3<Fq>> for Fq3 {
    fn from(a: &E3<Fq>) -> Self {
        Fq3::new(a.a0, a.a1, a.a2)
    }
}

impl From<Fq6> for E6<Fq> {
    fn from(a: Fq6) -> Self {
        E6::new(a.c0.into(), a.c1.into())
    }
}

impl From<&E6<Fq>> for Fq6 {
    fn from(a: &E6<Fq>) -> Self {
        Fq6::new((&a.b0).into(), (&a.b1).into())
    }
}
