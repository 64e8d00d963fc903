use ark_bw6_761::{Fq, Fq6};
use bw6_algebra::{CircuitApi, Elem, Ext6Chip, FieldChip, E6};

use crate::{G1Affine, G2Affine, PairingError};

/// Element of the target group, six base-field coordinates.
pub type Gt<E> = E6<Elem<<E as Ext6Chip>::Fp>>;

pub struct Pairing<E> {
    pub(crate) ext6: E,
}

impl<E: Ext6Chip> Pairing<E> {
    pub fn new<A>(api: &A) -> Result<Self, PairingError>
    where
        A: CircuitApi<Ext6 = E, Fp = E::Fp>,
    {
        let fp = api.new_base_field().map_err(PairingError::NewBaseApi)?;
        Ok(Self {
            ext6: api.new_ext6(fp),
        })
    }

    pub fn ext6(&self) -> &E {
        &self.ext6
    }

    pub fn fp(&self) -> &E::Fp {
        self.ext6.fp()
    }

    /// Binds a native target-group value.
    pub fn new_gt(&self, v: &Fq6) -> Gt<E> {
        let coords = E6::<Fq>::from(*v);
        coords.map(|c| self.fp().value_of(c))
    }

    /// Reduced pairing `e(P, Q)`.
    ///
    /// `P` and `Q` are assumed to lie in the order-`r` subgroups of G1 and G2.
    pub fn pair(
        &self,
        p: &G1Affine<Elem<E::Fp>>,
        q: &G2Affine<Elem<E::Fp>>,
    ) -> Result<Gt<E>, PairingError> {
        let f = self.miller_loop(p, q)?;
        Ok(self.final_exponentiation(&f, &[]))
    }

    /// Asserts `e(P1, Q1) · e(P2, Q2) == 1`, sharing one final exponentiation.
    pub fn pairing_check(
        &self,
        p: [&G1Affine<Elem<E::Fp>>; 2],
        q: [&G2Affine<Elem<E::Fp>>; 2],
    ) -> Result<(), PairingError> {
        let f0 = self.miller_loop(p[0], q[0])?;
        let f1 = self.miller_loop(p[1], q[1])?;
        let res = self.final_exponentiation(&f0, &[f1]);
        self.ext6
            .assert_is_equal(&res, &self.ext6.one())
            .map_err(PairingError::PairingCheck)
    }
}
