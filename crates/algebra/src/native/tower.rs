use ark_bw6_761::{Fq, Fq3, Fq6};
use ark_ff::{Field, One};

use super::NativeFp;
use crate::{
    params::{EXPC1, EXPC2, SEED},
    ChipError, Ext6Chip, E6,
};

/// Tower chip over [`NativeFp`], backed by arkworks [`Fq6`].
#[derive(Clone, Copy, Debug)]
pub struct NativeExt6 {
    fp: NativeFp,
}

impl NativeExt6 {
    pub fn new(fp: NativeFp) -> Self {
        Self { fp }
    }

    fn unary(a: &E6<Fq>, f: impl FnOnce(Fq6) -> Fq6) -> E6<Fq> {
        f(Fq6::from(a)).into()
    }
}

/// `a * u`, using `u^3 = -4`.
fn mul_by_u(a: &Fq3) -> Fq3 {
    Fq3::new(-a.c2.double().double(), a.c0, a.c1)
}

fn scale(a: &Fq3, k: &Fq) -> Fq3 {
    Fq3::new(a.c0 * k, a.c1 * k, a.c2 * k)
}

impl Ext6Chip for NativeExt6 {
    type Fp = NativeFp;

    fn fp(&self) -> &NativeFp {
        &self.fp
    }

    fn one(&self) -> E6<Fq> {
        Fq6::one().into()
    }

    fn set(&self, a: &E6<Fq>) -> E6<Fq> {
        a.clone()
    }

    fn mul(&self, a: &E6<Fq>, b: &E6<Fq>) -> E6<Fq> {
        (Fq6::from(a) * Fq6::from(b)).into()
    }

    fn square(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| a.square())
    }

    fn cyclotomic_square(&self, a: &E6<Fq>) -> E6<Fq> {
        self.square(a)
    }

    fn conjugate(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| Fq6::new(a.c0, -a.c1))
    }

    /// # Panics
    /// If `a` is zero.
    fn inverse(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| {
            a.inverse()
                .expect("inverse of zero in the BW6-761 target field")
        })
    }

    fn frobenius(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |mut a| {
            a.frobenius_map_in_place(1);
            a
        })
    }

    // (b0 + b1 v)(s0 + u v) with s0 = c0 + c1 u and v^2 = u:
    //   b0 s0 + b1 u^2 + (b0 u + b1 s0) v
    fn mul_by_014(&self, z: &E6<Fq>, c0: &Fq, c1: &Fq) -> E6<Fq> {
        let b0 = Fq3::from(&z.b0);
        let b1 = Fq3::from(&z.b1);
        let b0_u = mul_by_u(&b0);
        let b1_u = mul_by_u(&b1);

        let r0 = scale(&b0, c0) + scale(&b0_u, c1) + mul_by_u(&b1_u);
        let r1 = b0_u + scale(&b1, c0) + scale(&b1_u, c1);
        Fq6::new(r0, r1).into()
    }

    fn expt(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| a.pow([SEED]))
    }

    fn expc1(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| a.pow([EXPC1]))
    }

    fn expc2(&self, a: &E6<Fq>) -> E6<Fq> {
        Self::unary(a, |a| a.pow([EXPC2]))
    }

    fn assert_is_equal(&self, a: &E6<Fq>, b: &E6<Fq>) -> Result<(), ChipError> {
        if a == b {
            Ok(())
        } else {
            Err(ChipError::NotEqual)
        }
    }
}
