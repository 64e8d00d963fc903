use serde::{Deserialize, Serialize};

use crate::{ChipError, Elem, FieldChip};

/// `a0 + a1 u + a2 u^2` in `Fp3 = Fp[u]/(u^3 + 4)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct E3<T> {
    pub a0: T,
    pub a1: T,
    pub a2: T,
}

/// `b0 + b1 v` in `Fp6 = Fp3[v]/(v^2 - u)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct E6<T> {
    pub b0: E3<T>,
    pub b1: E3<T>,
}

impl<T> E3<T> {
    pub const fn new(a0: T, a1: T, a2: T) -> Self {
        Self { a0, a1, a2 }
    }
}

impl<T> E6<T> {
    pub const fn new(b0: E3<T>, b1: E3<T>) -> Self {
        Self { b0, b1 }
    }

    /// Builds an element from its six coordinates in `(b0.a0, b0.a1, b0.a2,
    /// b1.a0, b1.a1, b1.a2)` order.
    pub fn from_coeffs([c0, c1, c2, c3, c4, c5]: [T; 6]) -> Self {
        Self::new(E3::new(c0, c1, c2), E3::new(c3, c4, c5))
    }

    pub fn into_coeffs(self) -> [T; 6] {
        let Self { b0, b1 } = self;
        [b0.a0, b0.a1, b0.a2, b1.a0, b1.a1, b1.a2]
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> E6<U> {
        E6::from_coeffs([
            f(&self.b0.a0),
            f(&self.b0.a1),
            f(&self.b0.a2),
            f(&self.b1.a0),
            f(&self.b1.a1),
            f(&self.b1.a2),
        ])
    }
}

/// Arithmetic in the degree-6 tower over the base field of [`Ext6Chip::Fp`].
///
/// Elements are plain coordinate containers of base-field elements, so the
/// target group looks the same whichever base-field emulation backs it.
pub trait Ext6Chip {
    type Fp: FieldChip;

    fn fp(&self) -> &Self::Fp;

    fn one(&self) -> E6<Elem<Self::Fp>>;
    /// Copies `a` into a fresh element.
    fn set(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    fn mul(&self, a: &E6<Elem<Self::Fp>>, b: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    fn square(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// Squaring for elements of the cyclotomic subgroup. The result is
    /// unspecified for any other input.
    fn cyclotomic_square(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// `b0 - b1 v`, the `p^3`-power map.
    fn conjugate(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    fn inverse(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// The `p`-power map.
    fn frobenius(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// Multiplies `z` by the sparse element `c0 + c1 u + u v`, i.e. the element
    /// whose coordinates are `(c0, c1, 0, 0, 1, 0)`.
    fn mul_by_014(
        &self,
        z: &E6<Elem<Self::Fp>>,
        c0: &Elem<Self::Fp>,
        c1: &Elem<Self::Fp>,
    ) -> E6<Elem<Self::Fp>>;
    /// `a^x₀`
    fn expt(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// `a^(ht^2 + 3hy^2)`
    fn expc1(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;
    /// `a^(ht + hy)`
    fn expc2(&self, a: &E6<Elem<Self::Fp>>) -> E6<Elem<Self::Fp>>;

    fn assert_is_equal(
        &self,
        a: &E6<Elem<Self::Fp>>,
        b: &E6<Elem<Self::Fp>>,
    ) -> Result<(), ChipError>;
}
