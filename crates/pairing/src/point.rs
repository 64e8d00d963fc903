use ark_bw6_761::Fq;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use bw6_algebra::FieldChip;
use serde::{Deserialize, Serialize};

/// Affine point over the base field. BW6-761 has G1 and G2 over the same field,
/// so one type covers both groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinePoint<F> {
    pub x: F,
    pub y: F,
}

pub type G1Affine<F> = AffinePoint<F>;
pub type G2Affine<F> = AffinePoint<F>;

impl<F> AffinePoint<F> {
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl<F: Clone> AffinePoint<F> {
    pub fn neg<C: FieldChip<Element = F>>(&self, fp: &C) -> Self {
        Self::new(self.x.clone(), fp.neg(&self.y))
    }

    /// Binds the coordinates of a native point. The point at infinity has no
    /// affine form and must not be passed here.
    pub fn from_native<C, P>(fp: &C, point: &Affine<P>) -> Self
    where
        C: FieldChip<Element = F>,
        P: SWCurveConfig<BaseField = Fq>,
    {
        debug_assert!(!point.infinity, "point at infinity has no affine form");
        Self::new(fp.value_of(&point.x), fp.value_of(&point.y))
    }
}
