use bw6_algebra::{FieldChip, E6};

/// Sparse line `1 + r0 (x/y) + r1 (1/y)` through points of G2, before it is
/// evaluated at a point of G1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnevaluatedLine<F> {
    pub r0: F,
    pub r1: F,
}

/// A line after scaling by `(x_P / y_P, 1 / y_P)`. As an element of `Fp6` it is
/// `r1 + r0 u + u v`, the shape expected by
/// [`Ext6Chip::mul_by_014`](bw6_algebra::Ext6Chip::mul_by_014).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedLine<F> {
    pub r0: F,
    pub r1: F,
}

impl<F> UnevaluatedLine<F> {
    // xy_frac is (x/y, 1/y)
    pub fn evaluate<C>(&self, fp: &C, xy_frac: &(F, F)) -> EvaluatedLine<F>
    where
        C: FieldChip<Element = F>,
    {
        let (x_over_y, y_inv) = xy_frac;
        EvaluatedLine {
            r0: fp.mul(&self.r0, x_over_y),
            r1: fp.mul(&self.r1, y_inv),
        }
    }
}

impl<F: Clone> EvaluatedLine<F> {
    /// Dense form of the line, for comparing against generic multiplication.
    pub fn to_e6<C: FieldChip<Element = F>>(&self, fp: &C) -> E6<F> {
        E6::from_coeffs([
            self.r1.clone(),
            self.r0.clone(),
            fp.zero(),
            fp.zero(),
            fp.one(),
            fp.zero(),
        ])
    }
}
