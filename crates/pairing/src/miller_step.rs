use bw6_algebra::{Elem, Ext6Chip, FieldChip};

use crate::{AffinePoint, Pairing, UnevaluatedLine};

/// Affine G2 arithmetic producing the lines consumed by the Miller loop.
///
/// Inputs are never the point at infinity and never collide, so every slope
/// has a nonzero denominator.
pub trait MillerStep {
    type Fp;

    /// `2S` and the tangent at `S`
    fn double_step(
        &self,
        s: &AffinePoint<Self::Fp>,
    ) -> (AffinePoint<Self::Fp>, UnevaluatedLine<Self::Fp>);

    /// `S + Q` and the line through `S` and `Q`
    fn add_step(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> (AffinePoint<Self::Fp>, UnevaluatedLine<Self::Fp>);

    /// `2S + Q` computed as `(S + Q) + S`, with the lines through `S, Q` and
    /// through `S, S + Q`. The y-coordinate of `S + Q` is never formed.
    #[allow(clippy::type_complexity)]
    fn double_and_add_step(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> (
        AffinePoint<Self::Fp>,
        UnevaluatedLine<Self::Fp>,
        UnevaluatedLine<Self::Fp>,
    );

    /// Line through `S` and `Q` without computing `S + Q`.
    fn line_compute(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> UnevaluatedLine<Self::Fp>;
}

impl<E: Ext6Chip> Pairing<E> {
    /// Line of slope `λ` through `S`: `r0 = -λ`, `r1 = λ x_S - y_S`.
    fn line_with_slope(
        &self,
        lambda: &Elem<E::Fp>,
        s: &AffinePoint<Elem<E::Fp>>,
    ) -> UnevaluatedLine<Elem<E::Fp>> {
        let fp = self.fp();
        let r0 = fp.neg(lambda);
        let r1 = fp.sub(&fp.mul(lambda, &s.x), &s.y);
        UnevaluatedLine { r0, r1 }
    }

    fn chord_slope(
        &self,
        s: &AffinePoint<Elem<E::Fp>>,
        q: &AffinePoint<Elem<E::Fp>>,
    ) -> Elem<E::Fp> {
        let fp = self.fp();
        fp.div(&fp.sub(&q.y, &s.y), &fp.sub(&q.x, &s.x))
    }
}

impl<E: Ext6Chip> MillerStep for Pairing<E> {
    type Fp = Elem<E::Fp>;

    fn double_step(
        &self,
        s: &AffinePoint<Self::Fp>,
    ) -> (AffinePoint<Self::Fp>, UnevaluatedLine<Self::Fp>) {
        let fp = self.fp();
        let x = &s.x;
        let y = &s.y;

        // λ = 3x^2 / 2y
        let n = fp.mul_const(&fp.mul(x, x), 3);
        let d = fp.add(y, y);
        let lambda = fp.div(&n, &d);

        // x_2s = λ^2 - 2x
        let x_2s = fp.sub(&fp.sub(&fp.mul(&lambda, &lambda), x), x);
        // y_2s = λ(x - x_2s) - y
        let y_2s = fp.sub(&fp.mul(&lambda, &fp.sub(x, &x_2s)), y);

        let line = self.line_with_slope(&lambda, s);
        (AffinePoint::new(x_2s, y_2s), line)
    }

    fn add_step(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> (AffinePoint<Self::Fp>, UnevaluatedLine<Self::Fp>) {
        let fp = self.fp();

        // λ = (y_q - y_s) / (x_q - x_s)
        let lambda = self.chord_slope(s, q);
        // x_{s+q} = λ^2 - x_s - x_q
        let x_sq = fp.sub(&fp.mul(&lambda, &lambda), &fp.add(&s.x, &q.x));
        // y_{s+q} = λ(x_s - x_{s+q}) - y_s
        let y_sq = fp.sub(&fp.mul(&lambda, &fp.sub(&s.x, &x_sq)), &s.y);

        let line = self.line_with_slope(&lambda, s);
        (AffinePoint::new(x_sq, y_sq), line)
    }

    fn double_and_add_step(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> (
        AffinePoint<Self::Fp>,
        UnevaluatedLine<Self::Fp>,
        UnevaluatedLine<Self::Fp>,
    ) {
        let fp = self.fp();
        let x_s = &s.x;
        let y_s = &s.y;

        // λ1 = (y_s - y_q) / (x_s - x_q)
        let lambda1 = fp.div(&fp.sub(y_s, &q.y), &fp.sub(x_s, &q.x));
        // x3 = λ1^2 - x_s - x_q, y3 is not needed
        let x3 = fp.sub(&fp.sub(&fp.mul(&lambda1, &lambda1), x_s), &q.x);
        let line1 = self.line_with_slope(&lambda1, s);

        // λ2 = -λ1 - 2y_s / (x3 - x_s)
        let n = fp.add(y_s, y_s);
        let d = fp.sub(&x3, x_s);
        let lambda2 = fp.neg(&fp.add(&fp.div(&n, &d), &lambda1));

        // x4 = λ2^2 - x_s - x3
        let x4 = fp.sub(&fp.sub(&fp.mul(&lambda2, &lambda2), x_s), &x3);
        // y4 = λ2(x_s - x4) - y_s
        let y4 = fp.sub(&fp.mul(&lambda2, &fp.sub(x_s, &x4)), y_s);
        let line2 = self.line_with_slope(&lambda2, s);

        (AffinePoint::new(x4, y4), line1, line2)
    }

    fn line_compute(
        &self,
        s: &AffinePoint<Self::Fp>,
        q: &AffinePoint<Self::Fp>,
    ) -> UnevaluatedLine<Self::Fp> {
        let lambda = self.chord_slope(s, q);
        self.line_with_slope(&lambda, s)
    }
}
