use bw6_algebra::{Elem, Ext6Chip, FieldChip};

use crate::{EvaluatedLine, G1Affine, G2Affine, Gt, MillerStep, Pairing, PairingError};

/// `x₀ + 1` in 2-NAF, least significant digit first.
pub const LOOP_COUNTER_1: [i8; 64] = [
    0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
];

/// `x₀^3 - x₀^2 - x₀` in 2-NAF, least significant digit first.
pub const LOOP_COUNTER_2: [i8; 190] = [
    -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    1, 0, 0, -1, 0, 1, 0, -1, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -1, 0, 0, 0, 0, -1, 0, 0, 1, 0, 0, 0, -1, 0, 0, -1, 0,
    1, 0, -1, 0, 0, 0, 1, 0, 0, 1, 0, -1, 0, 1, 0, 1, 0, 0, 0, 1, 0, -1, 0, -1, 0, 0, 0, 0, 0, 1, 0,
    0, 1,
];

impl<E: Ext6Chip> Pairing<E> {
    /// `f_{x₀+1,Q}(P)`
    pub fn first_loop(
        &self,
        p: &G1Affine<Elem<E::Fp>>,
        q: &G2Affine<Elem<E::Fp>>,
    ) -> Result<Gt<E>, PairingError> {
        self.miller_sub_loop(p, q, &LOOP_COUNTER_1)
    }

    /// `f_{x₀^3-x₀^2-x₀,Q}(P)`
    pub fn second_loop(
        &self,
        p: &G1Affine<Elem<E::Fp>>,
        q: &G2Affine<Elem<E::Fp>>,
    ) -> Result<Gt<E>, PairingError> {
        self.miller_sub_loop(p, q, &LOOP_COUNTER_2)
    }

    /// `f_{x₀+1,Q}(P) · f_{x₀^3-x₀^2-x₀,Q}(P)^p`
    pub fn miller_loop(
        &self,
        p: &G1Affine<Elem<E::Fp>>,
        q: &G2Affine<Elem<E::Fp>>,
    ) -> Result<Gt<E>, PairingError> {
        let _span = tracing::debug_span!("miller_loop").entered();
        let ml1 = self.first_loop(p, q)?;
        let ml2 = self.second_loop(p, q)?;
        let ml = self.ext6.frobenius(&ml2);
        Ok(self.ext6.mul(&ml, &ml1))
    }

    pub fn mul_by_line(&self, f: &Gt<E>, line: &EvaluatedLine<Elem<E::Fp>>) -> Gt<E> {
        self.ext6.mul_by_014(f, &line.r1, &line.r0)
    }

    /// Scans `loop_counter` from its second most significant digit down. The
    /// leading digit is 1 and is accounted for by starting from `Q`.
    pub(crate) fn miller_sub_loop(
        &self,
        p: &G1Affine<Elem<E::Fp>>,
        q: &G2Affine<Elem<E::Fp>>,
        loop_counter: &[i8],
    ) -> Result<Gt<E>, PairingError> {
        let fp = self.fp();
        let mut res = self.ext6.one();
        let mut q_acc = q.clone();
        let q_neg = q.neg(fp);

        // P has order r, so y_P != 0
        let y_inv = fp.inverse(&p.y);
        let x_over_y = fp.mul(&p.x, &y_inv);
        let xy_frac = (x_over_y, y_inv);

        tracing::trace!(digits = loop_counter.len().saturating_sub(1), "miller sub-loop");
        for (i, &digit) in loop_counter.iter().enumerate().rev().skip(1) {
            // one squaring shared by every line of this round
            res = self.ext6.square(&res);

            match digit {
                0 => {
                    let (q_next, line) = self.double_step(&q_acc);
                    q_acc = q_next;
                    res = self.mul_by_line(&res, &line.evaluate(fp, &xy_frac));
                }
                1 | -1 => {
                    let q_signed = if digit == 1 { q } else { &q_neg };
                    let (q_next, line1, line2) = self.double_and_add_step(&q_acc, q_signed);
                    q_acc = q_next;
                    res = self.mul_by_line(&res, &line1.evaluate(fp, &xy_frac));
                    res = self.mul_by_line(&res, &line2.evaluate(fp, &xy_frac));
                }
                _ => return Err(PairingError::InvalidLoopCounter { index: i, digit }),
            }
        }

        Ok(res)
    }
}
