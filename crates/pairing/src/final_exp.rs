use bw6_algebra::Ext6Chip;

use crate::{Gt, Pairing};

impl<E: Ext6Chip> Pairing<E> {
    /// Computes `(z · ∏ extra)^d` with `d = s · (p^3 - 1)(p + 1)(p^2 - p + 1) / r`,
    /// where `s = 12(x₀ + 1)` is the cofactor of El Housni and Guillevic.
    ///
    /// Passing the other Miller loop outputs as `extra` evaluates a product of
    /// pairings with a single exponentiation.
    pub fn final_exponentiation(&self, z: &Gt<E>, extra: &[Gt<E>]) -> Gt<E> {
        let _span =
            tracing::debug_span!("final_exponentiation", factors = extra.len() + 1).entered();
        let ext6 = &self.ext6;

        let mut result = ext6.set(z);
        for a in extra {
            result = ext6.mul(&result, a);
        }
        let result = self.final_exp_easy_part(&result);

        // Hard part, up to permutation: https://eprint.iacr.org/2020/351.pdf
        // Everything below lives in the cyclotomic subgroup.
        let m1 = ext6.expt(&result);
        let m1_conj = ext6.conjugate(&m1);
        let m2 = ext6.expt(&m1);
        let m2_conj = ext6.conjugate(&m2);
        let m3 = ext6.expt(&m2);

        let f0 = ext6.frobenius(&result);
        let f0 = ext6.mul(&f0, &result);
        let f0 = ext6.mul(&f0, &m2);
        let f0 = ext6.mul(&f0, &ext6.cyclotomic_square(&m1_conj));

        let f0_36 = ext6.cyclotomic_square(&f0);
        let f0_36 = ext6.cyclotomic_square(&f0_36);
        let f0_36 = ext6.cyclotomic_square(&f0_36);
        let f0_36 = ext6.mul(&f0_36, &f0);
        let f0_36 = ext6.cyclotomic_square(&f0_36);
        let f0_36 = ext6.cyclotomic_square(&f0_36);

        let g0 = ext6.mul(&result, &m1);
        let g0 = ext6.frobenius(&g0);
        let g0 = ext6.mul(&g0, &m3);
        let g0 = ext6.mul(&g0, &m2_conj);
        let g0 = ext6.mul(&g0, &m1_conj);

        let g1 = ext6.expt(&g0);
        let g1_conj = ext6.conjugate(&g1);
        let g2 = ext6.expt(&g1);
        let g3 = ext6.expt(&g2);
        let g3_conj = ext6.conjugate(&g3);
        let g4 = ext6.expt(&g3);
        let g4_conj = ext6.conjugate(&g4);
        let g5 = ext6.expt(&g4);
        let g5_conj = ext6.conjugate(&g5);
        let g6 = ext6.expt(&g5);

        let g_a = ext6.mul(&g3, &g5_conj);
        let g_a = ext6.cyclotomic_square(&g_a);
        let g_a = ext6.mul(&g_a, &g6);
        let g_a = ext6.mul(&g_a, &g1);
        let g_a = ext6.mul(&g_a, &g0);

        let g034 = ext6.mul(&g0, &g3);
        let g034 = ext6.mul(&g034, &g4_conj);
        let g_b = ext6.cyclotomic_square(&g034);
        let g_b = ext6.mul(&g_b, &g034);
        let g_b = ext6.mul(&g_b, &g5);
        let g_b = ext6.mul(&g_b, &g1_conj);

        let g1_conj_g2 = ext6.mul(&g1_conj, &g2);
        let g_c = ext6.mul(&g3_conj, &g1_conj_g2);
        let g_c = ext6.cyclotomic_square(&g_c);
        let g_c = ext6.mul(&g_c, &g1_conj_g2);
        let g_c = ext6.mul(&g_c, &g0);
        let g_c = ext6.cyclotomic_square(&g_c);
        let g_c = ext6.mul(&g_c, &g2);
        let g_c = ext6.mul(&g_c, &g0);
        let g_c = ext6.mul(&g_c, &g4);

        // c1 = ht^2 + 3hy^2 = 412
        let h1 = ext6.expc1(&g_a);
        // c2 = ht + hy = 22
        let h2 = ext6.expc2(&g_b);
        let h2g2c = ext6.cyclotomic_square(&g_c);
        let h2g2c = ext6.mul(&h2g2c, &h2);
        let h4 = ext6.cyclotomic_square(&h2g2c);
        let h4 = ext6.mul(&h4, &h2g2c);
        let h4 = ext6.cyclotomic_square(&h4);

        let result = ext6.mul(&h1, &h4);
        ext6.mul(&result, &f0_36)
    }

    /// `z^((p^3 - 1)(p + 1))`, which lands in the cyclotomic subgroup.
    pub(crate) fn final_exp_easy_part(&self, z: &Gt<E>) -> Gt<E> {
        let ext6 = &self.ext6;
        // z^(p^3 - 1) = conj(z) / z
        let buf = ext6.conjugate(z);
        let result = ext6.inverse(z);
        let buf = ext6.mul(&buf, &result);
        let result = ext6.frobenius(&buf);
        ext6.mul(&result, &buf)
    }
}
