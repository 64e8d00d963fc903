//! BW6-761 parameters.
//!
//! G1 is `y^2 = x^3 - 1` and G2 is the M-twist `y^2 = x^3 + 4`, both over the
//! 761-bit base field.

use hex_literal::hex;
use lazy_static::lazy_static;
use num_bigint::BigUint;

pub use bw6_algebra::params::{EXPC1, EXPC2, HT, HY, SEED};

pub const G1_COEFF_B: i64 = -1;
pub const G2_COEFF_B: i64 = 4;

lazy_static! {
    pub static ref BW6_761_MODULUS: BigUint = BigUint::from_bytes_be(&hex!(
        "0122e824fb83ce0ad187c94004faff3eb926186a81d14688528275ef8087be41707ba638e584e91903cebaff25b423048689c8ed12f9fd9071dcd3dc73ebff2e98a116c25667a8f8160cf8aeeaf0a437e6913e6870000082f49d00000000008b"
    ));
    pub static ref BW6_761_ORDER: BigUint = BigUint::from_bytes_be(&hex!(
        "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001"
    ));
}

/// The cofactor `s = 12(x₀+1)` folded into the final exponent.
pub fn final_exp_cofactor() -> BigUint {
    BigUint::from(12u32) * BigUint::from(SEED + 1)
}

/// `s · (p^6 - 1) / r`, the exponent realised by
/// [`Pairing::final_exponentiation`](crate::Pairing::final_exponentiation).
pub fn final_exp_exponent() -> BigUint {
    let p = &*BW6_761_MODULUS;
    (p.pow(6) - 1u32) / &*BW6_761_ORDER * final_exp_cofactor()
}

#[cfg(test)]
mod tests {
    use ark_bw6_761::{g1, g2, Fq, Fr};
    use ark_ec::short_weierstrass::SWCurveConfig;
    use ark_ff::{One, PrimeField};

    use super::*;

    #[test]
    fn test_moduli() {
        assert_eq!(*BW6_761_MODULUS, BigUint::from(Fq::MODULUS));
        assert_eq!(*BW6_761_ORDER, BigUint::from(Fr::MODULUS));
        assert_eq!(BW6_761_MODULUS.bits(), 761);
    }

    #[test]
    fn test_curve_coefficients() {
        assert_eq!(g1::Config::COEFF_B, -Fq::one());
        assert_eq!(g2::Config::COEFF_B, Fq::from(G2_COEFF_B as u64));
        assert_eq!(G1_COEFF_B, -1);
    }

    #[test]
    fn test_final_exp_exponent() {
        let p = &*BW6_761_MODULUS;
        let r = &*BW6_761_ORDER;
        // r divides p^2 - p + 1
        assert_eq!((p * p - p + 1u32) % r, BigUint::from(0u32));
        assert_eq!(
            final_exp_cofactor(),
            "115033474957087604760".parse::<BigUint>().unwrap()
        );
        assert_eq!((p.pow(6) - 1u32) % r, BigUint::from(0u32));
        assert_eq!(final_exp_exponent().bits(), 4251);
    }
}
