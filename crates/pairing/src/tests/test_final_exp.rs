use ark_bw6_761::{Fq6, Fr};
use ark_ff::{Field, One, PrimeField};
use ark_std::UniformRand;
use bw6_algebra::{native::NativeApi, CountingApi, Op};
use rand::{rngs::StdRng, SeedableRng};

use super::test_utils::{final_exp_naive, native_pairing};
use crate::{
    curve::{final_exp_exponent, BW6_761_MODULUS, BW6_761_ORDER},
    Pairing,
};

fn random_fq6(seed: u64) -> Fq6 {
    let mut rng = StdRng::seed_from_u64(seed);
    Fq6::rand(&mut rng)
}

#[test]
fn test_final_exp_matches_naive() {
    let pairing = native_pairing();
    for seed in [4, 271] {
        let f = random_fq6(seed);
        let res = pairing.final_exponentiation(&pairing.new_gt(&f), &[]);
        assert_eq!(Fq6::from(&res), final_exp_naive(&f));
    }
}

#[test]
fn test_final_exp_lands_in_mu_r() {
    let pairing = native_pairing();
    let f = random_fq6(33);
    let res = Fq6::from(&pairing.final_exponentiation(&pairing.new_gt(&f), &[]));
    assert_ne!(res, Fq6::one());
    assert_eq!(res.pow(Fr::MODULUS), Fq6::one());
}

#[test]
fn test_easy_part_lands_in_cyclotomic_subgroup() {
    let pairing = native_pairing();
    let f = random_fq6(91);
    let res = Fq6::from(&pairing.final_exp_easy_part(&pairing.new_gt(&f)));
    let p = &*BW6_761_MODULUS;
    let phi6 = p * p - p + 1u32;
    assert_eq!(res.pow(phi6.to_u64_digits()), Fq6::one());
}

#[test]
fn test_final_exp_on_its_own_image() {
    let pairing = native_pairing();
    let f = random_fq6(12);
    let y = pairing.final_exponentiation(&pairing.new_gt(&f), &[]);
    let yy = pairing.final_exponentiation(&y, &[]);

    // y has order r, so applying the map again raises it to e mod r
    let e_mod_r = final_exp_exponent() % &*BW6_761_ORDER;
    assert_eq!(Fq6::from(&yy), Fq6::from(&y).pow(e_mod_r.to_u64_digits()));
}

#[test]
fn test_final_exp_extra_factors() {
    let pairing = native_pairing();
    let f: Vec<Fq6> = [21, 22, 23].map(random_fq6).to_vec();
    let gt: Vec<_> = f.iter().map(|f| pairing.new_gt(f)).collect();

    let batched = Fq6::from(&pairing.final_exponentiation(&gt[0], &gt[1..]));
    let separate = gt.iter().fold(Fq6::one(), |acc, z| {
        acc * Fq6::from(&pairing.final_exponentiation(z, &[]))
    });
    assert_eq!(batched, separate);
    assert_eq!(batched, final_exp_naive(&(f[0] * f[1] * f[2])));
}

#[test]
fn test_final_exp_operation_counts() {
    let api = CountingApi::new(NativeApi::default());
    let counts = api.counts();
    let pairing = Pairing::new(&api).unwrap();
    let f = pairing.new_gt(&random_fq6(8));

    pairing.final_exponentiation(&f, &[f.clone()]);

    assert_eq!(counts.get(Op::Ext6Expt), 9);
    assert_eq!(counts.get(Op::Ext6Expc1), 1);
    assert_eq!(counts.get(Op::Ext6Expc2), 1);
    assert_eq!(counts.get(Op::Ext6CyclotomicSquare), 13);
    assert_eq!(counts.get(Op::Ext6Square), 0);
    assert_eq!(counts.get(Op::Ext6Frobenius), 3);
    assert_eq!(counts.get(Op::Ext6Conjugate), 7);
    assert_eq!(counts.get(Op::Ext6Inverse), 1);
    // 30 in the chain, 1 for the extra factor
    assert_eq!(counts.get(Op::Ext6Mul), 31);
    assert_eq!(counts.get(Op::FpInverse), 0);
}
