use ark_bw6_761::{self as bw6, Fq, Fq6, Fr};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, One, PrimeField};
use ark_std::UniformRand;
use bw6_algebra::{native::NativeApi, ChipError, CountingApi, EmulationConfig, E6};
use rand::{rngs::StdRng, SeedableRng};
use test_case::test_case;

use super::test_utils::{bind, generate_test_points, native_pairing, reference_pairing};
use crate::{AffinePoint, Pairing, PairingError};

fn native_pair(p: &bw6::G1Affine, q: &bw6::G2Affine) -> Fq6 {
    let pairing = native_pairing();
    let (p, q) = bind(&pairing, p, q);
    Fq6::from(&pairing.pair(&p, &q).unwrap())
}

#[test]
#[allow(non_snake_case)]
fn test_pairing_of_generators() {
    let P = bw6::G1Affine::generator();
    let Q = bw6::G2Affine::generator();
    let e = native_pair(&P, &Q);
    assert_eq!(e, reference_pairing(&P, &Q));
    assert_ne!(e, Fq6::one());

    let P2 = (P.into_group() + P).into_affine();
    let Q2 = (Q.into_group() + Q).into_affine();
    assert_eq!(native_pair(&P2, &Q), e.square());
    assert_eq!(native_pair(&P, &Q2), e.square());
}

#[test]
fn test_pairing_matches_reference_on_random_points() {
    let (p_vec, q_vec) = generate_test_points(&[10, 20]);
    for (p, q) in p_vec.iter().zip(q_vec.iter()) {
        assert_eq!(native_pair(p, q), reference_pairing(p, q));
    }
}

#[test_case(3 ; "seed 3")]
#[test_case(1234 ; "seed 1234")]
#[allow(non_snake_case)]
fn test_bilinearity(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Fr::rand(&mut rng);
    let b = Fr::rand(&mut rng);
    let P = bw6::G1Affine::generator();
    let Q = bw6::G2Affine::generator();

    let aP = (P * a).into_affine();
    let bQ = (Q * b).into_affine();
    let expected = native_pair(&P, &Q).pow((a * b).into_bigint());
    assert_eq!(native_pair(&aP, &bQ), expected);
}

#[test]
fn test_multi_pairing_product() {
    let pairing = native_pairing();
    let (p_vec, q_vec) = generate_test_points(&[100, 200]);
    let (p0, q0) = bind(&pairing, &p_vec[0], &q_vec[0]);
    let (p1, q1) = bind(&pairing, &p_vec[1], &q_vec[1]);

    let ml0 = pairing.miller_loop(&p0, &q0).unwrap();
    let ml1 = pairing.miller_loop(&p1, &q1).unwrap();
    let batched = Fq6::from(&pairing.final_exponentiation(&ml0, &[ml1.clone()]));
    let separate = Fq6::from(&pairing.final_exponentiation(&ml0, &[]))
        * Fq6::from(&pairing.final_exponentiation(&ml1, &[]));
    assert_eq!(batched, separate);
}

#[test]
#[allow(non_snake_case)]
fn test_pairing_check() {
    let pairing = native_pairing();
    let fp = pairing.fp();
    let mut rng = StdRng::seed_from_u64(55);
    let a = Fr::rand(&mut rng);
    let P = bw6::G1Affine::generator();
    let Q = bw6::G2Affine::generator();

    let aP = AffinePoint::from_native(fp, &(P * a).into_affine());
    let aQ = AffinePoint::from_native(fp, &(Q * a).into_affine());
    let P = AffinePoint::from_native(fp, &P);
    let Q = AffinePoint::from_native(fp, &Q);
    let P_neg = P.neg(fp);

    // e(aP, Q) e(-P, aQ) = 1
    pairing.pairing_check([&aP, &P_neg], [&Q, &aQ]).unwrap();

    let err = pairing.pairing_check([&aP, &P], [&Q, &aQ]).unwrap_err();
    assert!(matches!(err, PairingError::PairingCheck(ChipError::NotEqual)));
    assert_eq!(err.to_string(), "pairing check failed");
}

#[test]
fn test_new_pairing_rejects_bad_emulation() {
    let api = NativeApi::new(EmulationConfig::new(64, 4));
    let err = Pairing::new(&api).err().unwrap();
    assert!(matches!(
        err,
        PairingError::NewBaseApi(ChipError::InsufficientCapacity { .. })
    ));
    assert!(err.to_string().starts_with("new base api: "));
}

#[test]
fn test_new_gt() {
    let pairing = native_pairing();
    let mut rng = StdRng::seed_from_u64(9);
    let v = Fq6::rand(&mut rng);
    let gt = pairing.new_gt(&v);
    assert_eq!(gt, E6::<Fq>::from(v));
    assert_eq!(gt.b1.a2, v.c1.c2);
}

#[test]
fn test_counting_pairing_agrees_with_native() {
    let api = CountingApi::new(NativeApi::default());
    let pairing = Pairing::new(&api).unwrap();
    let (p_vec, q_vec) = generate_test_points(&[64]);
    let (p, q) = bind(&pairing, &p_vec[0], &q_vec[0]);

    let e = Fq6::from(&pairing.pair(&p, &q).unwrap());
    assert_eq!(e, native_pair(&p_vec[0], &q_vec[0]));
    assert_eq!(e.pow(Fr::MODULUS), Fq6::one());
}
