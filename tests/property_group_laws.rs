//! Property tests for the group laws of the native backend.

use ecgroup::prelude::*;
use proptest::prelude::*;

fn secp256k1() -> Box<dyn EcGroup> {
    create_group("secp256k1").unwrap()
}

fn curve25519() -> Box<dyn EcGroup> {
    create_group("curve25519").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn weierstrass_mul_distributes_over_scalar_addition(a in 1u64.., b in 1u64..) {
        let group = secp256k1();
        let left = group.mul_base(&(Scalar::from(a) + Scalar::from(b))).unwrap();
        let right = group
            .add(
                &group.mul_base(&Scalar::from(a)).unwrap(),
                &group.mul_base(&Scalar::from(b)).unwrap(),
            )
            .unwrap();
        prop_assert!(group.point_equal(&left, &right));
    }

    #[test]
    fn weierstrass_mul_is_associative(a in 1u64.., b in 1u64..) {
        let group = secp256k1();
        let inner = group.mul_base(&Scalar::from(a)).unwrap();
        let left = group.mul(&Scalar::from(b), &inner).unwrap();
        let right = group.mul_base(&(Scalar::from(a) * Scalar::from(b))).unwrap();
        prop_assert!(group.point_equal(&left, &right));
    }

    #[test]
    fn weierstrass_points_stay_on_curve(a in 1u64..) {
        let group = secp256k1();
        let point = group.mul_base(&Scalar::from(a)).unwrap();
        prop_assert!(group.is_in_curve_group(&point));
    }

    #[test]
    fn weierstrass_serialization_roundtrips(a in 1u64..) {
        let group = secp256k1();
        let point = group.mul_base(&Scalar::from(a)).unwrap();
        let buf = group.serialize_point(&point, PointFormat::Autonomous).unwrap();
        let back = group.deserialize_point(&buf, PointFormat::Autonomous).unwrap();
        prop_assert!(group.point_equal(&point, &back));
    }

    #[test]
    fn montgomery_ladder_commutes(a in 1u64.., b in 1u64..) {
        let group = curve25519();
        let g = group.generator();
        let ab = group.mul(&Scalar::from(b), &group.mul(&Scalar::from(a), &g).unwrap()).unwrap();
        let ba = group.mul(&Scalar::from(a), &group.mul(&Scalar::from(b), &g).unwrap()).unwrap();
        prop_assert!(group.point_equal(&ab, &ba));
    }

    #[test]
    fn montgomery_results_stay_in_range(a in 1u64..) {
        let group = curve25519();
        let point = group.mul_base(&Scalar::from(a)).unwrap();
        prop_assert!(group.is_in_curve_group(&point));
    }
}
