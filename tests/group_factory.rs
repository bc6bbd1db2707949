//! Integration tests: resolving curves through the process-wide registry
//! and driving the resolved groups end to end.

use ecgroup::prelude::*;

#[test]
fn test_resolves_every_builtin_curve() {
    for name in ["secp256k1", "sm2", "curve25519"] {
        let group = create_group(name).unwrap();
        assert_eq!(group.library_name(), "native");
        assert_eq!(group.curve_name(), name);
    }
}

#[test]
fn test_curve_names_are_case_insensitive() {
    let group = create_group("Curve25519").unwrap();
    assert_eq!(group.curve_name(), "Curve25519");
    assert_eq!(*group.cofactor(), Scalar::from(8u32));
}

#[test]
fn test_unsupported_curve() {
    let err = create_group("p-256").unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedCurve {
            name: "p-256".to_string()
        }
    );
}

#[test]
fn test_registry_lists_native_backend() {
    assert!(ecgroup::registry().library_names().contains(&"native"));
}

#[test]
fn test_embedder_can_build_a_custom_registry() {
    let mut registry = ecgroup::Registry::new();
    ecgroup::native::register(&mut registry).unwrap();

    let group = registry.resolve(&CurveMeta::new("sm2")).unwrap();
    assert_eq!(group.curve_name(), "sm2");
}

#[test]
fn test_weierstrass_diffie_hellman_agrees() {
    let group = create_group("secp256k1").unwrap();
    let alice = Scalar::from(0x1F2E3D4C5B6A7989u64);
    let bob = Scalar::from(0x99A8B7C6D5E4F312u64);

    let alice_pub = group.mul_base(&alice).unwrap();
    let bob_pub = group.mul_base(&bob).unwrap();

    let alice_shared = group.mul(&alice, &bob_pub).unwrap();
    let bob_shared = group.mul(&bob, &alice_pub).unwrap();
    assert!(group.point_equal(&alice_shared, &bob_shared));
    assert!(group.is_in_curve_group(&alice_shared));
}

#[test]
fn test_montgomery_diffie_hellman_agrees() {
    let group = create_group("curve25519").unwrap();
    let alice = Scalar::from(0xDEADBEEFCAFEF00Du64);
    let bob = Scalar::from(0x0123456789ABCDEFu64);

    let alice_pub = group.mul_base(&alice).unwrap();
    let bob_pub = group.mul_base(&bob).unwrap();

    let alice_shared = group.mul(&alice, &bob_pub).unwrap();
    let bob_shared = group.mul(&bob, &alice_pub).unwrap();
    assert!(group.point_equal(&alice_shared, &bob_shared));
}

#[test]
fn test_serialized_points_cross_group_instances() {
    // Two resolutions of the same curve are interchangeable
    let a = create_group("secp256k1").unwrap();
    let b = create_group("secp256k1").unwrap();

    let point = a.mul_base(&Scalar::from(1234u32)).unwrap();
    let buf = a.serialize_point(&point, PointFormat::Autonomous).unwrap();
    let back = b.deserialize_point(&buf, PointFormat::Autonomous).unwrap();
    assert!(b.point_equal(&point, &back));
}

#[test]
fn test_groups_are_shareable_across_threads() {
    let group = create_group("secp256k1").unwrap();
    let group = std::sync::Arc::new(group);

    let handles: Vec<_> = (1u32..=4)
        .map(|i| {
            let group = std::sync::Arc::clone(&group);
            std::thread::spawn(move || group.mul_base(&Scalar::from(i)).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = group.mul_base(&Scalar::from(i as u32 + 1)).unwrap();
        assert!(group.point_equal(&handle.join().unwrap(), &expected));
    }
}
