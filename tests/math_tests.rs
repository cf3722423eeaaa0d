use approx::assert_relative_eq;
use flightdyn::math::{approx_eq, clamp, Quaternion, Transform, Vector3, EPSILON};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_vector_arithmetic() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, -5.0, 6.0);

    assert_eq!(a + b, Vector3::new(5.0, -3.0, 9.0));
    assert_eq!(a - b, Vector3::new(-3.0, 7.0, -3.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

    assert_relative_eq!(a.dot(&b), 12.0);

    let cross = Vector3::unit_x().cross(&Vector3::unit_y());
    assert_relative_eq!(cross.x, 0.0);
    assert_relative_eq!(cross.y, 0.0);
    assert_relative_eq!(cross.z, 1.0);
}

#[test]
fn test_vector_normalize() {
    let v = Vector3::new(3.0, 4.0, 0.0);
    assert_relative_eq!(v.length(), 5.0);

    let n = v.normalize();
    assert_relative_eq!(n.length(), 1.0, epsilon = 1.0e-6);

    // Normalizing a zero vector leaves it untouched instead of dividing by zero
    let z = Vector3::zero().normalize();
    assert!(z.is_zero());
}

#[test]
fn test_vector_lerp() {
    let a = Vector3::zero();
    let b = Vector3::new(10.0, -10.0, 4.0);
    let mid = a.lerp(&b, 0.5);

    assert_relative_eq!(mid.x, 5.0);
    assert_relative_eq!(mid.y, -5.0);
    assert_relative_eq!(mid.z, 2.0);
}

#[test]
fn test_scalar_helpers() {
    assert!(approx_eq(1.0, 1.0 + EPSILON * 0.5));
    assert!(!approx_eq(1.0, 1.1));
    assert_eq!(clamp(5.0, -1.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, -1.0, 1.0), -1.0);
    assert_eq!(clamp(0.3, -1.0, 1.0), 0.3);
}

#[test]
fn test_quaternion_axis_angle_rotation() {
    // 90 degrees about +Z maps +X to +Y
    let q = Quaternion::from_axis_angle(Vector3::unit_z(), std::f32::consts::FRAC_PI_2);
    let rotated = q.rotate_vector(Vector3::unit_x());

    assert_relative_eq!(rotated.x, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(rotated.y, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(rotated.z, 0.0, epsilon = 1.0e-5);
}

#[test]
fn test_quaternion_inverse_rotation_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, -0.5), 1.2);
    let v = Vector3::new(3.0, -1.0, 7.0);

    let back = q.inverse_rotate_vector(q.rotate_vector(v));
    assert_relative_eq!(back.x, v.x, epsilon = 1.0e-4);
    assert_relative_eq!(back.y, v.y, epsilon = 1.0e-4);
    assert_relative_eq!(back.z, v.z, epsilon = 1.0e-4);
}

#[test]
fn test_quaternion_normalize_degenerate() {
    let q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(q.normalize(), Quaternion::identity());
}

#[test]
fn test_quaternion_composition_stays_orthonormal() {
    // Compose many random small rotations and verify the result still
    // behaves like a rotation after renormalization
    let mut rng = StdRng::seed_from_u64(42);
    let mut q = Quaternion::identity();

    for _ in 0..1000 {
        let axis = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if axis.is_zero() {
            continue;
        }
        let angle = rng.gen_range(-0.1..0.1);
        q = (q * Quaternion::from_axis_angle(axis, angle)).normalize();
    }

    assert_relative_eq!(q.length(), 1.0, epsilon = 1.0e-4);

    // The rotated basis must stay orthonormal
    let x = q.rotate_vector(Vector3::unit_x());
    let y = q.rotate_vector(Vector3::unit_y());
    let z = q.rotate_vector(Vector3::unit_z());

    assert_relative_eq!(x.length(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(y.length(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(z.length(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(x.dot(&y), 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(y.dot(&z), 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(x.dot(&z), 0.0, epsilon = 1.0e-3);

    // Right-handedness is preserved (determinant ~ +1)
    assert_relative_eq!(x.cross(&y).dot(&z), 1.0, epsilon = 1.0e-3);
}

#[test]
fn test_transform_round_trip() {
    let t = Transform::new(
        Vector3::new(10.0, -4.0, 2.0),
        Quaternion::from_axis_angle(Vector3::unit_y(), 0.7),
    );

    let p = Vector3::new(1.0, 2.0, 3.0);
    let back = t.inverse().transform_point(t.transform_point(p));

    assert_relative_eq!(back.x, p.x, epsilon = 1.0e-4);
    assert_relative_eq!(back.y, p.y, epsilon = 1.0e-4);
    assert_relative_eq!(back.z, p.z, epsilon = 1.0e-4);
}

#[test]
fn test_nalgebra_conversions() {
    let v = Vector3::new(1.5, -2.5, 3.5);
    assert_eq!(Vector3::from_nalgebra(&v.to_nalgebra()), v);

    let q = Quaternion::from_axis_angle(Vector3::unit_x(), 0.9);
    let round_trip = Quaternion::from_nalgebra(&q.to_nalgebra());
    assert_relative_eq!(round_trip.w, q.w, epsilon = 1.0e-6);
    assert_relative_eq!(round_trip.x, q.x, epsilon = 1.0e-6);
}
