use super::{icosahedron_uv, random_radii};
use approx::assert_relative_eq;
use colshape3d::math::{Isometry, Point, Real, Vector};
use colshape3d::shape::{Ellipsoid, Shape, ShapeType};
use core::f64::consts::PI;

#[test]
fn ellipsoid_volume_and_inertia_for_radii_1_2_3() {
    let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
    let pi = PI as Real;
    let volume = ellipsoid.compute_volume();

    assert_relative_eq!(volume, 8.0 * pi, max_relative = 1.0e-6);

    let inertia = ellipsoid.compute_moment_of_inertia();
    assert_relative_eq!(inertia[(0, 0)], 0.2 * 8.0 * pi * 13.0, max_relative = 1.0e-5);
    assert_relative_eq!(inertia[(1, 1)], 0.2 * 8.0 * pi * 10.0, max_relative = 1.0e-5);
    assert_relative_eq!(inertia[(2, 2)], 0.2 * 8.0 * pi * 5.0, max_relative = 1.0e-5);

    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                assert_eq!(inertia[(i, j)], 0.0);
            }
        }
    }

    let (u, v) = icosahedron_uv();
    let vertices = ellipsoid.bound_vertices(&Isometry::identity());
    assert_relative_eq!(vertices[4], Point::new(u, 2.0 * v, 0.0), epsilon = 1.0e-6);
    assert_eq!(ellipsoid.shape_type(), ShapeType::Ellipsoid);
}

#[test]
fn ellipsoid_inertia_is_a_valid_tensor() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let radii = random_radii(&mut rng);
        let ellipsoid = Ellipsoid::from_radii(radii);
        let volume = ellipsoid.compute_volume();
        let inertia = ellipsoid.compute_moment_of_inertia();
        let (ix, iy, iz) = (inertia[(0, 0)], inertia[(1, 1)], inertia[(2, 2)]);

        assert!(volume > 0.0);
        assert!(ix > 0.0 && iy > 0.0 && iz > 0.0);

        let tol = (ix + iy + iz) * 1.0e-5;
        assert!(ix + iy >= iz - tol);
        assert!(ix + iz >= iy - tol);
        assert!(iy + iz >= ix - tol);
    }
}

#[test]
fn round_ellipsoid_vertices_lie_on_a_sphere() {
    let (u, v) = icosahedron_uv();

    for r in [0.5, 1.0, 7.25] {
        let ellipsoid = Ellipsoid::new(r, r, r);
        let expected = r * (u * u + v * v).sqrt();

        for vtx in ellipsoid.bound_vertices(&Isometry::identity()) {
            assert_relative_eq!(vtx.coords.norm(), expected, max_relative = 1.0e-5);
        }
    }
}

#[test]
fn bound_vertices_follow_the_pose() {
    let ellipsoid = Ellipsoid::new(0.5, 1.0, 2.0);
    let pos = Isometry::new(Vector::new(1.0, 2.0, 3.0), Vector::new(0.1, 0.2, 0.3));
    let local = ellipsoid.bound_vertices(&Isometry::identity());
    let world = ellipsoid.bound_vertices(&pos);

    for (l, w) in local.iter().zip(world.iter()) {
        assert_relative_eq!(pos * l, *w, epsilon = 1.0e-5);
    }
}
