use super::{random_pose, random_radii};
use approx::assert_relative_eq;
use colshape3d::bounding_volume::details::{
    local_support_map_aabb, point_cloud_aabb, support_map_aabb,
};
use colshape3d::bounding_volume::{Aabb, BoundingVolume};
use colshape3d::math::{Isometry, Point, Real, Vector};
use colshape3d::shape::{Ellipsoid, Shape, SupportMap};

#[test]
fn round_ellipsoid_local_bounds() {
    for r in [0.25, 1.0, 3.0] {
        let mut ellipsoid = Ellipsoid::new(r, r, r);
        let bounds = *ellipsoid.update_local_bounds();

        assert_eq!(bounds.center, Point::origin());
        assert_eq!(bounds.aabb.mins, Point::new(-r, -r, -r));
        assert_eq!(bounds.aabb.maxs, Point::new(r, r, r));
        // Distance from the center to a corner of the box.
        assert_relative_eq!(bounds.radius, r * (3.0 as Real).sqrt(), max_relative = 1.0e-6);
    }
}

#[test]
fn local_bounds_are_idempotent() {
    let mut ellipsoid = Ellipsoid::new(0.3, 1.7, 2.9);
    let first = *ellipsoid.update_local_bounds();
    let second = *ellipsoid.update_local_bounds();

    assert_eq!(first, second);
    assert_eq!(ellipsoid.local_bounds(), Some(&first));
    assert_eq!(first.aabb, ellipsoid.compute_local_aabb());
}

#[test]
fn resizing_requires_a_new_update() {
    let mut ellipsoid = Ellipsoid::new(1.0, 1.0, 1.0);
    let _ = ellipsoid.update_local_bounds();
    ellipsoid.set_radii(Vector::new(4.0, 1.0, 1.0));

    assert!(ellipsoid.local_bounds().is_none());
    let bounds = ellipsoid.update_local_bounds();
    assert_eq!(bounds.aabb.maxs, Point::new(4.0, 1.0, 1.0));
}

#[test]
fn bound_vertices_enclose_the_ellipsoid() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..500 {
        let ellipsoid = Ellipsoid::from_radii(random_radii(&mut rng));
        let pos = random_pose(&mut rng);

        for vtx in ellipsoid.bound_vertices(&pos) {
            let local = pos.inverse_transform_point(&vtx);
            assert!(
                ellipsoid.local_implicit_value(&local) >= 1.0 - 1.0e-4,
                "vertex {:?} of {:?} is inside the ellipsoid",
                local,
                ellipsoid
            );
        }
    }
}

#[test]
fn ellipsoid_aabb_is_tight() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let ellipsoid = Ellipsoid::from_radii(random_radii(&mut rng));
        let pos = random_pose(&mut rng);

        let aabb = ellipsoid.compute_aabb(&pos);
        let expected = support_map_aabb(&pos, &ellipsoid);
        assert_relative_eq!(aabb, expected, epsilon = 1.0e-4);

        // Surface points in random directions stay inside.
        let loose = aabb.loosened(1.0e-4);
        for _ in 0..10 {
            let dir = Vector::from_fn(|_, _| rng.rand_float() as Real - 0.5);
            assert!(loose.contains_local_point(&ellipsoid.support_point(&pos, &dir)));
        }
    }
}

#[test]
fn ellipsoid_aabb_half_extents_closed_form() {
    let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
    let pos = Isometry::new(Vector::new(-1.0, 0.5, 2.0), Vector::new(0.4, -0.2, 0.9));
    let rot = pos.rotation.to_rotation_matrix().into_inner();
    let radii = ellipsoid.radii();

    let expected = Vector::from_fn(|i, _| {
        (0..3)
            .map(|k| rot[(i, k)] * rot[(i, k)] * radii[k] * radii[k])
            .sum::<Real>()
            .sqrt()
    });

    let aabb: Aabb = ellipsoid.compute_aabb(&pos);
    assert_relative_eq!(aabb.center(), Point::new(-1.0, 0.5, 2.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.half_extents(), expected, epsilon = 1.0e-5);
}

#[test]
fn bound_polytope_aabb_contains_the_tight_aabb() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let ellipsoid = Ellipsoid::from_radii(random_radii(&mut rng));
        let pos = random_pose(&mut rng);

        let tight = ellipsoid.compute_aabb(&pos);
        let polytope = ellipsoid.bound_polytope_aabb(&pos);
        assert!(polytope.loosened(1.0e-4).contains(&tight));

        let world_vertices = ellipsoid.bound_vertices(&pos);
        let from_world = point_cloud_aabb(&Isometry::identity(), &world_vertices);
        assert_relative_eq!(polytope, from_world, epsilon = 1.0e-4);
    }
}

#[test]
fn local_support_map_aabb_matches_the_radii() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..50 {
        let ellipsoid = Ellipsoid::from_radii(random_radii(&mut rng));
        assert_relative_eq!(
            local_support_map_aabb(&ellipsoid),
            ellipsoid.compute_local_aabb(),
            epsilon = 1.0e-5
        );
    }
}
