use approx::assert_relative_eq;
use colshape3d::bounding_volume::{compute_bv, Aabb, BoundingSphere, BoundingVolume, ComputeBv, Obb};
use colshape3d::math::{Isometry, Point, Real, Vector};
use colshape3d::shape::{Ball, Cuboid, Ellipsoid, Shape};

#[test]
fn compute_bv_selects_the_bounding_volume() {
    let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
    let pos = Isometry::new(Vector::new(3.0, -1.0, 0.0), Vector::new(0.0, 0.7, 0.0));

    let aabb: Aabb = compute_bv(&ellipsoid, &pos);
    let sphere: BoundingSphere = compute_bv(&ellipsoid, &pos);
    let obb: Obb = compute_bv(&ellipsoid, &pos);

    assert_eq!(aabb, ellipsoid.compute_aabb(&pos));
    assert_eq!(*sphere.center(), Point::new(3.0, -1.0, 0.0));
    assert_eq!(sphere.radius(), 3.0);
    assert_eq!(obb.half_extents, Vector::new(1.0, 2.0, 3.0));

    // The box of the OBB is never tighter than the closed-form AABB.
    assert!(obb.aabb().loosened(1.0e-5).contains(&aabb));
}

#[test]
fn compute_bv_with_identity_matches_local_aabb() {
    let ball = Ball::new(2.0);
    let cuboid = Cuboid::new(Vector::new(1.0, 2.0, 3.0));
    let ellipsoid = Ellipsoid::new(3.0, 2.0, 1.0);
    let identity = Isometry::identity();

    let aabbs: [Aabb; 3] = [
        compute_bv(&ball, &identity),
        compute_bv(&cuboid, &identity),
        compute_bv(&ellipsoid, &identity),
    ];

    assert_eq!(aabbs[0], ball.compute_local_aabb());
    assert_eq!(aabbs[1], cuboid.compute_local_aabb());
    assert_eq!(aabbs[2], ellipsoid.compute_local_aabb());
    assert_eq!(aabbs[2].maxs, Point::new(3.0, 2.0, 1.0));
}

#[test]
fn cuboid_and_ball_aabbs_under_rotation() {
    let pos = Isometry::rotation(Vector::z() * core::f64::consts::FRAC_PI_4 as Real);
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let aabb: Aabb = compute_bv(&cuboid, &pos);
    let diag = (2.0 as Real).sqrt();

    assert_relative_eq!(aabb.maxs, Point::new(diag, diag, 1.0), epsilon = 1.0e-5);

    let ball: Aabb = compute_bv(&Ball::new(1.5), &pos);
    assert_relative_eq!(ball.half_extents(), Vector::repeat(1.5), epsilon = 1.0e-6);
}

/// A bounding volume only known to this test: the largest distance from the origin of the
/// frame to the shape.
#[derive(Debug, PartialEq)]
struct Reach(Real);

impl ComputeBv<Reach> for Ellipsoid {
    fn compute_bv(&self, pos: &Isometry<Real>) -> Reach {
        Reach(pos.translation.vector.norm() + self.radii().max())
    }
}

#[test]
fn downstream_bounding_volumes_can_be_registered() {
    let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
    let pos = Isometry::translation(3.0, 4.0, 0.0);

    assert_eq!(compute_bv::<Reach, _>(&ellipsoid, &pos), Reach(8.0));
}
