use colshape3d::math::Vector;
use colshape3d::shape::{Ball, Cuboid, Ellipsoid, Shape, ShapeType, TypedShape};
use num_traits::FromPrimitive;

fn shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Ball::new(1.0)),
        Box::new(Cuboid::new(Vector::new(1.0, 2.0, 3.0))),
        Box::new(Ellipsoid::new(1.0, 2.0, 3.0)),
    ]
}

#[test]
fn shape_type_tags_are_stable() {
    let expected = [ShapeType::Ball, ShapeType::Cuboid, ShapeType::Ellipsoid];

    for (shape, tag) in shapes().iter().zip(expected) {
        assert_eq!(shape.shape_type(), tag);
        assert_eq!(ShapeType::from_u8(tag as u8), Some(tag));
    }

    assert_eq!(ShapeType::from_u8(2), Some(ShapeType::Ellipsoid));
    assert_eq!(ShapeType::from_u8(200), None);
}

#[test]
fn downcast_to_the_concrete_shape() {
    let shapes = shapes();

    assert!(shapes[0].as_ball().is_some());
    assert!(shapes[0].as_ellipsoid().is_none());
    assert!(shapes[1].as_cuboid().is_some());
    assert_eq!(
        shapes[2].as_ellipsoid().map(|e| *e.radii()),
        Some(Vector::new(1.0, 2.0, 3.0))
    );
    assert!(shapes.iter().all(|s| s.is_convex() && s.as_support_map().is_some()));

    match shapes[2].as_typed_shape() {
        TypedShape::Ellipsoid(e) => assert!(!e.is_ball()),
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn resize_through_a_trait_object() {
    let mut shapes = shapes();
    let shape = &mut shapes[2];
    let _ = shape.update_local_bounds();
    assert!(shape.local_bounds().is_some());

    if let Some(ellipsoid) = shape.as_ellipsoid_mut() {
        ellipsoid.set_radii(Vector::new(2.0, 2.0, 2.0));
    }

    assert!(shape.local_bounds().is_none());
    let bounds = shape.update_local_bounds();
    assert_eq!(bounds.aabb.half_extents(), Vector::repeat(2.0));
}
