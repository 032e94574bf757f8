use super::*;

#[test]
fn wide_source_in_tall_slot_scales_by_height() {
    let slot = Rect::new(0.0, 0.0, 100.0, 200.0);
    let p = cover_placement(slot, 200, 100);
    assert_eq!(p.scale, 2.0);
    assert_eq!(p.dest, Rect::new(-150.0, 0.0, 250.0, 200.0));
    assert_eq!(p.dest.union(slot), p.dest);
}

#[test]
fn matching_aspect_fills_exactly() {
    let slot = Rect::new(100.0, 100.0, 700.0, 500.0);
    let p = cover_placement(slot, 600, 400);
    assert_eq!(p.scale, 1.0);
    assert_eq!(p.dest, slot);
}

#[test]
fn source_point_maps_pixel_centers() {
    let slot = Rect::new(10.0, 20.0, 30.0, 40.0);
    let p = cover_placement(slot, 10, 10);
    assert_eq!(p.scale, 2.0);
    let s = p.source_point(10, 20);
    assert!((s.x - -0.25).abs() < 1e-9);
    assert!((s.y - -0.25).abs() < 1e-9);
    let s = p.source_point(29, 39);
    assert!((s.x - 9.25).abs() < 1e-9);
    assert!((s.y - 9.25).abs() < 1e-9);
}
