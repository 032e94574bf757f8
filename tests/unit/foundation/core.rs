use super::*;

#[test]
fn pixel_rect_edges_are_exclusive() {
    let r = PixelRect::new(2, 3, 4, 5);
    assert_eq!(r.right(), 6);
    assert_eq!(r.bottom(), 8);
    assert!(r.fits_within(6, 8));
    assert!(!r.fits_within(5, 8));
    assert!(!r.fits_within(6, 7));
}

#[test]
fn pixel_rect_center_floors() {
    assert_eq!(PixelRect::new(100, 100, 600, 400).center(), (400, 300));
    assert_eq!(PixelRect::new(0, 0, 5, 3).center(), (2, 1));
}

#[test]
fn clamp_to_trims_and_rejects_outside() {
    let r = PixelRect::new(90, 40, 20, 20);
    assert_eq!(r.clamp_to(100, 50), Some(PixelRect::new(90, 40, 10, 10)));
    assert_eq!(PixelRect::new(100, 0, 5, 5).clamp_to(100, 50), None);
    assert!(r.fits_within(110, 60));
    assert!(!r.fits_within(100, 60));
}

#[test]
fn norm_rect_round_trips_through_pixels() {
    let px = PixelRect::new(100, 100, 600, 400);
    let n = NormRect::from_pixels(px, 800, 1200);
    assert!((n.nx - 0.125).abs() < 1e-12);
    assert!((n.nh - 400.0 / 1200.0).abs() < 1e-12);
    assert_eq!(n.to_pixels(800, 1200), Some(px));
    assert_eq!(n.to_pixels(400, 600), Some(PixelRect::new(50, 50, 300, 200)));
}

#[test]
fn norm_rect_zero_size_projects_to_none() {
    let n = NormRect {
        nx: 0.5,
        ny: 0.5,
        nw: 0.0,
        nh: 0.2,
    };
    assert_eq!(n.to_pixels(100, 100), None);
}

#[test]
fn premul_from_straight() {
    assert_eq!(
        Rgba8Premul::from_straight_rgba(255, 0, 100, 128).to_array(),
        [128, 0, 50, 128]
    );
    assert_eq!(
        Rgba8Premul::from_straight([10, 20, 30, 255]).to_array(),
        [10, 20, 30, 255]
    );
}
