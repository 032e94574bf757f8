use super::*;

#[test]
fn small_rasters_keep_identity_scale() {
    let s = working_scale(1000, 640, 1000);
    assert!(s.is_identity());
    assert_eq!((s.width, s.height), (1000, 640));
    assert_eq!(s.to_native(37), 37);
}

#[test]
fn large_rasters_fit_longest_side() {
    let s = working_scale(800, 1200, 1000);
    assert_eq!((s.width, s.height), (666, 1000));
    assert!((s.scale - 1000.0 / 1200.0).abs() < 1e-12);

    let s = working_scale(4000, 3000, 1000);
    assert_eq!((s.width, s.height), (1000, 750));
    assert_eq!(s.to_native(250), 1000);
}

#[test]
fn degenerate_strip_keeps_one_pixel() {
    let s = working_scale(5000, 1, 1000);
    assert_eq!((s.width, s.height), (1000, 1));
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
}
