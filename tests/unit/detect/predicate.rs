use super::*;

#[test]
fn transparent_threshold_is_strict() {
    let p = PlaceholderPredicate::Transparent { below: 50 };
    assert!(p.matches(&[0, 0, 0, 0]));
    assert!(p.matches(&[255, 255, 255, 49]));
    assert!(!p.matches(&[0, 0, 0, 50]));
    assert!(p.uses_alpha());
}

#[test]
fn white_threshold_is_strict_and_ignores_alpha() {
    let p = PlaceholderPredicate::White { above: 240 };
    assert!(p.matches(&[241, 250, 255, 255]));
    assert!(p.matches(&[255, 255, 255, 0]));
    assert!(!p.matches(&[240, 255, 255, 255]));
    assert!(!p.matches(&[255, 255, 10, 255]));
    assert!(!p.uses_alpha());
}

#[test]
fn alpha_variation_scan() {
    assert!(!has_alpha_variation(&[1, 2, 3, 255, 4, 5, 6, 255]));
    assert!(has_alpha_variation(&[1, 2, 3, 255, 4, 5, 6, 254]));
    assert!(!has_alpha_variation(&[]));
}
