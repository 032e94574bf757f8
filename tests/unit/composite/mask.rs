use image::Rgba;

use super::*;

fn white_slot_frame() -> FrameImage {
    let mut img = RgbaImage::from_pixel(60, 40, Rgba([255, 255, 255, 255]));
    for y in 0..40 {
        for x in 0..60 {
            if !(10..30).contains(&x) || !(10..30).contains(&y) {
                img.put_pixel(x, y, Rgba([200, 20, 20, 255]));
            }
        }
    }
    // White design element outside the slot.
    img.put_pixel(50, 5, Rgba([255, 255, 255, 255]));
    FrameImage::from_rgba(img).unwrap()
}

#[test]
fn opaque_white_center_requires_masking() {
    let frame = white_slot_frame();
    assert!(needs_masking(&frame, PixelRect::new(10, 10, 20, 20), 250, 240));
}

#[test]
fn transparent_or_colored_center_does_not() {
    let mut img = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 0]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    let frame = FrameImage::from_rgba(img).unwrap();
    assert!(!needs_masking(&frame, PixelRect::new(5, 5, 10, 10), 250, 240));
    assert!(!needs_masking(&frame, PixelRect::new(0, 0, 1, 1), 250, 240));
    assert!(!needs_masking(&frame, PixelRect::new(100, 100, 4, 4), 250, 240));
}

#[test]
fn masking_is_scoped_to_slots() {
    let frame = white_slot_frame();
    let mut copy = frame.working_copy();
    mask_white_in_slots(&mut copy, &[PixelRect::new(10, 10, 20, 20)], 240);
    assert_eq!(copy.get_pixel(15, 15).0[3], 0);
    assert_eq!(copy.get_pixel(29, 29).0[3], 0);
    assert_eq!(copy.get_pixel(30, 30).0, [200, 20, 20, 255]);
    assert_eq!(copy.get_pixel(50, 5).0, [255, 255, 255, 255]);
    assert_eq!(frame.pixel(15, 15), Some([255, 255, 255, 255]));
}

#[test]
fn out_of_bounds_slots_are_clamped() {
    let frame = white_slot_frame();
    let mut copy = frame.working_copy();
    mask_white_in_slots(&mut copy, &[PixelRect::new(40, 0, 100, 100)], 240);
    assert_eq!(copy.get_pixel(50, 5).0[3], 0);
}
