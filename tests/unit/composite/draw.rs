use image::Rgba;

use super::*;

const BG: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn wide_shot_covers_tall_slot_without_bleeding() {
    let mut canvas = RgbaImage::from_pixel(140, 220, BG);
    let mut shot = RgbaImage::from_pixel(200, 100, Rgba([0, 0, 255, 255]));
    for y in 0..100 {
        for x in 0..100 {
            shot.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }

    draw_cover(&mut canvas, &shot, PixelRect::new(0, 0, 100, 200));

    for y in 0..220 {
        for x in 0..140 {
            let px = canvas.get_pixel(x, y).0;
            if x < 100 && y < 200 {
                assert_ne!(px, BG.0, "uncovered slot pixel at ({x},{y})");
            } else {
                assert_eq!(px, BG.0, "bleed outside slot at ({x},{y})");
            }
        }
    }
    // Center crop: left half of the slot shows the red half of the shot.
    assert_eq!(canvas.get_pixel(10, 100).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(90, 100).0, [0, 0, 255, 255]);
}

#[test]
fn uniform_shot_is_reproduced_exactly() {
    let mut canvas = RgbaImage::from_pixel(50, 50, BG);
    let shot = RgbaImage::from_pixel(7, 3, Rgba([12, 200, 34, 255]));
    draw_cover(&mut canvas, &shot, PixelRect::new(5, 10, 30, 20));
    assert_eq!(canvas.get_pixel(5, 10).0, [12, 200, 34, 255]);
    assert_eq!(canvas.get_pixel(34, 29).0, [12, 200, 34, 255]);
    assert_eq!(canvas.get_pixel(35, 29).0, BG.0);
}

#[test]
fn slot_past_canvas_edge_is_clipped() {
    let mut canvas = RgbaImage::from_pixel(20, 20, BG);
    let shot = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    draw_cover(&mut canvas, &shot, PixelRect::new(15, 15, 30, 30));
    assert_eq!(canvas.get_pixel(19, 19).0, [0, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(14, 19).0, BG.0);
}

#[test]
fn sample_premultiplies() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 0, 128]));
    let s = sample_premul(&img, 0.5, 0.5);
    assert_eq!(s[3], 128);
    assert_eq!(s[0], 100);
}
