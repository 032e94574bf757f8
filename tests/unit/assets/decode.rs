use std::io::Cursor;

use super::*;

fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let decoded = decode_rgba(&png_bytes(img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn garbage_bytes_are_decode_errors() {
    let err = decode_rgba(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PhotoslotError::Decode(_)));
}

#[test]
fn missing_file_is_decode_error() {
    let err = read_rgba(Path::new("does/not/exist.png")).unwrap_err();
    assert!(matches!(err, PhotoslotError::Decode(_)));
    assert!(err.to_string().contains("exist.png"));
}

#[test]
fn premultiply_zeroes_transparent_and_scales_partial() {
    let mut px = vec![100u8, 50, 200, 128, 9, 9, 9, 0, 7, 8, 9, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128,
            0,
            0,
            0,
            0,
            7,
            8,
            9,
            255
        ]
    );
}
