use image::Rgba;

use super::*;

const HOLE: Rgba<u8> = Rgba([0, 0, 0, 0]);
const INK: Rgba<u8> = Rgba([20, 40, 60, 255]);

fn transparent() -> PlaceholderPredicate {
    PlaceholderPredicate::Transparent { below: 50 }
}

#[test]
fn separate_rectangles_are_separate_components() {
    let mut img = RgbaImage::from_pixel(10, 6, INK);
    for y in 1..3 {
        for x in 1..4 {
            img.put_pixel(x, y, HOLE);
        }
    }
    for y in 2..5 {
        for x in 6..9 {
            img.put_pixel(x, y, HOLE);
        }
    }

    let comps = label_components(&img, transparent());
    assert_eq!(comps.len(), 2);
    assert_eq!(
        comps[0],
        Component {
            min_x: 1,
            min_y: 1,
            max_x: 3,
            max_y: 2,
            count: 6
        }
    );
    assert_eq!((comps[1].min_x, comps[1].min_y), (6, 2));
    assert_eq!((comps[1].width(), comps[1].height()), (3, 3));
    assert_eq!(comps[1].count, 9);
}

#[test]
fn diagonal_neighbors_are_not_connected() {
    let mut img = RgbaImage::from_pixel(3, 3, INK);
    img.put_pixel(0, 0, HOLE);
    img.put_pixel(1, 1, HOLE);
    img.put_pixel(2, 2, HOLE);
    assert_eq!(label_components(&img, transparent()).len(), 3);
}

#[test]
fn concave_region_is_one_component_with_full_bbox() {
    // U shape: left column, bottom row, right column.
    let mut img = RgbaImage::from_pixel(5, 4, INK);
    for y in 0..4 {
        img.put_pixel(0, y, HOLE);
        img.put_pixel(4, y, HOLE);
    }
    for x in 0..5 {
        img.put_pixel(x, 3, HOLE);
    }
    let comps = label_components(&img, transparent());
    assert_eq!(comps.len(), 1);
    assert_eq!((comps[0].width(), comps[0].height()), (5, 4));
    assert_eq!(comps[0].count, 11);
}

#[test]
fn no_matching_pixels_yields_nothing() {
    let img = RgbaImage::from_pixel(8, 8, INK);
    assert!(label_components(&img, transparent()).is_empty());
    assert!(label_components(&img, PlaceholderPredicate::White { above: 240 }).is_empty());
}
