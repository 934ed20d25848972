use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::core::bbox::PixelBox;

/// Line thickness of drawn boxes, in pixels
pub const BOX_THICKNESS: i32 = 2;

/// Deterministic color for a class id, no lookup table needed.
pub fn class_color(class_id: u32) -> Rgb<u8> {
    let id = class_id as u64;
    Rgb([
        ((id * 37) % 256) as u8,
        ((id * 73) % 256) as u8,
        ((id * 17) % 256) as u8,
    ])
}

/// Draw `bbox` as a hollow rectangle in the class color.
///
/// Corners are inclusive. The stroke grows inward, and anything outside the
/// image is clipped. Inverted boxes are ignored.
pub fn draw_bounding_box(image: &mut RgbImage, class_id: u32, bbox: PixelBox) {
    draw_bounding_box_with_thickness(image, class_id, bbox, BOX_THICKNESS);
}

pub fn draw_bounding_box_with_thickness(
    image: &mut RgbImage,
    class_id: u32,
    bbox: PixelBox,
    thickness: i32,
) {
    if bbox.x_max < bbox.x_min || bbox.y_max < bbox.y_min {
        return;
    }

    let color = class_color(class_id);
    let thickness = thickness.max(1) as i64;

    // Edges further out than one stroke are invisible, so pull them in to
    // keep line lengths bounded by the image size.
    let clip = |v: i32, extent: u32| (v as i64).clamp(-thickness, extent as i64 - 1 + thickness);
    let x_min = clip(bbox.x_min, image.width());
    let x_max = clip(bbox.x_max, image.width());
    let y_min = clip(bbox.y_min, image.height());
    let y_max = clip(bbox.y_max, image.height());

    for t in 0..thickness {
        let width = x_max - x_min + 1 - 2 * t;
        let height = y_max - y_min + 1 - 2 * t;
        if width <= 0 || height <= 0 {
            break;
        }

        let rect = Rect::at((x_min + t) as i32, (y_min + t) as i32)
            .of_size(width as u32, height as u32);
        draw_hollow_rect_mut(image, rect, color);
    }
}
