/// A bounding box in YOLO format: class id plus center and size normalized
/// to the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloBox {
    pub class_id: u32,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

/// A bounding box in pixel space, top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl PixelBox {
    /// `x_max - x_min`, saturating for boxes spanning most of the `i32` range
    pub fn width(&self) -> i32 {
        self.x_max.saturating_sub(self.x_min)
    }

    pub fn height(&self) -> i32 {
        self.y_max.saturating_sub(self.y_min)
    }
}

impl YoloBox {
    /// Convert to pixel corners for an image of the given size.
    pub fn to_pixel(&self, img_width: u32, img_height: u32) -> PixelBox {
        yolo_to_pixel(
            self.x_center,
            self.y_center,
            self.width,
            self.height,
            img_width,
            img_height,
        )
    }
}

/// Convert a normalized center box to pixel corners.
///
/// Each corner is `(center +/- size / 2) * dimension`, truncated toward zero.
/// Inputs are not range-checked: values outside `[0, 1]` simply produce
/// coordinates outside the image.
pub fn yolo_to_pixel(
    center_x: f64,
    center_y: f64,
    bbox_width: f64,
    bbox_height: f64,
    img_width: u32,
    img_height: u32,
) -> PixelBox {
    let (half_width, half_height) = (bbox_width / 2.0, bbox_height / 2.0);
    let img_width = img_width as f64;
    let img_height = img_height as f64;

    PixelBox {
        x_min: ((center_x - half_width) * img_width) as i32,
        y_min: ((center_y - half_height) * img_height) as i32,
        x_max: ((center_x + half_width) * img_width) as i32,
        y_max: ((center_y + half_height) * img_height) as i32,
    }
}
