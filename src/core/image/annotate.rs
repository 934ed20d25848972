use image::{DynamicImage, RgbImage};
use std::path::Path;
use tracing::{error, info, warn};

use super::draw::draw_bounding_box_with_thickness;
use super::io::{load_image, save_image};
use crate::config::AppConfig;
use crate::core::bbox::YoloBox;
use crate::core::dataset::{pair_images_with_labels, parse_label_file};
use crate::core::operations::retrieve_files;

/// Counts reported after annotating a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawSummary {
    pub processed: usize,
    pub failed: usize,
    pub unmatched_labels: usize,
}

/// Draw every box onto `image`, converting from normalized coordinates with
/// the image's own dimensions.
pub fn annotate_image(image: &mut RgbImage, boxes: &[YoloBox], thickness: i32) {
    let (img_width, img_height) = image.dimensions();
    for bbox in boxes {
        let pixel_box = bbox.to_pixel(img_width, img_height);
        draw_bounding_box_with_thickness(image, bbox.class_id, pixel_box, thickness);
    }
}

/// Load an image and its label file, draw the boxes and save the result into
/// `output_folder` under the image's file name.
///
/// Returns `false` if the image or label cannot be read or the save fails.
pub fn process_image_and_labels(
    image_path: &Path,
    label_path: &Path,
    output_folder: &Path,
    thickness: i32,
) -> bool {
    let Some(image) = load_image(image_path) else {
        return false;
    };
    let Some(boxes) = parse_label_file(label_path) else {
        return false;
    };

    let mut canvas = image.to_rgb8();
    annotate_image(&mut canvas, &boxes, thickness);

    match save_image(&DynamicImage::ImageRgb8(canvas), output_folder, image_path) {
        Ok(_) => true,
        Err(e) => {
            error!("Failed to save annotated {:?}: {}", image_path, e);
            false
        }
    }
}

/// Annotate every image in `images_folder` that has a label file of the same
/// stem in `labels_folder`.
pub fn process_dataset(
    images_folder: &Path,
    labels_folder: &Path,
    output_folder: &Path,
    config: &AppConfig,
) -> DrawSummary {
    let images = retrieve_files(images_folder, config.image_extensions.as_slice());
    let labels = retrieve_files(labels_folder, config.label_extensions.as_slice());
    info!(
        "Found {} images and {} labels",
        images.len(),
        labels.len()
    );

    let pairing = pair_images_with_labels(&images, &labels);
    for orphan in &pairing.orphan_labels {
        warn!("No image found for label {:?}", orphan);
    }

    let mut summary = DrawSummary {
        unmatched_labels: pairing.orphan_labels.len(),
        ..Default::default()
    };
    for pair in &pairing.pairs {
        if process_image_and_labels(
            &pair.image_path,
            &pair.label_path,
            output_folder,
            config.box_thickness,
        ) {
            summary.processed += 1;
        } else {
            summary.failed += 1;
        }
    }

    info!(
        "Drawing complete. Processed: {}, Failed: {}, Unmatched labels: {}",
        summary.processed, summary.failed, summary.unmatched_labels
    );
    summary
}
