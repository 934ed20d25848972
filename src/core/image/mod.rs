mod annotate;
mod draw;
mod io;

pub use annotate::{annotate_image, process_dataset, process_image_and_labels, DrawSummary};
pub use draw::{class_color, draw_bounding_box, draw_bounding_box_with_thickness, BOX_THICKNESS};
pub use io::{load_image, save_image};
