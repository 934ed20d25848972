mod label;
mod pairing;
mod split;

pub use label::{parse_label_file, parse_label_line};
pub use pairing::{pair_images_with_labels, ImageLabelPair, Pairing};
pub use split::{
    get_file_names, save_to_file, split_dataset, split_label_directory, DatasetSplit,
    SplitRatios, SplitResult, SplitSummary,
};
