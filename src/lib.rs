//! Dataset preparation utilities for YOLO object-detection workflows
//!
//! - converting normalized center boxes to pixel corner boxes
//! - drawing label boxes onto images
//! - bulk renaming of files
//! - splitting a label directory into train/val/test lists

pub mod config;
pub mod core;
pub mod logging;

pub use crate::config::{AppConfig, Settings};
pub use crate::core::bbox::{yolo_to_pixel, PixelBox, YoloBox};
pub use crate::core::dataset::{split_dataset, DatasetSplit, SplitRatios, SplitResult};
