use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Utilities for preparing YOLO object-detection datasets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON). Defaults to settings.json in the user config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write a timestamped log file into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw the boxes of every label file onto its matching image
    Draw {
        /// Folder containing the images
        #[arg(long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Folder containing the YOLO label files
        #[arg(long, value_name = "DIR")]
        labels: Option<PathBuf>,

        /// Folder the annotated images are written to
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Image extensions to pick up, comma separated
        #[arg(long = "image-ext", value_delimiter = ',', value_name = "EXT")]
        image_extensions: Vec<String>,
    },

    /// Split a label folder into train.txt, val.txt and test.txt
    Split {
        /// Folder containing the label files
        #[arg(long, value_name = "DIR")]
        labels: Option<PathBuf>,

        /// Folder the list files are written to
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Fraction of files assigned to train (0.0 - 1.0)
        #[arg(long, value_parser = validate_ratio, value_name = "RATIO")]
        train_ratio: Option<f64>,

        /// Fraction of files assigned to validation (0.0 - 1.0)
        #[arg(long, value_parser = validate_ratio, value_name = "RATIO")]
        val_ratio: Option<f64>,

        /// Seed for a reproducible shuffle; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Rename matching files to NAME-COUNTER.ext
    ///
    /// Like `draw`, exits non-zero if any file failed; the files that could
    /// be renamed are renamed either way.
    Rename {
        /// Folder whose files are renamed
        #[arg(long, env = "FOLDER_PATH", value_name = "DIR")]
        folder: PathBuf,

        /// Extensions to rename, comma separated
        #[arg(long, env = "EXTENSIONS", value_delimiter = ',', value_name = "EXT")]
        extensions: Vec<String>,

        /// Base name of the renamed files
        #[arg(long, env = "NAME_FORMAT", value_name = "NAME")]
        name: String,

        /// Counter given to the first file; each following file adds one
        #[arg(long, default_value_t = 0)]
        start: u64,
    },

    /// Print how many images and label files are present
    Count {
        /// Folder containing the images
        #[arg(long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Folder containing the label files
        #[arg(long, value_name = "DIR")]
        labels: Option<PathBuf>,
    },

    /// Write the effective settings to the settings file
    InitConfig,
}

/// Accept a ratio in `[0.0, 1.0]`
fn validate_ratio(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("RATIO must be between 0.0 and 1.0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio("0.5").is_ok());
        assert!(validate_ratio("1.0").is_ok());
        assert!(validate_ratio("0.0").is_ok());
        assert!(validate_ratio("-0.1").is_err());
        assert!(validate_ratio("1.1").is_err());
        assert!(validate_ratio("abc").is_err());
    }

    #[test]
    fn test_parse_split_with_seed() {
        let cli = Cli::try_parse_from([
            "yolo-dataset-utils",
            "split",
            "--labels",
            "data/labels",
            "--train-ratio",
            "0.8",
            "--seed",
            "42",
        ])
        .unwrap();

        match cli.command {
            Command::Split {
                labels,
                train_ratio,
                val_ratio,
                seed,
                ..
            } => {
                assert_eq!(labels, Some(PathBuf::from("data/labels")));
                assert_eq!(train_ratio, Some(0.8));
                assert_eq!(val_ratio, None);
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_draw_extension_list() {
        let cli = Cli::try_parse_from([
            "yolo-dataset-utils",
            "--log-dir",
            "logs",
            "draw",
            "--image-ext",
            "jpg,png",
        ])
        .unwrap();

        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
        match cli.command {
            Command::Draw {
                image_extensions, ..
            } => assert_eq!(image_extensions, vec!["jpg", "png"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rename_flags() {
        let cli = Cli::try_parse_from([
            "yolo-dataset-utils",
            "rename",
            "--folder",
            "raw",
            "--extensions",
            "jpg,JPEG",
            "--name",
            "frame",
            "--start",
            "5",
        ])
        .unwrap();

        match cli.command {
            Command::Rename {
                folder,
                extensions,
                name,
                start,
            } => {
                assert_eq!(folder, PathBuf::from("raw"));
                assert_eq!(extensions, vec!["jpg", "JPEG"]);
                assert_eq!(name, "frame");
                assert_eq!(start, 5);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
