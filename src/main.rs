mod cli;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};

use cli::{Cli, Command};
use yolo_dataset_utils::config::{AppConfig, Settings};
use yolo_dataset_utils::core::{process_dataset, rename_files, retrieve_files, split_label_directory};
use yolo_dataset_utils::logging::setup_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_dir.as_deref());

    let settings = Settings::load(cli.config.as_deref());
    let config = settings.to_config();

    match cli.command {
        Command::Draw {
            images,
            labels,
            output,
            image_extensions,
        } => {
            let mut config = config;
            if !image_extensions.is_empty() {
                config.image_extensions = image_extensions;
            }
            let images = images.unwrap_or_else(|| config.images_folder.clone());
            let labels = labels.unwrap_or_else(|| config.labels_folder.clone());
            let output = output.unwrap_or_else(|| config.output_folder.clone());

            info!("Drawing boxes from {:?} onto {:?}", labels, images);
            let summary = process_dataset(&images, &labels, &output, &config);
            if summary.failed > 0 {
                error!("{} images could not be annotated", summary.failed);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }

        Command::Split {
            labels,
            output,
            train_ratio,
            val_ratio,
            seed,
        } => {
            let labels = labels.unwrap_or_else(|| config.labels_folder.clone());
            let output = output.unwrap_or_else(|| config.split_output_folder.clone());
            let mut ratios = config.split_ratios;
            if let Some(train) = train_ratio {
                ratios.train = train;
            }
            if let Some(val) = val_ratio {
                ratios.val = val;
            }
            if ratios.train + ratios.val > 1.0 {
                warn!(
                    "train ({}) + val ({}) exceed 1.0; val will be truncated",
                    ratios.train, ratios.val
                );
            }

            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };

            match split_label_directory(&labels, &output, ratios, rng.as_mut()) {
                Ok(summary) => {
                    println!(
                        "Total: {}, train: {}, valid: {}, test: {}",
                        summary.total, summary.train, summary.val, summary.test
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Failed to write split lists: {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Command::Rename {
            folder,
            extensions,
            name,
            start,
        } => {
            let extensions = if extensions.is_empty() {
                config.image_extensions.clone()
            } else {
                extensions
            };

            let summary = rename_files(&folder, &name, extensions.as_slice(), start);
            println!("Renamed: {}, Failed: {}", summary.renamed, summary.failed);
            if summary.failed > 0 {
                error!("{} files could not be renamed", summary.failed);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }

        Command::Count { images, labels } => {
            let images = images.unwrap_or_else(|| config.images_folder.clone());
            let labels = labels.unwrap_or_else(|| config.labels_folder.clone());

            let image_count = retrieve_files(&images, config.image_extensions.as_slice()).len();
            let label_count = retrieve_files(&labels, config.label_extensions.as_slice()).len();
            println!("{} {}", image_count, label_count);
            ExitCode::SUCCESS
        }

        Command::InitConfig => match cli.config.or_else(Settings::default_path) {
            Some(path) => init_config(&path, &config),
            None => {
                error!("Could not determine config directory; pass --config");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_config(path: &Path, config: &AppConfig) -> ExitCode {
    match Settings::from_config(config).save_to(path) {
        Ok(()) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to write settings: {}", e);
            ExitCode::FAILURE
        }
    }
}
