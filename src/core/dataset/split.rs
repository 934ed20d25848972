//! Random train/val/test partitioning of dataset identifiers.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::operations::{get_files, write_text_file, FileOpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSplit {
    Train,
    Val,
    Test,
}

impl DatasetSplit {
    pub const ALL: [DatasetSplit; 3] = [DatasetSplit::Train, DatasetSplit::Val, DatasetSplit::Test];

    pub fn as_str(&self) -> &str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Val => "val",
            DatasetSplit::Test => "test",
        }
    }

    /// Name of the list file written for this split, e.g. `train.txt`
    pub fn list_file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

/// Fractions of the dataset assigned to train and validation. Whatever is
/// left over goes to test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub train: f64,
    pub val: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.7,
            val: 0.2,
        }
    }
}

impl SplitRatios {
    pub fn test(&self) -> f64 {
        (1.0 - self.train - self.val).max(0.0)
    }
}

/// Three disjoint subsets whose union is the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult<T> {
    pub train: Vec<T>,
    pub val: Vec<T>,
    pub test: Vec<T>,
}

impl<T> SplitResult<T> {
    pub fn get(&self, split: DatasetSplit) -> &[T] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Val => &self.val,
            DatasetSplit::Test => &self.test,
        }
    }

    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }
}

/// Counts reported after splitting a label directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub total: usize,
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

/// Shuffle `items` with `rng` and cut them into train/val/test.
///
/// Train gets `floor(n * ratios.train)` items, val gets `floor(n * ratios.val)`
/// (clamped to what is left), test gets the rest. The sizes depend only on `n`
/// and the ratios; membership depends on the shuffle.
pub fn split_dataset<T, R>(mut items: Vec<T>, ratios: SplitRatios, rng: &mut R) -> SplitResult<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);

    let n = items.len();
    let train_len = ratio_len(n, ratios.train).min(n);
    let val_len = ratio_len(n, ratios.val).min(n - train_len);

    let test = items.split_off(train_len + val_len);
    let val = items.split_off(train_len);

    SplitResult {
        train: items,
        val,
        test,
    }
}

// Negative and NaN ratios saturate to zero in the cast.
fn ratio_len(n: usize, ratio: f64) -> usize {
    (n as f64 * ratio).floor() as usize
}

/// File names without extension of every regular file in `folder_path`,
/// sorted. A missing directory yields an empty list.
pub fn get_file_names(folder_path: &Path) -> Vec<String> {
    get_files(folder_path)
        .unwrap_or_default()
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect()
}

/// Write one identifier per line to `path`, creating parent directories.
pub fn save_to_file<S: AsRef<str>>(items: &[S], path: &Path) -> FileOpResult<()> {
    let mut contents = String::new();
    for item in items {
        contents.push_str(item.as_ref());
        contents.push('\n');
    }
    write_text_file(path, &contents)
}

/// Split the label files of `label_dir` and write `train.txt`, `val.txt` and
/// `test.txt` into `output_dir`.
pub fn split_label_directory<R>(
    label_dir: &Path,
    output_dir: &Path,
    ratios: SplitRatios,
    rng: &mut R,
) -> FileOpResult<SplitSummary>
where
    R: Rng + ?Sized,
{
    let file_names = get_file_names(label_dir);
    let total = file_names.len();
    let result = split_dataset(file_names, ratios, rng);

    for split in DatasetSplit::ALL {
        let path = output_dir.join(split.list_file_name());
        save_to_file(result.get(split), &path)?;
        info!("Wrote {} entries to {:?}", result.get(split).len(), path);
    }

    let summary = SplitSummary {
        total,
        train: result.train.len(),
        val: result.val.len(),
        test: result.test.len(),
    };
    info!(
        "Total: {}, train: {}, valid: {}, test: {}",
        summary.total, summary.train, summary.val, summary.test
    );

    Ok(summary)
}
