use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An image and the label file that shares its file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLabelPair {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
}

/// Result of matching images to label files
#[derive(Debug, Clone, Default)]
pub struct Pairing {
    pub pairs: Vec<ImageLabelPair>,
    /// Label files with no image of the same stem
    pub orphan_labels: Vec<PathBuf>,
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

/// Match images to labels by file stem, in label order.
///
/// If two images share a stem (e.g. `a.jpg` and `a.JPG`), the later one in
/// `images` wins.
pub fn pair_images_with_labels(images: &[PathBuf], labels: &[PathBuf]) -> Pairing {
    let images_by_stem: HashMap<String, &PathBuf> = images
        .iter()
        .filter_map(|img| stem_of(img).map(|stem| (stem, img)))
        .collect();

    let mut pairing = Pairing::default();
    for label in labels {
        match stem_of(label).and_then(|stem| images_by_stem.get(&stem).copied()) {
            Some(image) => pairing.pairs.push(ImageLabelPair {
                image_path: image.clone(),
                label_path: label.clone(),
            }),
            None => pairing.orphan_labels.push(label.clone()),
        }
    }

    pairing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_by_stem() {
        let images = vec![
            PathBuf::from("images/a.jpg"),
            PathBuf::from("images/b.jpg"),
            PathBuf::from("images/c.jpg"),
        ];
        let labels = vec![
            PathBuf::from("labels/c.txt"),
            PathBuf::from("labels/a.txt"),
            PathBuf::from("labels/z.txt"),
        ];

        let pairing = pair_images_with_labels(&images, &labels);

        assert_eq!(
            pairing.pairs,
            vec![
                ImageLabelPair {
                    image_path: PathBuf::from("images/c.jpg"),
                    label_path: PathBuf::from("labels/c.txt"),
                },
                ImageLabelPair {
                    image_path: PathBuf::from("images/a.jpg"),
                    label_path: PathBuf::from("labels/a.txt"),
                },
            ]
        );
        assert_eq!(pairing.orphan_labels, vec![PathBuf::from("labels/z.txt")]);
    }

    #[test]
    fn test_stems_with_dots() {
        let images = vec![PathBuf::from("frame.001.jpg")];
        let labels = vec![PathBuf::from("frame.001.txt")];

        let pairing = pair_images_with_labels(&images, &labels);
        assert_eq!(pairing.pairs.len(), 1);
        assert!(pairing.orphan_labels.is_empty());
    }
}
