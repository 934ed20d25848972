use std::fs;
use std::path::Path;
use tracing::{error, warn};

use crate::core::bbox::YoloBox;

/// Parse a YOLO format label file.
///
/// # Arguments
/// * `label_path` - Path to the label file (.txt)
///
/// # Returns
/// * `Some(Vec<YoloBox>)` if the file could be read, one box per valid line
/// * `None` if the file doesn't exist or cannot be read
pub fn parse_label_file(label_path: &Path) -> Option<Vec<YoloBox>> {
    let content = match fs::read_to_string(label_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read label file {:?}: {}", label_path, e);
            return None;
        }
    };

    let mut boxes = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_label_line(line) {
            Some(bbox) => boxes.push(bbox),
            None => warn!(
                "Skipping malformed line {} in {:?}: {:?}",
                line_no + 1,
                label_path,
                line
            ),
        }
    }

    Some(boxes)
}

/// Parse one `class_id x_center y_center width height` line.
///
/// Every token is read as a float; the class id is truncated to an integer so
/// labels written as `0.0` are accepted.
pub fn parse_label_line(line: &str) -> Option<YoloBox> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|token| token.parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match values[..] {
        [class_id, x_center, y_center, width, height] if class_id >= 0.0 => Some(YoloBox {
            class_id: class_id as u32,
            x_center,
            y_center,
            width,
            height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_line() {
        let bbox = parse_label_line("2 0.5 0.25 0.1 0.2").unwrap();
        assert_eq!(bbox.class_id, 2);
        assert_eq!(bbox.x_center, 0.5);
        assert_eq!(bbox.y_center, 0.25);
        assert_eq!(bbox.width, 0.1);
        assert_eq!(bbox.height, 0.2);
    }

    #[test]
    fn test_parse_label_line_float_class_id() {
        let bbox = parse_label_line("3.0\t0.1  0.2 0.3 0.4").unwrap();
        assert_eq!(bbox.class_id, 3);
    }

    #[test]
    fn test_parse_label_line_rejects_bad_input() {
        assert!(parse_label_line("0 0.5 0.5 0.1").is_none());
        assert!(parse_label_line("0 0.5 0.5 0.1 0.1 0.9").is_none());
        assert!(parse_label_line("cat 0.5 0.5 0.1 0.1").is_none());
        assert!(parse_label_line("-1 0.5 0.5 0.1 0.1").is_none());
    }

    #[test]
    fn test_parse_label_file_skips_blank_comment_and_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.txt");
        fs::write(
            &path,
            "# Resolution: 640x640\n0 0.5 0.5 0.2 0.4\n\nbroken line\n1 0.1 0.2 0.3 0.4\n",
        )
        .unwrap();

        let boxes = parse_label_file(&path).unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].class_id, 0);
        assert_eq!(boxes[1].class_id, 1);
        assert_eq!(boxes[1].height, 0.4);
    }

    #[test]
    fn test_parse_label_file_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("background.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(parse_label_file(&path), Some(Vec::new()));
    }

    #[test]
    fn test_parse_label_file_missing() {
        assert!(parse_label_file(Path::new("/no/such/label.txt")).is_none());
    }
}
