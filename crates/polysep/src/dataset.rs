//! Line-based dataset codec: one point per line, `"<B|R> <x> <y>"`.
//!
//! B = Included, R = Excluded. Parsing is strict (malformed lines are
//! rejected with their line number); serialization is deterministic, one line
//! per point in insertion order, so save/load round-trips exactly.

use std::fs;
use std::path::Path;

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom::{Label, PointSet};

/// Dataset codec errors, each carrying the offending 1-based line number.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("line {line}: expected `<B|R> <x> <y>`, found {found} fields")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: unknown label tag `{tag}` (expected B or R)")]
    UnknownLabel { line: usize, tag: String },

    #[error("line {line}: invalid coordinate `{text}`")]
    BadCoordinate { line: usize, text: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse dataset text into a fresh arena. Blank lines are skipped.
pub fn parse_points(text: &str) -> Result<PointSet, DatasetError> {
    let mut pts = PointSet::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(DatasetError::FieldCount {
                line,
                found: fields.len(),
            });
        }
        let label = match fields[0] {
            "B" => Label::Included,
            "R" => Label::Excluded,
            tag => {
                return Err(DatasetError::UnknownLabel {
                    line,
                    tag: tag.to_string(),
                })
            }
        };
        let x = parse_coord(fields[1], line)?;
        let y = parse_coord(fields[2], line)?;
        pts.push(Vector2::new(x, y), label);
    }
    Ok(pts)
}

fn parse_coord(text: &str, line: usize) -> Result<f64, DatasetError> {
    text.parse().map_err(|_| DatasetError::BadCoordinate {
        line,
        text: text.to_string(),
    })
}

/// Serialize the arena in insertion order.
pub fn format_points(pts: &PointSet) -> String {
    let mut out = String::new();
    for (_, p) in pts.iter() {
        let tag = match p.label {
            Label::Included => "B",
            Label::Excluded => "R",
        };
        out.push_str(&format!("{tag} {} {}\n", p.pos.x, p.pos.y));
    }
    out
}

pub fn load_points<P: AsRef<Path>>(path: P) -> Result<PointSet, DatasetError> {
    parse_points(&fs::read_to_string(path)?)
}

pub fn save_points<P: AsRef<Path>>(pts: &PointSet, path: P) -> Result<(), DatasetError> {
    fs::write(path, format_points(pts))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_coordinates() {
        let pts = parse_points("B 0 0\nR -2.5 3\n\nB 1e3 -0.125\n").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts.get(crate::geom::PointId(0)).label, Label::Included);
        assert_eq!(pts.get(crate::geom::PointId(1)).label, Label::Excluded);
        assert_eq!(pts.pos(crate::geom::PointId(1)), Vector2::new(-2.5, 3.0));
        assert_eq!(pts.pos(crate::geom::PointId(2)), Vector2::new(1000.0, -0.125));
    }

    #[test]
    fn rejects_malformed_lines_with_line_numbers() {
        match parse_points("B 0 0\nG 1 2\n") {
            Err(DatasetError::UnknownLabel { line: 2, tag }) => assert_eq!(tag, "G"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            parse_points("B 1\n"),
            Err(DatasetError::FieldCount { line: 1, found: 2 })
        ));
        assert!(matches!(
            parse_points("B one 2\n"),
            Err(DatasetError::BadCoordinate { line: 1, .. })
        ));
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let text = "B 0.1 -0.2\nR 5 5\nB -3.75 1e-9\n";
        let pts = parse_points(text).unwrap();
        let reparsed = parse_points(&format_points(&pts)).unwrap();
        assert_eq!(pts.len(), reparsed.len());
        for (a, b) in pts.iter().zip(reparsed.iter()) {
            assert_eq!(a.1, b.1);
        }
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset_1.txt");
        let pts = parse_points("B 1 2\nR 3 4\n").unwrap();
        save_points(&pts, &path).unwrap();
        let loaded = load_points(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.pos(crate::geom::PointId(1)), Vector2::new(3.0, 4.0));
    }
}
