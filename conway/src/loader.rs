// loader.rs - Reads initial states from plain-text grid files
//
// Format:
//
//     <rows> <columns>
//     0110...        (optional: `rows` lines of exactly `columns` 0/1 chars)
//
// A file holding only the header describes an all-dead grid.

use std::fs;
use std::path::{Path, PathBuf};

use automaton::Snapshot;
use thiserror::Error;

/// Largest grid, in cells, that a file may describe.
pub const MAX_CELLS: usize = 1 << 24;

/// Error encountered while loading an initial state. Line numbers are
/// 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing `<rows> <columns>` header")]
    MissingHeader,
    #[error("line {line}: expected `<rows> <columns>`, found {text:?}")]
    InvalidHeader { line: usize, text: String },
    #[error("line {line}, column {column}: invalid character {found:?} (expected '0' or '1')")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("line {line}: expected {expected} cells, found {found}")]
    WrongLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{rows}x{columns} grid is too big (at most {max} cells)", max = MAX_CELLS)]
    TooBig { rows: usize, columns: usize },
    #[error("expected {expected} state lines, found {found}")]
    MissingLines { expected: usize, found: usize },
    #[error("line {line}: unexpected data after the last state line")]
    TrailingData { line: usize },
}

/// Reads and parses the file at `path`.
pub fn load(path: &Path) -> Result<Snapshot, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses an initial state from text.
pub fn parse(text: &str) -> Result<Snapshot, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .skip_while(|(_, line)| line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let (rows, columns) = parse_header(header).ok_or_else(|| LoadError::InvalidHeader {
        line: header_line,
        text: header.to_owned(),
    })?;
    if rows.checked_mul(columns).is_none_or(|cells| cells > MAX_CELLS) {
        return Err(LoadError::TooBig { rows, columns });
    }

    let rest: Vec<(usize, &str)> = lines.collect();
    let mut snapshot = Snapshot::new(rows, columns);
    if rest.iter().all(|(_, line)| line.trim().is_empty()) {
        return Ok(snapshot);
    }

    if rest.len() < rows {
        return Err(LoadError::MissingLines {
            expected: rows,
            found: rest.len(),
        });
    }
    for (r, &(line_number, line)) in rest[..rows].iter().enumerate() {
        let found = line.chars().count();
        if found != columns {
            return Err(LoadError::WrongLength {
                line: line_number,
                expected: columns,
                found,
            });
        }
        for (c, ch) in line.chars().enumerate() {
            let alive = match ch {
                '0' => false,
                '1' => true,
                _ => {
                    return Err(LoadError::InvalidCharacter {
                        line: line_number,
                        column: c + 1,
                        found: ch,
                    });
                }
            };
            snapshot.set(r, c, alive);
        }
    }
    if let Some(&(line, _)) = rest[rows..].iter().find(|(_, line)| !line.trim().is_empty()) {
        return Err(LoadError::TrailingData { line });
    }

    Ok(snapshot)
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut words = line.split_whitespace();
    let rows = words.next()?.parse().ok()?;
    let columns = words.next()?.parse().ok()?;
    match words.next() {
        Some(_) => None,
        None => Some((rows, columns)),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn to_text(snapshot: &Snapshot) -> String {
        format!("{} {}\n{}\n", snapshot.rows(), snapshot.columns(), snapshot)
    }

    #[test]
    fn test_parse_states() {
        let snapshot = parse("3 4\n0100\n0010\n1110\n").unwrap();
        assert_eq!("0100\n0010\n1110", snapshot.to_string());
    }

    #[test]
    fn test_header_only_is_dead() {
        let snapshot = parse("  5 7  \n\n   \n").unwrap();
        assert_eq!(Snapshot::new(5, 7), snapshot);
        assert_eq!(Snapshot::new(2, 2), parse("2 2").unwrap());
    }

    #[test]
    fn test_crlf_and_leading_blank_lines() {
        let snapshot = parse("\r\n2 3\r\n101\r\n010\r\n").unwrap();
        assert_eq!("101\n010", snapshot.to_string());
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(parse(""), Err(LoadError::MissingHeader)));
        assert!(matches!(parse(" \n\n"), Err(LoadError::MissingHeader)));
        assert!(matches!(
            parse("\n3\n000\n"),
            Err(LoadError::InvalidHeader { line: 2, .. })
        ));
        assert!(matches!(parse("3 x\n"), Err(LoadError::InvalidHeader { .. })));
        assert!(matches!(parse("-3 3\n"), Err(LoadError::InvalidHeader { .. })));
        assert!(matches!(parse("3 3 3\n"), Err(LoadError::InvalidHeader { .. })));
        assert!(matches!(
            parse("100000 100000\n"),
            Err(LoadError::TooBig { rows: 100000, .. })
        ));
    }

    #[test]
    fn test_state_errors() {
        assert!(matches!(
            parse("2 3\n010\n0a0\n"),
            Err(LoadError::InvalidCharacter {
                line: 3,
                column: 2,
                found: 'a'
            })
        ));
        assert!(matches!(
            parse("2 3\n010\n01\n"),
            Err(LoadError::WrongLength {
                line: 3,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            parse("2 3\n0100\n010\n"),
            Err(LoadError::WrongLength { line: 2, .. })
        ));
        assert!(matches!(
            parse("3 3\n010\n010\n"),
            Err(LoadError::MissingLines {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            parse("1 3\n010\n\n111\n"),
            Err(LoadError::TrailingData { line: 4 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/conway/init.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/conway/init.txt"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("conway-loader-{}.txt", std::process::id()));
        let snapshot = Snapshot::with_live_cells(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        fs::write(&path, to_text(&snapshot)).unwrap();
        let loaded = load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(snapshot, loaded.unwrap());
    }

    #[test]
    fn test_bundled_patterns() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("patterns");
        let mut count = 0;
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            let snapshot = load(&path).unwrap_or_else(|err| panic!("{err}"));
            assert!(automaton::Grid::from_snapshot(&snapshot).is_ok());
            count += 1;
        }
        assert_eq!(8, count);

        // pulsar has period 3
        let pulsar = load(&dir.join("pulsar.txt")).unwrap();
        assert_eq!(48, pulsar.population());
        let mut grid = automaton::Grid::from_snapshot(&pulsar).unwrap();
        for _ in 0..3 {
            grid.step(&automaton::GameOfLifeFixed);
        }
        assert_eq!(pulsar, grid.state());
    }

    proptest! {
        /// Arbitrary input never panics the loader.
        #[test]
        fn test_parse_arbitrary_text(text in "[0-9 \n\rx]{0,40}") {
            let _ = parse(&text);
        }
    }
}
