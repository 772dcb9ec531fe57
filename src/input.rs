use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_integer_per_line() {
        let entries = parse_entries("1721\n979\n366\n").unwrap();
        assert_eq!(entries, vec![1721, 979, 366]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let entries = parse_entries("  1721\t\n979 \n").unwrap();
        assert_eq!(entries, vec![1721, 979]);
    }

    #[test]
    fn negative_entries_parse() {
        let entries = parse_entries("-5\n2025\n").unwrap();
        assert_eq!(entries, vec![-5, 2025]);
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let entries = parse_entries("").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn non_integer_line_is_an_error_with_its_line_number() {
        let err = parse_entries("1721\nabc\n299\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "err: {}", err);
    }

    #[test]
    fn blank_line_is_an_error() {
        let err = parse_entries("1721\n\n299\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "err: {}", err);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_entries(Path::new("no_such_file.in")).unwrap_err();
        assert!(
            err.to_string().contains("Failed to read input file"),
            "err: {}",
            err
        );
    }
}

/// Read a puzzle input file: plain text, one integer per line, surrounding
/// whitespace allowed. A missing file or an unparseable line (including a
/// blank one) is a fatal error; there is no recovery or defaulting.
pub fn read_entries(path: &Path) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow!("Failed to read input file '{}': {}", path.display(), err))?;

    parse_entries(&contents)
}

fn parse_entries(contents: &str) -> Result<Vec<i64>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.trim()
                .parse::<i64>()
                .map_err(|err| anyhow!("Failed to parse integer on line {}: {}", index + 1, err))
        })
        .collect()
}
