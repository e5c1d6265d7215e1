use crate::error::{NumcsvError, Result};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A token qualifies only if every character is a decimal digit '0'-'9'.
/// Signs, decimal points, separators, and exponents all disqualify a token,
/// so "-5", "3.14", and "1,000" are dropped rather than parsed.
pub fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Pulls whitespace-delimited integer tokens out of a text file, preserving
/// order of appearance: line by line, left to right within a line.
///
/// Extracted numbers are kept as normalized decimal strings rather than a
/// machine integer type, so a qualifying token of any length round-trips to
/// the output row intact. The values are never used arithmetically.
pub struct NumberExtractor;

impl NumberExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Reads the file as UTF-8 lines and returns every qualifying token as a
    /// normalized decimal string. A missing file surfaces as `MissingInput`,
    /// any other read/decoding failure as `Io`; the pipeline reports either
    /// and treats the file as having yielded nothing.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                NumcsvError::MissingInput {
                    path: path.display().to_string(),
                }
            } else {
                NumcsvError::Io(err)
            }
        })?;
        let reader = BufReader::new(file);

        let mut numbers = Vec::new();
        for line in reader.lines() {
            let line = line?;
            self.extract_from_line(&line, &mut numbers);
        }

        Ok(numbers)
    }

    fn extract_from_line(&self, line: &str, numbers: &mut Vec<String>) {
        numbers.extend(
            line.split_whitespace()
                .filter(|token| is_all_digits(token))
                .map(normalize_digits),
        );
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a digit token the way integer conversion would: leading zeros
/// stripped, an all-zero token collapsing to "0".
fn normalize_digits(token: &str) -> String {
    let stripped = token.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_qualifying_token_predicate() {
        assert!(is_all_digits("0"));
        assert!(is_all_digits("90"));
        assert!(is_all_digits("007"));

        assert!(!is_all_digits(""));
        assert!(!is_all_digits("-5"));
        assert!(!is_all_digits("3.14"));
        assert!(!is_all_digits("1,000"));
        assert!(!is_all_digits("abc"));
        assert!(!is_all_digits("12a"));
        assert!(!is_all_digits("1e3"));
    }

    #[test]
    fn test_digit_normalization() {
        assert_eq!(normalize_digits("42"), "42");
        assert_eq!(normalize_digits("007"), "7");
        assert_eq!(normalize_digits("0"), "0");
        assert_eq!(normalize_digits("000"), "0");
    }

    #[test]
    fn test_grades_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(
            &temp_dir,
            "grades1.txt",
            "Alice 90\nBob 85 extra 7\nNoNumbersHere\n",
        );

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert_eq!(numbers, vec!["90", "85", "7"]);
    }

    #[test]
    fn test_order_is_line_then_left_to_right() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "ordered.txt", "3 1\n4 1 5\n9\n");

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert_eq!(numbers, vec!["3", "1", "4", "1", "5", "9"]);
    }

    #[test]
    fn test_mixed_tokens_are_filtered_not_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "mixed.txt", "-5 3.14 abc 12a 42 1,000\n");

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert_eq!(numbers, vec!["42"]);
    }

    #[test]
    fn test_leading_zeros_render_as_decimal() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "zeros.txt", "007 010 000\n");

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert_eq!(numbers, vec!["7", "10", "0"]);
    }

    #[test]
    fn test_tokens_beyond_machine_integer_range_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "big.txt", "18446744073709551616 7\n");

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert_eq!(numbers, vec!["18446744073709551616", "7"]);
    }

    #[test]
    fn test_file_with_no_numbers_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "empty.txt", "no numbers in here\nat all\n");

        let numbers = NumberExtractor::new().extract(&path).unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vanished.txt");

        let result = NumberExtractor::new().extract(&path);
        assert!(matches!(result, Err(NumcsvError::MissingInput { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let result = NumberExtractor::new().extract(&path);
        assert!(matches!(result, Err(NumcsvError::Io(_))));
    }
}
