//! Line I/O for interactive sessions
//!
//! - Lines are read from any `BufRead` (stdin in production)
//! - Each line is split into words with shell-style quoting
//! - Input files are stamped at session start so edits can be reported

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::errors::{CliError, CliResult};

/// Read lines from `input`, skipping blank ones
pub fn read_lines<R: BufRead>(input: R) -> impl Iterator<Item = CliResult<String>> {
    input.lines().filter_map(|line| match line {
        Ok(l) if l.trim().is_empty() => None,
        Ok(l) => Some(Ok(l)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Split a line into words.
///
/// Whitespace separates words. Single quotes keep everything literally,
/// double quotes allow `\"` and `\\`, and a backslash outside quotes escapes
/// the next character.
pub fn split_line(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => return Err(CliError::usage_error("unterminated single quote")),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => word.push(c),
                            Some(c) => {
                                word.push('\\');
                                word.push(c);
                            }
                            None => return Err(CliError::usage_error("unterminated double quote")),
                        },
                        Some(c) => word.push(c),
                        None => return Err(CliError::usage_error("unterminated double quote")),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => word.push(c),
                    None => return Err(CliError::usage_error("trailing backslash")),
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
    }
    if in_word {
        words.push(word);
    }

    Ok(words)
}

/// Modification times of the input files, taken when a session starts
#[derive(Debug, Clone)]
pub struct SourceStamp {
    files: Vec<(PathBuf, Option<SystemTime>)>,
}

impl SourceStamp {
    /// Stamps the given files. Unreadable metadata stamps as `None`.
    pub fn take(paths: &[&Path]) -> Self {
        Self {
            files: paths
                .iter()
                .map(|p| (p.to_path_buf(), modified(p)))
                .collect(),
        }
    }

    /// Files whose modification time differs from the stamp
    pub fn changed(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|(path, stamp)| modified(path) != *stamp)
            .map(|(path, _)| path.as_path())
            .collect()
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_line("query --limit 5  --hazardous").unwrap(),
            vec!["query", "--limit", "5", "--hazardous"]
        );
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quotes() {
        assert_eq!(
            split_line("inspect --pdes '2020 BS'").unwrap(),
            vec!["inspect", "--pdes", "2020 BS"]
        );
        assert_eq!(
            split_line(r#"inspect --name "Don \"Q\" Quixote""#).unwrap(),
            vec!["inspect", "--name", "Don \"Q\" Quixote"]
        );
        assert_eq!(split_line(r"i -p 2020\ BS").unwrap(), vec!["i", "-p", "2020 BS"]);
        assert_eq!(split_line("a ''").unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_split_unterminated() {
        assert!(split_line("inspect --pdes '2020 BS").is_err());
        assert!(split_line("inspect --name \"Eros").is_err());
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let input = Cursor::new("query\n\n   \ninspect -p 433\n");
        let lines: Vec<String> = read_lines(input).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["query", "inspect -p 433"]);
    }

    #[test]
    fn test_source_stamp_detects_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neos.csv");
        fs::write(&path, "pdes,name,diameter,pha\n").unwrap();

        let stamp = SourceStamp::take(&[path.as_path()]);
        assert!(stamp.changed().is_empty());

        fs::remove_file(&path).unwrap();
        assert_eq!(stamp.changed(), vec![path.as_path()]);
    }
}
