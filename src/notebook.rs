use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TocError};

/// A parsed notebook. Only the parts the TOC needs are kept;
/// `metadata`, `outputs`, `nbformat` and friends are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
    Raw,
    /// Any tag we don't recognize. Never scanned.
    #[serde(other)]
    Other,
}

/// Cell source. nbformat allows either a list of lines or one string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Source {
    /// Lines in order, each keeping its `\n` terminator if it had one.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Source::Lines(lines) => lines.iter().map(String::as_str).collect(),
            Source::Text(text) => split_lines(text),
        }
    }
}

/// memchr line split that keeps terminators, so a string source scans
/// exactly like the equivalent list source.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for nl in memchr::memchr_iter(b'\n', text.as_bytes()) {
        lines.push(&text[start..=nl]);
        start = nl + 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

impl Cell {
    pub fn new(cell_type: CellType, lines: &[&str]) -> Self {
        Cell {
            cell_type,
            source: Source::Lines(lines.iter().map(|&l| l.to_string()).collect()),
        }
    }

    pub fn markdown(lines: &[&str]) -> Self {
        Cell::new(CellType::Markdown, lines)
    }

    pub fn code(lines: &[&str]) -> Self {
        Cell::new(CellType::Code, lines)
    }

    pub fn is_documentation(&self) -> bool {
        self.cell_type == CellType::Markdown
    }
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Notebook { cells }
    }

    /// Load a notebook file. Missing paths get a did-you-mean suggestion
    /// from the parent directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TocError::NotFound {
                    path: path.to_path_buf(),
                    suggestion: suggest_similar(path),
                });
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(TocError::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(TocError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        if meta.is_dir() {
            return Err(TocError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory, expected a notebook file"),
            });
        }

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => TocError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => TocError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded notebook");
        Notebook::from_slice(&bytes)
    }

    /// Parse raw notebook bytes. Invalid UTF-8 is a JSON syntax error, so it
    /// lands in `Parse` alongside any other bad input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(TocError::from_json)?;
        Notebook::from_value(value)
    }

    /// Build from an already-parsed JSON value. Structure is checked up front
    /// so a bad cell fails the whole load rather than surfacing mid-scan.
    pub fn from_value(value: Value) -> Result<Self> {
        validate(&value)?;
        serde_json::from_value(value).map_err(TocError::from_json)
    }
}

impl FromStr for Notebook {
    type Err = TocError;

    fn from_str(s: &str) -> Result<Self> {
        Notebook::from_slice(s.as_bytes())
    }
}

/// Shape checks with cell-indexed messages, run before deserializing.
fn validate(value: &Value) -> Result<()> {
    let malformed = |reason: String| TocError::Malformed { reason };

    let Some(root) = value.as_object() else {
        return Err(malformed(format!(
            "expected a JSON object at the top level, found {}",
            kind(value)
        )));
    };
    let Some(cells) = root.get("cells") else {
        return Err(malformed("missing `cells`".into()));
    };
    let Some(cells) = cells.as_array() else {
        return Err(malformed(format!("`cells` must be an array, found {}", kind(cells))));
    };

    for (i, cell) in cells.iter().enumerate() {
        let Some(cell) = cell.as_object() else {
            return Err(malformed(format!("cell {i} is {}, expected an object", kind(cell))));
        };
        for field in ["cell_type", "source"] {
            if !cell.contains_key(field) {
                return Err(malformed(format!("cell {i} has no `{field}`")));
            }
        }
        if !cell["cell_type"].is_string() {
            return Err(malformed(format!("cell {i}: `cell_type` must be a string")));
        }
        let source_ok = match &cell["source"] {
            Value::String(_) => true,
            Value::Array(lines) => lines.iter().all(Value::is_string),
            _ => false,
        };
        if !source_ok {
            return Err(malformed(format!(
                "cell {i}: `source` must be a string or an array of strings"
            )));
        }
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Closest regular file in the parent directory, within 3 edits.
/// Ties go to the lexicographically smallest name so the hint is stable.
fn suggest_similar(path: &Path) -> Option<String> {
    let wanted = path.file_name()?.to_str()?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::read_dir(dir)
        .ok()?
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .map(|name| (edit_distance(wanted, &name), name))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, name)| name)
}

/// Levenshtein distance over chars, single rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diag + usize::from(ca != cb);
            diag = row[j + 1];
            row[j + 1] = substitute.min(diag + 1).min(row[j] + 1);
        }
    }
    row[b.len()]
}
