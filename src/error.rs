use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a TOC from being produced.
/// There is no partial success: any of these aborts the whole extraction.
#[derive(Debug, Error)]
pub enum TocError {
    #[error("{} not found{}", .path.display(), did_you_mean(.suggestion.as_deref()))]
    NotFound {
        path: PathBuf,
        suggestion: Option<String>,
    },

    #[error("{} [permission denied]", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content is not well-formed JSON.
    #[error("not valid JSON: {source}")]
    Parse { source: serde_json::Error },

    /// Valid JSON, wrong shape (no `cells`, a cell without `cell_type`, ...).
    #[error("malformed notebook: {reason}")]
    Malformed { reason: String },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean: {s}?)"))
}

impl TocError {
    /// Split a serde_json failure into a syntax problem or a shape problem.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => TocError::Malformed {
                reason: err.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => TocError::Parse { source: err },
        }
    }
}

pub type Result<T> = std::result::Result<T, TocError>;
