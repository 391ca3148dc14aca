//! Table-of-contents extraction.
//!
//! One forward pass: markdown cells in document order, lines in order
//! within each cell. Nothing is cached; every call rescans the notebook.

pub mod heading;

use std::path::Path;

pub use heading::{parse_heading, Heading};

use crate::error::Result;
use crate::format::{self, TitleStyle};
use crate::notebook::Notebook;

/// Knobs for a single extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocOptions {
    /// Headings deeper than this are left out. `None` keeps every level.
    pub max_level: Option<usize>,
    pub title: TitleStyle,
}

impl TocOptions {
    pub fn with_max_level(mut self, max_level: Option<usize>) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_title(mut self, title: TitleStyle) -> Self {
        self.title = title;
        self
    }

    fn admits(&self, level: usize) -> bool {
        self.max_level.map_or(true, |max| level <= max)
    }
}

/// Every heading that makes it into the TOC, in document order.
pub fn headings(notebook: &Notebook, options: &TocOptions) -> Vec<Heading> {
    let mut found = Vec::new();

    for (idx, cell) in notebook.cells.iter().enumerate() {
        if !cell.is_documentation() {
            tracing::debug!(cell = idx, cell_type = ?cell.cell_type, "skipping cell");
            continue;
        }

        for line in cell.source.lines() {
            let Some(heading) = parse_heading(line) else {
                continue;
            };
            if !options.admits(heading.level) {
                tracing::debug!(
                    cell = idx,
                    level = heading.level,
                    text = %heading.text,
                    "heading deeper than max level"
                );
                continue;
            }
            tracing::trace!(cell = idx, level = heading.level, text = %heading.text, "heading");
            found.push(heading);
        }
    }

    found
}

/// Render the TOC: title line (if any) then one entry per heading,
/// joined with `\n`, no trailing newline.
pub fn generate_toc(notebook: &Notebook, options: &TocOptions) -> String {
    let entries = headings(notebook, options);
    let mut items: Vec<String> = Vec::with_capacity(entries.len() + 1);
    if let Some(title) = format::title_line(options.title) {
        items.push(title.to_string());
    }
    items.extend(entries.iter().map(format::entry));
    items.join("\n")
}

/// Load `path` and render its TOC. Any load failure aborts before output.
pub fn generate_toc_from_path(path: &Path, options: &TocOptions) -> Result<String> {
    let notebook = Notebook::from_path(path)?;
    Ok(generate_toc(&notebook, options))
}
