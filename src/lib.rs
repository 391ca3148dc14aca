//! Markdown table of contents for Jupyter notebooks.
//!
//! ```
//! use nbtoc::{generate_toc, Cell, Notebook, TocOptions};
//!
//! let nb = Notebook::new(vec![Cell::markdown(&["# Intro\n", "## Section One\n"])]);
//! assert_eq!(
//!     generate_toc(&nb, &TocOptions::default()),
//!     "# Table of contents\n- [Intro](#Intro)\n  - [Section One](#Section-One)",
//! );
//! ```

pub mod cli;
pub mod error;
pub mod format;
pub mod notebook;
pub mod toc;

pub use error::{Result, TocError};
pub use format::TitleStyle;
pub use notebook::{Cell, CellType, Notebook, Source};
pub use toc::{generate_toc, generate_toc_from_path, headings, Heading, TocOptions};
