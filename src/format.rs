use std::fmt::Write;

use crate::toc::Heading;

/// Which title line opens the TOC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TitleStyle {
    /// `# Table of contents`
    #[default]
    TableOfContents,
    /// `# Contents`
    Contents,
    /// No title, entries only.
    None,
}

pub fn title_line(style: TitleStyle) -> Option<&'static str> {
    match style {
        TitleStyle::TableOfContents => Some("# Table of contents"),
        TitleStyle::Contents => Some("# Contents"),
        TitleStyle::None => None,
    }
}

/// Build one entry: `<2*(level-1) spaces>- [text](#anchor)`
pub fn entry(heading: &Heading) -> String {
    let indent = heading.level.saturating_sub(1) * 2;
    let mut out = String::with_capacity(indent + heading.text.len() + heading.anchor.len() + 8);
    let _ = write!(
        out,
        "{:indent$}- [{}](#{})",
        "", heading.text, heading.anchor
    );
    out
}

/// Read an entry back into its heading. Inverse of [`entry`] for anything it
/// produced; returns `None` for title lines and other text.
///
/// Text and anchor always have the same byte length (space and `-` are both
/// one byte), so the `](#` separator sits exactly in the middle of the link,
/// even when the heading text itself contains `](#`.
pub fn parse_entry(line: &str) -> Option<Heading> {
    let body = line.trim_start_matches(' ');
    let indent = line.len() - body.len();
    if indent % 2 != 0 {
        return None;
    }

    let link = body.strip_prefix("- [")?.strip_suffix(')')?;
    let half = link.len().checked_sub(3)?;
    if half % 2 != 0 {
        return None;
    }
    let mid = half / 2;
    if link.get(mid..mid + 3)? != "](#" {
        return None;
    }

    let (text, anchor) = (&link[..mid], &link[mid + 3..]);
    if anchor != text.replace(' ', "-") {
        return None;
    }
    Some(Heading {
        level: indent / 2 + 1,
        text: text.to_string(),
        anchor: anchor.to_string(),
    })
}
