/// One Markdown heading pulled from a documentation cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#`, always >= 1.
    pub level: usize,
    pub text: String,
    /// Same-document link target: `text` with every space turned into `-`.
    pub anchor: String,
}

impl Heading {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let anchor = text.replace(' ', "-");
        Heading {
            level,
            text,
            anchor,
        }
    }
}

/// Recognize a heading line: one or more `#` at column 0, exactly one space,
/// then a word character. Anything else is not a heading.
///
/// Plain byte scan over the prefix.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || line.as_bytes().get(level) != Some(&b' ') {
        return None;
    }

    // `#` and space are single bytes, so this slice is on a char boundary.
    let rest = &line[level + 1..];
    if !rest.chars().next().is_some_and(is_word_char) {
        return None;
    }

    Some(Heading::new(level, rest.trim_end()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
