//! Display lines and text layout helpers
//!
//! Every piece of terminal output is a [`DisplayLine`] tagged with a
//! [`LineKind`]. Multi-line documents and reports are composed with
//! [`TextBlock`], which knows the few layout conventions the terminal uses:
//! blank separators, heavy horizontal rules and centered banner titles.

/// Width of the rule framing file documents (`about.txt`, `details.txt`)
pub const DOC_RULE_WIDTH: usize = 44;

/// Width of the rule framing command reports (`projects`, `contact`, ...)
pub const REPORT_RULE_WIDTH: usize = 47;

/// What produced a line, which decides how it is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted command (`~ $ ls`)
    Command,
    Output,
    Error,
}

/// One rendered line of terminal output. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    kind: LineKind,
    text: String,
}

impl DisplayLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        DisplayLine {
            kind,
            text: text.into(),
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.kind == LineKind::Error
    }
}

/// A heavy horizontal rule of the given width
pub fn rule(width: usize) -> String {
    "━".repeat(width)
}

/// Builder for a block of plain text lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new() -> Self {
        TextBlock { lines: Vec::new() }
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Rule, centered title, rule
    pub fn banner(self, title: &str, width: usize) -> Self {
        let bar = rule(width);
        self.line(bar.clone())
            .line(format!("{:^width$}", title, width = width))
            .line(bar)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Tag every line as [`LineKind::Output`]
    pub fn into_output(self) -> Vec<DisplayLine> {
        self.lines.into_iter().map(DisplayLine::output).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_layout() {
        let lines = TextBlock::new().banner("HELLO", 11).into_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), 11);
        assert_eq!(lines[1], "   HELLO   ");
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn test_into_output_tags_lines() {
        let out = TextBlock::new().line("a").blank().into_output();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.kind() == LineKind::Output));
        assert_eq!(out[1].text(), "");
    }
}
