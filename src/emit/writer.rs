//! Indentation-aware source writer shared by the TypeScript emitters.

const INDENT: &str = "  ";

/// Accumulates generated source line by line
#[derive(Debug, Default)]
pub struct Writer {
    buf: String,
    indent: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent. Empty input emits a blank line.
    pub fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Append a line and increase the indent, e.g. `export class Foo {`.
    pub fn open(&mut self, line: impl AsRef<str>) {
        self.line(line);
        self.indent += 1;
    }

    /// Decrease the indent and append a closing line, e.g. `}`.
    pub fn close(&mut self, line: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(line);
    }

    /// Decrease the indent without emitting a line, for constructs that
    /// end on their last member (union types).
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append preformatted text verbatim, ensuring a trailing newline.
    pub fn raw(&mut self, text: &str) {
        self.buf.push_str(text);
        if !text.ends_with('\n') {
            self.buf.push('\n');
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
