//! # Instruction Buffer
//!
//! Append-only record of everything the generator emits. Each emission is one
//! line, indented by loop nesting depth. Comment lines are kept for the debug
//! listing and never reach the exported program.

use tapegen_spec::Symbol;

/// Spaces of indentation per loop nesting level in the debug listing
pub const INDENT_WIDTH: usize = 2;

/// Comment line prefix in the debug listing
pub const COMMENT_PREFIX: &str = "# ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    Code,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    indent: usize,
    kind: LineKind,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct InstructionBuffer {
    lines: Vec<Line>,
    indent: usize,
}

impl InstructionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append instruction text at the current indentation
    ///
    /// Empty text adds no line.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.lines.push(Line {
            indent: self.indent,
            kind: LineKind::Code,
            text: text.to_string(),
        });
    }

    /// Append a comment line
    pub fn annotate(&mut self, text: &str) {
        self.lines.push(Line {
            indent: self.indent,
            kind: LineKind::Comment,
            text: text.to_string(),
        });
    }

    /// Enter one loop nesting level
    pub fn indent(&mut self) {
        self.indent += INDENT_WIDTH;
    }

    /// Leave one loop nesting level
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(INDENT_WIDTH);
    }

    /// Current indentation in spaces
    pub fn indentation(&self) -> usize {
        self.indent
    }

    /// Number of lines, comments included
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Debug listing: every line with indentation, comments included
    pub fn export_full(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.extend(std::iter::repeat(' ').take(line.indent));
            if line.kind == LineKind::Comment {
                out.push_str(COMMENT_PREFIX);
            }
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Program text: instruction symbols only, in emission order
    pub fn export_program(&self) -> String {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Code)
            .flat_map(|line| line.text.chars())
            .filter(|&c| Symbol::is_symbol(c))
            .collect()
    }
}
