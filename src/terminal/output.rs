//! Output transcript written by commands.

/// Severity of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: OutputKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Lines written since the last drain.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    pub fn push(&mut self, kind: OutputKind, text: impl Into<String>) {
        self.lines.push(OutputLine::new(kind, text));
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.kind == OutputKind::Error)
    }

    pub fn drain(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.lines)
    }
}
