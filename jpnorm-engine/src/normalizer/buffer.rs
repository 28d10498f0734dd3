use crate::error::{NormalizeError, Result};

/// Append-only output with a single "take back the last glyph" operation.
///
/// Grows as needed, so one input glyph may emit several output glyphs.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    glyphs: Vec<char>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: Vec::with_capacity(capacity),
        }
    }

    pub fn emit(&mut self, c: char) {
        self.glyphs.push(c);
    }

    /// Remove the last emitted glyph so the current one can replace it.
    ///
    /// `position` is the input index being processed, reported on underflow.
    pub fn retract(&mut self, position: usize) -> Result<char> {
        self.glyphs
            .pop()
            .ok_or(NormalizeError::MalformedSequence { position })
    }

    /// Last emitted glyph
    pub fn last(&self) -> Option<char> {
        self.glyphs.last().copied()
    }

    pub fn trim_trailing_space(&mut self) {
        if self.last() == Some(' ') {
            self.glyphs.pop();
        }
    }

    pub fn into_glyphs(self) -> Vec<char> {
        self.glyphs
    }
}
