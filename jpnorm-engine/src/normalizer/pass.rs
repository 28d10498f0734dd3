use super::buffer::OutputBuffer;
use crate::classify::{CharClass, classify, is_cjk};
use crate::error::{NormalizeError, Result};
use crate::options::{NormalizeOptions, TildeMode};
use crate::tables::{LONG_VOWEL_MARK, SEMI_VOICED_MARK, Tables, VOICED_MARK, ZENKAKU_TILDE, tables};

/// Single forward rewrite over decoded characters.
///
/// Decisions look at the last *emitted* glyph, never the last consumed one:
/// dropped characters leave no trace, so runs of spaces, hyphens and
/// long-vowel marks collapse across them.
#[derive(Debug)]
pub(crate) struct Rewriter<'a> {
    options: &'a NormalizeOptions,
    tables: &'static Tables,
    out: OutputBuffer,
    /// A space was emitted right after an ASCII glyph and may still be
    /// retracted if CJK text follows.
    latin_space_pending: bool,
}

impl<'a> Rewriter<'a> {
    pub fn new(options: &'a NormalizeOptions, capacity: usize) -> Self {
        Self {
            options,
            tables: tables(),
            out: OutputBuffer::with_capacity(capacity),
            latin_space_pending: false,
        }
    }

    /// Consume the character at input index `position`.
    pub fn push(&mut self, position: usize, c: char) -> Result<()> {
        match classify(c) {
            CharClass::Space => {
                self.push_space();
                Ok(())
            }
            CharClass::Hyphen => {
                if self.prev() == Some('-') {
                    return Ok(());
                }
                self.emit(position, '-')
            }
            CharClass::LongVowel => {
                if self.prev() == Some(LONG_VOWEL_MARK) {
                    return Ok(());
                }
                self.emit(position, LONG_VOWEL_MARK)
            }
            CharClass::Tilde => match self.options.tilde {
                TildeMode::Remove => Ok(()),
                TildeMode::Ignore => self.emit(position, c),
                TildeMode::Normalize => self.emit(position, '~'),
                TildeMode::Zenkaku => self.emit(position, ZENKAKU_TILDE),
            },
            CharClass::Other => self.push_other(position, c),
        }
    }

    /// Trim a trailing space and hand back the output glyphs.
    pub fn finish(mut self) -> Vec<char> {
        self.out.trim_trailing_space();
        self.out.into_glyphs()
    }

    fn prev(&self) -> Option<char> {
        self.out.last()
    }

    fn push_space(&mut self) {
        let remove = self.options.remove_space;
        let prev = self.prev();

        if remove && prev.is_some_and(|p| p == ' ' || is_cjk(p)) {
            return;
        }

        match prev {
            // Keep it for now; the next non-space glyph decides.
            Some(p) if p != '*' && p.is_ascii() => {
                self.out.emit(' ');
                self.latin_space_pending = true;
            }
            _ if remove => {}
            _ => self.out.emit(' '),
        }
    }

    fn push_other(&mut self, position: usize, c: char) -> Result<()> {
        let c = match self.tables.fold(c) {
            Some(folded) => folded,
            None => {
                if self.options.parenthesized_ideographs
                    && let Some(expansion) = self.tables.parenthesized(c)
                {
                    for e in expansion.chars() {
                        self.emit(position, e)?;
                    }
                    return Ok(());
                }
                c
            }
        };

        let is_mark = c == VOICED_MARK || c == SEMI_VOICED_MARK;
        if is_mark && self.prev().is_none() {
            // No base kana to merge into.
            return Err(NormalizeError::MalformedSequence { position });
        }

        let composed = match c {
            VOICED_MARK => self.prev().and_then(|p| self.tables.voiced(p)),
            SEMI_VOICED_MARK => self.prev().and_then(|p| self.tables.semi_voiced(p)),
            _ => None,
        };
        if let Some(composed) = composed {
            self.out.retract(position)?;
            return self.emit(position, composed);
        }

        self.emit(position, c)
    }

    /// Emit a non-space glyph, first resolving a pending Latin space.
    fn emit(&mut self, position: usize, c: char) -> Result<()> {
        if self.latin_space_pending && self.options.remove_space && is_cjk(c) {
            self.out.retract(position)?;
        }
        self.latin_space_pending = false;
        self.out.emit(c);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, options: &NormalizeOptions) -> String {
        let mut pass = Rewriter::new(options, input.len());
        for (i, c) in input.chars().enumerate() {
            pass.push(i, c).unwrap();
        }
        pass.finish().into_iter().collect()
    }

    #[test]
    fn test_space_after_cjk_dropped() {
        let opts = NormalizeOptions::default();
        assert_eq!(run("漢 字", &opts), "漢字");
        assert_eq!(run("漢 a", &opts), "漢a");
    }

    #[test]
    fn test_latin_space_resolution() {
        let opts = NormalizeOptions::default();
        assert_eq!(run("a b", &opts), "a b");
        assert_eq!(run("a 漢", &opts), "a漢");
        assert_eq!(run("a   漢", &opts), "a漢");
        assert_eq!(run("a ~漢", &opts), "a漢");
    }

    #[test]
    fn test_space_after_star_dropped() {
        let opts = NormalizeOptions::default();
        assert_eq!(run("a* b", &opts), "a*b");
    }

    #[test]
    fn test_space_after_non_ascii_latin_dropped() {
        let opts = NormalizeOptions::default();
        assert_eq!(run("café au", &opts), "caféau");
    }

    #[test]
    fn test_keep_space() {
        let opts = NormalizeOptions {
            remove_space: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(run("漢 字", &opts), "漢 字");
        assert_eq!(run("a  漢", &opts), "a  漢");
        assert_eq!(run(" a", &opts), " a");
    }

    #[test]
    fn test_voicing_composition() {
        let opts = NormalizeOptions::default();
        assert_eq!(run("ｶﾞ", &opts), "ガ");
        assert_eq!(run("ﾎﾟ", &opts), "ポ");
        assert_eq!(run("ハ゜", &opts), "パ");
        assert_eq!(run("う゛", &opts), "ゔ");
        // A base that does not take the mark: it survives in half-width form.
        assert_eq!(run("あﾞ", &opts), "あﾞ");
    }

    #[test]
    fn test_leading_voicing_mark_is_malformed() {
        let opts = NormalizeOptions::default();
        let mut pass = Rewriter::new(&opts, 4);
        assert_eq!(
            pass.push(0, 'ﾞ'),
            Err(NormalizeError::MalformedSequence { position: 0 })
        );

        // Dropped spaces leave the buffer empty.
        let mut pass = Rewriter::new(&opts, 4);
        pass.push(0, '\u{3000}').unwrap();
        assert_eq!(
            pass.push(1, '゜'),
            Err(NormalizeError::MalformedSequence { position: 1 })
        );

        // A kept space is something to sit next to.
        let keep = NormalizeOptions {
            remove_space: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(run(" ﾞ", &keep), " ﾞ");
    }

    #[test]
    fn test_expansion_emits_every_glyph() {
        let opts = NormalizeOptions {
            parenthesized_ideographs: true,
            ..NormalizeOptions::default()
        };
        assert_eq!(run("㈱", &opts), "(株)");
        assert_eq!(run("a ㈱", &opts), "a (株)");
        assert_eq!(run("㈱", &NormalizeOptions::default()), "㈱");
    }
}
