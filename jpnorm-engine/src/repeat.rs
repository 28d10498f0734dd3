//! Repeat shortener: caps consecutive copies of short substrings.
//!
//! For each start position and each unit length up to `max_unit_len`, counts
//! how many back-to-back copies of that unit follow and splices out every copy
//! beyond `threshold`. Work per position is bounded by `max_unit_len`.

use tracing::trace;

/// Collapse runs of more than `threshold` copies of any unit of at most
/// `max_unit_len` characters. `threshold == 0` disables collapsing.
pub fn shorten_repeat(text: &str, threshold: usize, max_unit_len: usize) -> String {
    let mut glyphs: Vec<char> = text.chars().collect();
    shorten_glyphs(&mut glyphs, threshold, max_unit_len);
    glyphs.into_iter().collect()
}

/// In-place variant over decoded scalars.
pub(crate) fn shorten_glyphs(glyphs: &mut Vec<char>, threshold: usize, max_unit_len: usize) {
    if threshold == 0 {
        return;
    }

    let mut start = 0;
    while start < glyphs.len() {
        let mut unit = 1;
        // The bound is re-read every round: a splice shrinks the sequence.
        while unit <= max_unit_len.min((glyphs.len() - start) / 2) {
            let copies = count_copies(&glyphs[start..], unit);
            if copies > threshold {
                let keep_end = start + unit * threshold;
                let drop_end = start + unit * copies;
                trace!(start, unit, copies, threshold, "collapsing repeated unit");
                glyphs.drain(keep_end..drop_end);
            }
            unit += 1;
        }
        start += 1;
    }
}

/// Number of consecutive, non-overlapping copies of `s[..unit]` at the head of `s`.
fn count_copies(s: &[char], unit: usize) -> usize {
    let pattern = &s[..unit];
    s.chunks_exact(unit)
        .take_while(|chunk| *chunk == pattern)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_run() {
        assert_eq!(shorten_repeat("かわいいいいいいいいい", 6, 8), "かわいいいいいい");
    }

    #[test]
    fn test_multi_char_unit() {
        assert_eq!(shorten_repeat("無駄無駄無駄無駄ァ", 1, 8), "無駄ァ");
        assert_eq!(shorten_repeat("ababab", 2, 8), "abab");
    }

    #[test]
    fn test_threshold_zero_disables() {
        assert_eq!(shorten_repeat("いいいいいい", 0, 8), "いいいいいい");
    }

    #[test]
    fn test_at_threshold_untouched() {
        assert_eq!(shorten_repeat("wwww", 4, 8), "wwww");
        assert_eq!(shorten_repeat("wwwww", 4, 8), "wwww");
    }

    #[test]
    fn test_unit_longer_than_max_is_kept() {
        let unit = "abcdefghi"; // 9 chars
        let text = unit.repeat(3);
        assert_eq!(shorten_repeat(&text, 1, 8), text);
        assert_eq!(shorten_repeat(&text, 1, 9), unit);
    }

    #[test]
    fn test_collapses_later_runs() {
        assert_eq!(shorten_repeat("xyzzzzyyyy", 2, 8), "xyzzyy");
    }

    #[test]
    fn test_empty_and_short() {
        assert_eq!(shorten_repeat("", 1, 8), "");
        assert_eq!(shorten_repeat("a", 1, 8), "a");
    }

    #[test]
    fn test_count_copies() {
        let glyphs: Vec<char> = "abababx".chars().collect();
        assert_eq!(count_copies(&glyphs, 2), 3);
        assert_eq!(count_copies(&glyphs, 1), 1);
        assert_eq!(count_copies(&glyphs, 3), 1);
    }
}
