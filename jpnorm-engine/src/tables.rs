//! Static substitution tables and character sets.
//!
//! The raw data lives in `const` slices; lookups go through a process-wide
//! [`Tables`] registry built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Half-width dakuten, the canonical voicing mark after folding
pub const VOICED_MARK: char = 'ﾞ';
/// Half-width handakuten, the canonical semi-voicing mark after folding
pub const SEMI_VOICED_MARK: char = 'ﾟ';
/// Canonical long-vowel mark
pub const LONG_VOWEL_MARK: char = 'ー';
/// Full-width wave dash used by [`crate::TildeMode::Zenkaku`]
pub const ZENKAKU_TILDE: char = '〜';

/// Full-width Latin letters and symbols folded to ASCII.
#[rustfmt::skip]
pub const FULLWIDTH_ASCII: &[(char, char)] = &[
    ('ａ', 'a'), ('ｂ', 'b'), ('ｃ', 'c'), ('ｄ', 'd'), ('ｅ', 'e'),
    ('ｆ', 'f'), ('ｇ', 'g'), ('ｈ', 'h'), ('ｉ', 'i'), ('ｊ', 'j'),
    ('ｋ', 'k'), ('ｌ', 'l'), ('ｍ', 'm'), ('ｎ', 'n'), ('ｏ', 'o'),
    ('ｐ', 'p'), ('ｑ', 'q'), ('ｒ', 'r'), ('ｓ', 's'), ('ｔ', 't'),
    ('ｕ', 'u'), ('ｖ', 'v'), ('ｗ', 'w'), ('ｘ', 'x'), ('ｙ', 'y'),
    ('ｚ', 'z'), ('Ａ', 'A'), ('Ｂ', 'B'), ('Ｃ', 'C'), ('Ｄ', 'D'),
    ('Ｅ', 'E'), ('Ｆ', 'F'), ('Ｇ', 'G'), ('Ｈ', 'H'), ('Ｉ', 'I'),
    ('Ｊ', 'J'), ('Ｋ', 'K'), ('Ｌ', 'L'), ('Ｍ', 'M'), ('Ｎ', 'N'),
    ('Ｏ', 'O'), ('Ｐ', 'P'), ('Ｑ', 'Q'), ('Ｒ', 'R'), ('Ｓ', 'S'),
    ('Ｔ', 'T'), ('Ｕ', 'U'), ('Ｖ', 'V'), ('Ｗ', 'W'), ('Ｘ', 'X'),
    ('Ｙ', 'Y'), ('Ｚ', 'Z'), ('！', '!'), ('”', '"'), ('＃', '#'),
    ('＄', '$'), ('％', '%'), ('＆', '&'), ('’', '\''), ('（', '('),
    ('）', ')'), ('＊', '*'), ('＋', '+'), ('，', ','), ('−', '-'),
    ('．', '.'), ('／', '/'), ('：', ':'), ('；', ';'), ('＜', '<'),
    ('＝', '='), ('＞', '>'), ('？', '?'), ('＠', '@'), ('［', '['),
    ('¥', '\\'), ('］', ']'), ('＾', '^'), ('＿', '_'), ('‘', '`'),
    ('｛', '{'), ('｜', '|'), ('｝', '}'),
];

/// Full-width digits folded to ASCII.
#[rustfmt::skip]
pub const FULLWIDTH_DIGITS: &[(char, char)] = &[
    ('０', '0'), ('１', '1'), ('２', '2'), ('３', '3'), ('４', '4'),
    ('５', '5'), ('６', '6'), ('７', '7'), ('８', '8'), ('９', '9'),
];

/// Half-width katakana and CJK punctuation folded to full-width.
///
/// The two spacing voicing marks fold to their half-width forms so that a
/// single glyph drives voicing composition.
#[rustfmt::skip]
pub const HALFWIDTH_KANA: &[(char, char)] = &[
    ('ｱ', 'ア'), ('ｲ', 'イ'), ('ｳ', 'ウ'), ('ｴ', 'エ'), ('ｵ', 'オ'),
    ('ｶ', 'カ'), ('ｷ', 'キ'), ('ｸ', 'ク'), ('ｹ', 'ケ'), ('ｺ', 'コ'),
    ('ｻ', 'サ'), ('ｼ', 'シ'), ('ｽ', 'ス'), ('ｾ', 'セ'), ('ｿ', 'ソ'),
    ('ﾀ', 'タ'), ('ﾁ', 'チ'), ('ﾂ', 'ツ'), ('ﾃ', 'テ'), ('ﾄ', 'ト'),
    ('ﾅ', 'ナ'), ('ﾆ', 'ニ'), ('ﾇ', 'ヌ'), ('ﾈ', 'ネ'), ('ﾉ', 'ノ'),
    ('ﾊ', 'ハ'), ('ﾋ', 'ヒ'), ('ﾌ', 'フ'), ('ﾍ', 'ヘ'), ('ﾎ', 'ホ'),
    ('ﾏ', 'マ'), ('ﾐ', 'ミ'), ('ﾑ', 'ム'), ('ﾒ', 'メ'), ('ﾓ', 'モ'),
    ('ﾔ', 'ヤ'), ('ﾕ', 'ユ'), ('ﾖ', 'ヨ'), ('ﾗ', 'ラ'), ('ﾘ', 'リ'),
    ('ﾙ', 'ル'), ('ﾚ', 'レ'), ('ﾛ', 'ロ'), ('ﾜ', 'ワ'), ('ｦ', 'ヲ'),
    ('ﾝ', 'ン'), ('ｧ', 'ァ'), ('ｨ', 'ィ'), ('ｩ', 'ゥ'), ('ｪ', 'ェ'),
    ('ｫ', 'ォ'), ('ｯ', 'ッ'), ('ｬ', 'ャ'), ('ｭ', 'ュ'), ('ｮ', 'ョ'),
    ('｡', '。'), ('､', '、'), ('･', '・'), ('゛', VOICED_MARK), ('゜', SEMI_VOICED_MARK),
    ('｢', '「'), ('｣', '」'), ('ｰ', 'ー'),
];

/// Base kana that take a dakuten, with their voiced forms.
#[rustfmt::skip]
pub const VOICED_KANA: &[(char, char)] = &[
    ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'), ('ケ', 'ゲ'), ('コ', 'ゴ'),
    ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'),
    ('タ', 'ダ'), ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'),
    ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'), ('ホ', 'ボ'),
    ('ウ', 'ヴ'), ('う', 'ゔ'),
];

/// Base kana that take a handakuten, with their semi-voiced forms.
#[rustfmt::skip]
pub const SEMI_VOICED_KANA: &[(char, char)] = &[
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
];

/// Parenthesized ideographs (U+3220..=U+3243) and their bracketed text.
#[rustfmt::skip]
pub const PARENTHESIZED_IDEOGRAPHS: &[(char, &str)] = &[
    ('㈠', "(一)"), ('㈡', "(二)"), ('㈢', "(三)"), ('㈣', "(四)"),
    ('㈤', "(五)"), ('㈥', "(六)"), ('㈦', "(七)"), ('㈧', "(八)"),
    ('㈨', "(九)"), ('㈩', "(十)"), ('㈪', "(月)"), ('㈫', "(火)"),
    ('㈬', "(水)"), ('㈭', "(木)"), ('㈮', "(金)"), ('㈯', "(土)"),
    ('㈰', "(日)"), ('㈱', "(株)"), ('㈲', "(有)"), ('㈳', "(社)"),
    ('㈴', "(名)"), ('㈵', "(特)"), ('㈶', "(財)"), ('㈷', "(祝)"),
    ('㈸', "(労)"), ('㈹', "(代)"), ('㈺', "(呼)"), ('㈻', "(学)"),
    ('㈼', "(監)"), ('㈽', "(企)"), ('㈾', "(資)"), ('㈿', "(協)"),
    ('㉀', "(祭)"), ('㉁', "(休)"), ('㉂', "(自)"), ('㉃', "(至)"),
];

/// Dash and hyphen variants unified to ASCII `-`.
pub const HYPHENS: &[char] = &[
    '˗', '֊', '‐', '‑', '‒', '–', '⁃', '⁻', '₋', '−',
];

/// Long-vowel mark look-alikes unified to `ー`.
pub const LONG_VOWEL_MARKS: &[char] = &['﹣', '－', 'ｰ', '—', '―', '─', '━', 'ー'];

/// Tilde and wave-dash variants.
pub const TILDES: &[char] = &['~', '∼', '∾', '〜', '〰', '～'];

/// Space variants canonicalized to ASCII space.
pub const SPACES: &[char] = &[' ', '\u{3000}'];

/// Punctuation catalogue exposed for callers' own filtering.
#[rustfmt::skip]
pub const UNICODE_PUNCTUATION: &[&str] = &[
    // ASCII
    "!", "\"", "#", "%", "&", "'", "(", ")", "*", ",", "-", ".", "/", ":", ";", "?", "@",
    "[", "\\", "]", "_", "{", "}",
    // General punctuation
    "‐", "‑", "‒", "–", "—", "―", "‖", "‘", "’", "‚", "“", "”", "„", "†", "‡", "•", "‥",
    "…", "‧", "‰", "′", "″", "‹", "›", "※", "‼", "⁇", "⁈", "⁉",
    // CJK symbols and punctuation
    "、", "。", "〃", "〈", "〉", "《", "》", "「", "」", "『", "』", "【", "】", "〔", "〕",
    "〖", "〗", "〘", "〙", "〚", "〛", "〜", "〝", "〞", "〟", "〰", "〽", "゠", "・",
    // Full-width and half-width forms
    "！", "＂", "＃", "％", "＆", "＇", "（", "）", "＊", "，", "－", "．", "／", "：", "；",
    "？", "＠", "［", "＼", "］", "＿", "｛", "｝", "｟", "｠", "｡", "｢", "｣", "､", "･",
];

/// Lookup maps built from the slices above.
#[derive(Debug)]
pub struct Tables {
    ascii: HashMap<char, char>,
    digits: HashMap<char, char>,
    kana: HashMap<char, char>,
    voiced: HashMap<char, char>,
    semi_voiced: HashMap<char, char>,
    parenthesized: HashMap<char, &'static str>,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Return the global tables, built once on first use.
pub fn tables() -> &'static Tables {
    TABLES.get_or_init(|| Tables {
        ascii: FULLWIDTH_ASCII.iter().copied().collect(),
        digits: FULLWIDTH_DIGITS.iter().copied().collect(),
        kana: HALFWIDTH_KANA.iter().copied().collect(),
        voiced: VOICED_KANA.iter().copied().collect(),
        semi_voiced: SEMI_VOICED_KANA.iter().copied().collect(),
        parenthesized: PARENTHESIZED_IDEOGRAPHS.iter().copied().collect(),
    })
}

impl Tables {
    /// Width-fold `c`: full-width ASCII, then full-width digits, then
    /// half-width kana. First hit wins.
    pub fn fold(&self, c: char) -> Option<char> {
        self.ascii
            .get(&c)
            .or_else(|| self.digits.get(&c))
            .or_else(|| self.kana.get(&c))
            .copied()
    }

    /// Voiced form of a base kana (`カ` → `ガ`)
    pub fn voiced(&self, base: char) -> Option<char> {
        self.voiced.get(&base).copied()
    }

    /// Semi-voiced form of a base kana (`ハ` → `パ`)
    pub fn semi_voiced(&self, base: char) -> Option<char> {
        self.semi_voiced.get(&base).copied()
    }

    /// Bracketed expansion of a parenthesized ideograph (`㈱` → `(株)`)
    pub fn parenthesized(&self, c: char) -> Option<&'static str> {
        self.parenthesized.get(&c).copied()
    }
}
