#![no_main]

use jpnorm_engine::{DedupOptions, NormalizeOptions, TildeMode, normalize, normalize_for_dedup};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 * 1024 {
        return;
    }

    // First byte selects the option set, the rest is the input text.
    let Some((&selector, text)) = data.split_first() else {
        let _ = normalize(data, &NormalizeOptions::default());
        return;
    };

    let tilde = match selector & 0b11 {
        0 => TildeMode::Remove,
        1 => TildeMode::Ignore,
        2 => TildeMode::Normalize,
        _ => TildeMode::Zenkaku,
    };
    let opts = NormalizeOptions {
        remove_space: selector & 0b100 == 0,
        tilde,
        repeat: usize::from((selector >> 3) & 0b11),
        parenthesized_ideographs: selector & 0b10_0000 != 0,
        ..NormalizeOptions::default()
    };

    let _ = normalize(data, &NormalizeOptions::default());
    let _ = normalize(text, &opts);
    let _ = normalize_for_dedup(text, &DedupOptions::default());
});
