//! Partial-ratio fuzzy scoring.
//!
//! A partial-ratio score measures the best-aligned substring match between
//! two strings on a 0–100 scale: the shorter string is slid across every
//! equal-length character window of the longer one, and the best
//! normalized-Levenshtein similarity wins. This makes a short voice query
//! score 100 against any candidate that contains it verbatim
//! (`"sony"` vs `"Sony WH-1000XM4"`), which plain edit distance would
//! punish for the length difference.

/// Score two strings on a 0–100 partial-ratio scale.
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
/// Either side being empty scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let needle: String = short.iter().collect();
    let window = short.len();

    let mut best = 0.0_f64;
    for start in 0..=(long.len() - window) {
        let slice: String = long[start..start + window].iter().collect();
        let score = strsim::normalized_levenshtein(&needle, &slice);
        if score > best {
            best = score;
        }
        if best >= 1.0 {
            break;
        }
    }

    (best * 100.0).round() as u8
}
