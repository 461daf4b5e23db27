//! Word-level syllable counting.
//!
//! A dictionary of words the vowel-group heuristic gets wrong (mostly
//! vowel-hiatus words like "idea" and "poem"), backed by the heuristic
//! itself for everything else.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words whose syllable count the heuristic misestimates.
static SYLLABLE_EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.extend([
        ("area", 3),
        ("cafe", 2),
        ("create", 2),
        ("created", 3),
        ("creating", 3),
        ("diet", 2),
        ("fire", 2),
        ("idea", 3),
        ("ideas", 3),
        ("lion", 2),
        ("naive", 2),
        ("period", 3),
        ("poem", 2),
        ("poetry", 3),
        ("quiet", 2),
        ("radio", 3),
        ("recipe", 3),
        ("riot", 2),
        ("science", 2),
        ("society", 4),
        ("something", 2),
        ("usually", 4),
        ("violence", 3),
        ("violent", 3),
    ]);

    map
});

/// Count syllables in a single word.
///
/// Exception dictionary first, vowel-group estimation otherwise.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let lower = word.to_lowercase();
    if let Some(&count) = SYLLABLE_EXCEPTIONS.get(lower.as_str()) {
        return count;
    }
    estimate_syllables(&lower)
}

/// Vowel-group syllable estimate with silent-e and -ed adjustments.
fn estimate_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0usize;
    let mut in_group = false;
    for &c in &chars {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    let n = chars.len();
    // Final silent e ("make", "side"), except consonant + "le" where the e
    // carries the syllable ("table", "little").
    if groups > 1 && chars.last() == Some(&'e') {
        let consonant_le = n >= 3 && word.ends_with("le") && !is_vowel(chars[n - 3]);
        if !consonant_le {
            groups -= 1;
        }
    }
    // "-ed" is silent except after t/d ("walked" vs "wanted").
    if groups > 1 && word.ends_with("ed") && n >= 3 && !matches!(chars[n - 3], 't' | 'd') {
        groups -= 1;
    }

    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exception_words() {
        assert_eq!(count_syllables("idea"), 3);
        assert_eq!(count_syllables("poem"), 2);
        assert_eq!(count_syllables("science"), 2);
        assert_eq!(count_syllables("usually"), 4);
    }

    #[test]
    fn estimated_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("running"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("walked"), 1);
        assert_eq!(count_syllables("wanted"), 2);
    }

    #[test]
    fn silent_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("side"), 1);
    }

    #[test]
    fn edge_cases() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("The"), 1);
    }
}
