//! Abbreviations that do not end a sentence when followed by a period.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase abbreviations checked during sentence boundary detection.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "hon", "esq", "capt", "col",
        "gen", "lt", "maj", "sgt", "sen", "rep", "gov", "pres", "st",
    ]);

    // Latin and editorial
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s", "et al", "al",
    ]);

    // Calendar
    set.extend([
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        "mon", "tue", "wed", "thu", "thurs", "fri", "sat", "sun", "a.m", "p.m",
    ]);

    // Places and addresses
    set.extend([
        "ave", "blvd", "rd", "ln", "apt", "ste", "dept", "u.s", "u.k", "u.s.a", "e.u",
    ]);

    // Organizations and measures
    set.extend([
        "inc", "corp", "ltd", "llc", "co", "bros", "assn", "intl", "oz", "lb", "lbs", "kg", "km",
        "ft", "mi", "no", "vol", "pp", "fig", "est", "approx", "min", "max", "avg",
    ]);

    set
});

/// Whether `word` (lowercased, no trailing period) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_abbreviations() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("e.g"));
    }

    #[test]
    fn ordinary_words_are_not() {
        assert!(!is_abbreviation("cat"));
        assert!(!is_abbreviation("home"));
    }
}
