//! Tokenization: sentence segmentation and word tokenization.
//!
//! Words come from Unicode word-boundary segmentation and keep punctuation
//! tokens, so `word_count` matches what the analyzers see. Sentences come
//! from a character scan that is aware of abbreviations, initials, decimal
//! numbers, and URLs. Both have infallible fallbacks (whitespace splitting
//! for words, period splitting for sentences) used when the primary path
//! produces nothing for non-empty input.
//!
//! The fallback paths segment slightly differently from the primary ones
//! (hyphenated and punctuation-attached forms stay glued to their word);
//! this divergence is accepted.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::dictionaries::abbreviations::is_abbreviation;

/// A word- or punctuation-level unit of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw segment.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw text of the token.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Whether the token consists entirely of letters.
    pub fn is_alphabetic(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(char::is_alphabetic)
    }

    /// Lowercase form of the token.
    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }

    /// Lowercase form, only for alphabetic tokens.
    pub fn alpha_lower(&self) -> Option<String> {
        self.is_alphabetic().then(|| self.lower())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tokenize text into word and punctuation tokens.
///
/// Whitespace segments are dropped; everything else (words, contractions,
/// punctuation runs) becomes a [`Token`].
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize_words(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = text
        .split_word_bounds()
        .filter(|seg| !seg.trim().is_empty())
        .map(Token::new)
        .collect();

    if tokens.is_empty() && !text.trim().is_empty() {
        return fallback_split_words(text);
    }
    tokens
}

/// Whitespace-splitting word fallback. Never fails.
pub fn fallback_split_words(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::new).collect()
}

/// Lowercase alphabetic tokens, in order.
pub fn alpha_lower_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().filter_map(Token::alpha_lower).collect()
}

/// Original-case alphabetic tokens, in order.
pub fn alpha_tokens(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().filter(|t| t.is_alphabetic()).collect()
}

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Regex for URLs and email addresses.
static URL_OR_EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)\S+|\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("valid regex")
});

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\.(?:[A-Z]\.)*").expect("valid regex"));

/// Split text into sentences.
///
/// Character scan with boundary heuristics: `.` after an abbreviation,
/// an initial, a decimal number, an ellipsis, or inside a URL does not end
/// a sentence; `!` and `?` almost always do. Falls back to
/// [`fallback_split_sentences`] if the scan yields nothing for non-empty
/// input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && ends_sentence(&chars, i, &current) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    if sentences.is_empty() {
        return fallback_split_sentences(text);
    }
    sentences
}

/// Period-splitting sentence fallback. Never fails.
pub fn fallback_split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decide whether the terminator at `pos` closes the current sentence.
fn ends_sentence(chars: &[char], pos: usize, current: &str) -> bool {
    if pos == chars.len() - 1 {
        return true;
    }

    let next = next_visible_char(chars, pos);

    if chars[pos] == '!' || chars[pos] == '?' {
        // Keep quoted exclamations attached when the quote continues.
        return next.is_none_or(|c| !c.is_lowercase());
    }

    let before = word_before(chars, pos);
    if looks_like_abbreviation(&before) || looks_like_initial(&before) {
        return false;
    }
    if current.ends_with("...") || tail_is_decimal(current) || tail_is_url_or_email(current) {
        return false;
    }
    // "3.14" with the digits split across the boundary.
    if next.is_some_and(|c| c.is_ascii_digit())
        && before.chars().last().is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    match next {
        Some(c) if c.is_uppercase() => true,
        Some(c) if c.is_lowercase() => false,
        _ => true,
    }
}

/// First non-whitespace character after `pos`.
fn next_visible_char(chars: &[char], pos: usize) -> Option<char> {
    chars[pos + 1..].iter().copied().find(|c| !c.is_whitespace())
}

/// The word immediately before the terminator at `pos`, including any
/// embedded periods (so "U.S." comes back whole).
fn word_before(chars: &[char], pos: usize) -> String {
    let mut end = pos;
    while end > 0 && (chars[end - 1].is_whitespace() || chars[end - 1] == '.') {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '.') {
        start -= 1;
    }
    chars[start..end].iter().collect()
}

fn looks_like_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let clean = word.trim_end_matches('.');
    is_abbreviation(clean)
        || (clean.len() == 1 && clean.chars().next().is_some_and(char::is_uppercase))
}

fn looks_like_initial(word: &str) -> bool {
    INITIALS_PATTERN.is_match(word)
}

fn tail_is_decimal(sentence: &str) -> bool {
    let tail = last_chars(sentence, 10);
    DECIMAL_PATTERN.is_match(&tail)
}

fn tail_is_url_or_email(sentence: &str) -> bool {
    let tail = last_chars(sentence, 50);
    URL_OR_EMAIL_PATTERN.is_match(&tail)
}

fn last_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

/// Characters that attach to the preceding token when reassembling text.
const NO_SPACE_BEFORE: &[char] = &[
    '.', ',', ';', ':', '!', '?', '%', ')', ']', '}', '\u{2019}', '\u{201d}',
];

/// Characters that attach to the following token.
const NO_SPACE_AFTER: &[char] = &['(', '[', '{', '\u{2018}', '\u{201c}', '$', '#'];

/// Reassemble tokens into readable text with punctuation-aware spacing.
///
/// Total function: any token sequence produces a string. Space-joining is
/// what remains when none of the spacing rules apply.
pub fn detokenize(tokens: &[String]) -> String {
    let mut out = String::new();
    let mut glue_next = false;

    for token in tokens {
        let attach = glue_next
            || out.is_empty()
            || token
                .chars()
                .next()
                .is_some_and(|c| NO_SPACE_BEFORE.contains(&c));
        if !attach {
            out.push(' ');
        }
        out.push_str(token);
        glue_next = token
            .chars()
            .last()
            .is_some_and(|c| NO_SPACE_AFTER.contains(&c));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_keep_punctuation_tokens() {
        let tokens = tokenize_words("The cat sat, then ran.");
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["The", "cat", "sat", ",", "then", "ran", "."]);
    }

    #[test]
    fn contractions_stay_whole() {
        let tokens = tokenize_words("don't stop");
        assert_eq!(tokens[0].text(), "don't");
        assert!(!tokens[0].is_alphabetic());
        assert!(tokens[1].is_alphabetic());
    }

    #[test]
    fn alpha_lower_filters_and_lowercases() {
        let tokens = tokenize_words("The CAT, sat 3 times.");
        assert_eq!(
            alpha_lower_tokens(&tokens),
            vec!["the", "cat", "sat", "times"]
        );
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("The cat sat. The cat ran.");
        assert_eq!(sentences, vec!["The cat sat.", "The cat ran."]);
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went home. He slept.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimals_not_split() {
        let sentences = split_sentences("It costs 3.14 dollars. Cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Really? I had no idea! Amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(tokenize_words("").is_empty());
    }

    #[test]
    fn fallback_split_is_total() {
        assert_eq!(fallback_split_sentences("a. b. "), vec!["a", "b"]);
        assert_eq!(fallback_split_words("a b").len(), 2);
        assert!(fallback_split_sentences("").is_empty());
    }

    #[test]
    fn sentence_tokens_recover_global_tokens() {
        let text = "The cat sat. The cat ran.";
        let global = tokenize_words(text).len();
        let per_sentence: usize = split_sentences(text)
            .iter()
            .map(|s| tokenize_words(s).len())
            .sum();
        assert_eq!(global, per_sentence);
    }

    #[test]
    fn detokenize_handles_punctuation_spacing() {
        let tokens: Vec<String> = ["The", "cat", ",", "at", "last", ",", "sat", "."]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(detokenize(&tokens), "The cat, at last, sat.");
    }

    #[test]
    fn detokenize_handles_brackets() {
        let tokens: Vec<String> = ["He", "left", "(", "quietly", ")", "."]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(detokenize(&tokens), "He left (quietly).");
    }
}
