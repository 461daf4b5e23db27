//! Closed-class word lists for coarse part-of-speech tagging.
//!
//! The open classes (nouns, verbs, adjectives) are mostly handled by
//! suffix heuristics in the tagger; these lists pin down the function
//! words and the irregular verb forms the suffixes cannot see.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Determiners and articles.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "all", "both", "few", "several", "many", "much", "most", "another",
        "such", "what", "which", "whose",
    ]
    .into_iter()
    .collect()
});

/// Personal, possessive, and indefinite pronouns.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
        "someone", "anyone", "everyone", "nobody", "somebody", "anybody", "everybody", "nothing",
        "anything", "everything", "one",
    ]
    .into_iter()
    .collect()
});

/// Prepositions (adpositions).
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "from", "up", "down", "out", "off", "over",
        "under", "again", "near", "of", "onto", "upon", "within", "without", "across", "behind",
        "beyond", "around", "among", "along", "toward", "towards", "despite", "except", "until",
        "since", "per",
    ]
    .into_iter()
    .collect()
});

/// Coordinating and subordinating conjunctions.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "unless", "if", "than", "whether", "once", "when", "whenever", "where",
        "wherever", "as",
    ]
    .into_iter()
    .collect()
});

/// Auxiliaries and common irregular verb forms.
pub static VERB_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Auxiliaries and modals
    set.extend([
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "ought",
    ]);

    // Irregular forms the suffix rules cannot recognize
    set.extend([
        "go", "goes", "went", "gone", "say", "says", "said", "get", "got", "gotten", "make",
        "makes", "made", "know", "knows", "knew", "known", "think", "thinks", "thought", "take",
        "takes", "took", "taken", "see", "sees", "saw", "seen", "come", "comes", "came", "find",
        "finds", "found", "give", "gives", "gave", "given", "tell", "tells", "told", "become",
        "became", "show", "shows", "showed", "shown", "leave", "leaves", "left", "feel", "feels",
        "felt", "put", "puts", "bring", "brings", "brought", "begin", "begins", "began", "begun",
        "keep", "keeps", "kept", "hold", "holds", "held", "write", "writes", "wrote", "written",
        "stand", "stands", "stood", "hear", "hears", "heard", "let", "lets", "mean", "means",
        "meant", "set", "sets", "meet", "meets", "met", "run", "runs", "ran", "pay", "pays",
        "paid", "sit", "sits", "sat", "speak", "speaks", "spoke", "spoken", "lie", "lies", "lay",
        "lain", "lead", "leads", "led", "read", "reads", "grow", "grows", "grew", "grown", "lose",
        "loses", "lost", "fall", "falls", "fell", "fallen", "send", "sends", "sent", "build",
        "builds", "built", "understand", "understood", "draw", "draws", "drew", "drawn", "break",
        "breaks", "broke", "broken", "spend", "spends", "spent", "cut", "cuts", "rise", "rises",
        "rose", "risen", "drive", "drives", "drove", "driven", "buy", "buys", "bought", "wear",
        "wears", "wore", "worn", "choose", "chooses", "chose", "chosen", "eat", "eats", "ate",
        "eaten", "fly", "flies", "flew", "flown",
    ]);

    set
});

/// Adverbs without the -ly suffix.
pub static PLAIN_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "very", "too", "also", "just", "now", "then", "here", "there", "always", "never",
        "often", "sometimes", "soon", "already", "still", "yesterday", "today", "tomorrow",
        "almost", "quite", "rather", "perhaps", "maybe", "away", "back", "even", "far", "fast",
        "hard", "late", "well", "ever", "together", "instead", "indeed", "anyway", "however",
        "therefore", "moreover", "meanwhile", "nevertheless", "thus",
    ]
    .into_iter()
    .collect()
});

/// Spelled-out numerals.
pub static NUMBER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
        "hundred", "thousand", "million", "billion", "first", "second", "third",
    ]
    .into_iter()
    .collect()
});

/// Common adjectives with no telltale suffix.
pub static PLAIN_ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "new", "old", "great", "high", "small", "large", "big", "long", "little", "own",
        "other", "right", "wrong", "young", "important", "bad", "same", "able", "best", "better",
        "low", "late", "hard", "early", "strong", "free", "true", "false", "full", "whole",
        "easy", "clear", "recent", "certain", "main", "only", "real", "sure", "dark", "light",
        "warm", "cold", "hot", "deep", "short", "common", "poor", "rich", "simple", "fast",
        "slow", "quick", "happy", "sad",
    ]
    .into_iter()
    .collect()
});
