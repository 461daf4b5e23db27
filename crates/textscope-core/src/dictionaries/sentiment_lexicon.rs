//! Valence lexicon for sentiment scoring.
//!
//! Word valences on the [-4, 4] scale, plus the negators and booster
//! adverbs the scorer consults. Valences follow the usual social-media
//! sentiment lexicon conventions: magnitude encodes intensity.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Word → valence. Positive values are positive sentiment.
pub static VALENCES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Strongly positive
    map.extend([
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("brilliant", 2.8),
        ("delighted", 2.9),
        ("excellent", 2.7),
        ("fantastic", 2.6),
        ("magnificent", 2.9),
        ("outstanding", 2.8),
        ("perfect", 2.7),
        ("superb", 2.9),
        ("wonderful", 2.7),
        ("love", 3.2),
        ("loved", 2.9),
        ("loves", 2.9),
        ("joy", 2.8),
        ("joyful", 2.9),
        ("thrilled", 2.8),
        ("triumph", 2.4),
    ]);

    // Positive
    map.extend([
        ("admire", 2.0),
        ("beautiful", 2.4),
        ("calm", 1.3),
        ("charming", 2.1),
        ("cheerful", 2.3),
        ("comfort", 1.6),
        ("confident", 2.2),
        ("eager", 1.5),
        ("enjoy", 2.0),
        ("enjoyed", 2.0),
        ("fair", 1.5),
        ("fond", 1.9),
        ("fortunate", 1.9),
        ("free", 1.8),
        ("friend", 2.2),
        ("friendly", 2.2),
        ("fun", 2.3),
        ("generous", 2.3),
        ("gentle", 1.9),
        ("glad", 2.0),
        ("good", 1.9),
        ("grateful", 2.3),
        ("happy", 2.7),
        ("helpful", 1.8),
        ("honest", 2.3),
        ("hope", 1.9),
        ("hopeful", 2.0),
        ("impressive", 2.2),
        ("interesting", 1.7),
        ("kind", 2.4),
        ("like", 1.5),
        ("liked", 1.7),
        ("likes", 1.7),
        ("lucky", 1.8),
        ("nice", 1.8),
        ("peace", 2.5),
        ("peaceful", 2.2),
        ("pleasant", 2.3),
        ("pleased", 2.1),
        ("proud", 2.1),
        ("relief", 1.9),
        ("safe", 1.9),
        ("satisfied", 1.6),
        ("smile", 2.0),
        ("strong", 2.3),
        ("success", 2.7),
        ("successful", 2.6),
        ("sweet", 2.0),
        ("thank", 1.9),
        ("thanks", 1.9),
        ("useful", 1.9),
        ("warm", 1.7),
        ("welcome", 2.0),
        ("win", 2.8),
        ("wins", 2.7),
        ("wise", 2.2),
        ("worthy", 1.9),
    ]);

    // Negative
    map.extend([
        ("afraid", -2.2),
        ("alone", -1.0),
        ("angry", -2.3),
        ("annoyed", -1.8),
        ("anxious", -1.9),
        ("ashamed", -2.1),
        ("bad", -2.5),
        ("bitter", -1.8),
        ("bored", -1.3),
        ("boring", -1.3),
        ("broken", -1.6),
        ("cruel", -2.6),
        ("danger", -2.4),
        ("dangerous", -2.1),
        ("dark", -0.7),
        ("dead", -3.3),
        ("death", -2.9),
        ("difficult", -1.5),
        ("dirty", -1.7),
        ("disappointed", -2.1),
        ("doubt", -1.2),
        ("dull", -1.2),
        ("enemy", -2.4),
        ("fail", -2.5),
        ("failed", -2.3),
        ("failure", -2.6),
        ("fear", -2.2),
        ("fight", -1.6),
        ("greedy", -2.0),
        ("grief", -2.4),
        ("guilty", -2.0),
        ("hard", -0.4),
        ("harm", -2.3),
        ("hurt", -2.0),
        ("ignorant", -1.9),
        ("ill", -1.8),
        ("jealous", -1.9),
        ("lonely", -1.9),
        ("loss", -1.7),
        ("lost", -1.3),
        ("mad", -2.1),
        ("miserable", -2.5),
        ("pain", -2.3),
        ("painful", -2.2),
        ("poor", -1.8),
        ("problem", -1.4),
        ("sad", -2.1),
        ("scared", -2.0),
        ("selfish", -2.1),
        ("sick", -1.9),
        ("sorrow", -2.2),
        ("sorry", -0.9),
        ("stupid", -2.4),
        ("tired", -1.2),
        ("trouble", -1.8),
        ("ugly", -2.3),
        ("unhappy", -2.1),
        ("upset", -1.9),
        ("weak", -1.7),
        ("worried", -1.8),
        ("worry", -1.7),
        ("wrong", -1.8),
    ]);

    // Strongly negative
    map.extend([
        ("awful", -2.8),
        ("disaster", -2.9),
        ("disgusting", -2.9),
        ("dreadful", -2.7),
        ("evil", -3.0),
        ("hate", -2.7),
        ("hated", -2.6),
        ("hates", -2.6),
        ("horrible", -2.8),
        ("horror", -2.7),
        ("murder", -3.2),
        ("terrible", -2.7),
        ("terror", -3.0),
        ("tragedy", -2.8),
        ("tragic", -2.7),
        ("war", -2.9),
        ("worst", -3.1),
    ]);

    map
});

/// Words that invert the valence of a nearby lexicon word.
pub static NEGATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "neither", "nobody", "nothing", "cannot", "can't", "don't",
        "won't", "isn't", "wasn't", "aren't", "weren't", "doesn't", "didn't", "couldn't",
        "shouldn't", "wouldn't", "hardly", "barely", "without",
    ]
    .into_iter()
    .collect()
});

/// Degree adverbs scaling a following valence up or down.
///
/// The value is added to (or, for dampeners, subtracted from) the
/// magnitude of the boosted word.
pub static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.extend([
        ("absolutely", 0.293),
        ("completely", 0.293),
        ("deeply", 0.293),
        ("especially", 0.293),
        ("extremely", 0.293),
        ("highly", 0.293),
        ("incredibly", 0.293),
        ("really", 0.293),
        ("remarkably", 0.293),
        ("so", 0.293),
        ("totally", 0.293),
        ("truly", 0.293),
        ("utterly", 0.293),
        ("very", 0.293),
    ]);
    map.extend([
        ("almost", -0.293),
        ("barely", -0.293),
        ("fairly", -0.293),
        ("kind", -0.293),
        ("kinda", -0.293),
        ("marginally", -0.293),
        ("partly", -0.293),
        ("scarcely", -0.293),
        ("slightly", -0.293),
        ("somewhat", -0.293),
        ("sort", -0.293),
    ]);
    map
});
