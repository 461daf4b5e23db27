//! Embedded linguistic resources.
//!
//! Everything the pipeline needs at runtime is compiled into the crate:
//! abbreviations for sentence splitting, syllable counts, part-of-speech
//! lexicons, the sentiment valence lexicon, and the frequency-ranked
//! reference corpus.

pub mod abbreviations;
pub mod pos_lexicon;
pub mod sentiment_lexicon;
pub mod syllables;
