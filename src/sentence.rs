//! Sentence segmentation over normalized token streams.
//!
//! The verse sampler works on the output of the normalization pipeline:
//! tokens separated by single spaces, punctuation standing alone. A
//! sentence is a run of tokens up to (but excluding) a terminator token,
//! with any leading non-word tokens skipped.

/// Tokens that end a sentence.
const TERMINATORS: [&str; 4] = [".", "!", "?", "…"];

fn is_terminator(token: &str) -> bool {
    TERMINATORS.contains(&token)
}

/// True for tokens made entirely of alphanumeric characters.
///
/// Hyphenated compounds (`кто-то`) are not words by this definition; they
/// still appear in sentences but do not count toward effective length.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Splits a normalized token stream into sentences.
///
/// Leading non-word tokens of each sentence are skipped, terminator tokens
/// are consumed but not included. Sentences can be empty (e.g. a corpus
/// ending in stray punctuation); callers filter by [`effective_len`].
pub fn split_sentences<'a>(words: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut sentences = Vec::new();
    let mut i = 0;
    while i < words.len() {
        while i < words.len() && !is_word(words[i]) {
            i += 1;
        }
        let mut sentence = Vec::new();
        while i < words.len() && !is_terminator(words[i]) {
            sentence.push(words[i]);
            i += 1;
        }
        sentences.push(sentence);
    }
    sentences
}

/// Count of word tokens in a sentence; interior punctuation like commas is
/// excluded.
pub fn effective_len(sentence: &[&str]) -> usize {
    sentence.iter().filter(|token| is_word(token)).count()
}
