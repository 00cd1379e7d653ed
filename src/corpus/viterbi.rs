// src/corpus/viterbi.rs

use crate::corpus::{Corpus, Error, Result};

/// Splits a run of concatenated words into the most probable sequence of
/// corpus words.
///
/// The input is lowercased first, so the returned pieces are lowercase and
/// concatenate back to `input.to_lowercase()`. Known words score their unigram
/// probability; an unknown span `s[j..=i]` scores
/// `(ln(1 / total) - max_word_length - 1) * (i - j)`. Every start position is
/// tried for every end position (quadratic in the input length). Among equal
/// best scores the leftmost start wins.
///
/// Fails with [`Error::DegenerateModel`] if the corpus total frequency is zero.
///
/// ```
/// use corpus_segmenter::corpus::{viterbi_split, Corpus};
///
/// let corpus = Corpus::from_words(&["white", "rabbit", "white", "hole"]);
/// assert_eq!(viterbi_split("WhiteRabbit", &corpus).unwrap(), vec!["white", "rabbit"]);
/// ```
pub fn viterbi_split(input: &str, corpus: &Corpus) -> Result<Vec<String>> {
    if corpus.total_freq() == 0 {
        return Err(Error::DegenerateModel);
    }

    let chars: Vec<char> = input.to_lowercase().chars().collect();
    let n = chars.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let unknown_penalty = (1.0 / corpus.total_freq() as f64).ln()
        - corpus.max_word_length() as f64
        - 1.0;

    // probs[k] and lasts[k] describe the best split of the first k characters.
    let mut probs = Vec::with_capacity(n + 1);
    let mut lasts = Vec::with_capacity(n + 1);
    probs.push(1.0f64);
    lasts.push(0usize);

    let mut candidate = String::new();
    for i in 0..n {
        let mut best_prob = -f64::from_bits(1);
        let mut best_start = i;

        for j in 0..=i {
            candidate.clear();
            candidate.extend(&chars[j..=i]);

            let p = corpus
                .word_prob(&candidate)
                .unwrap_or_else(|| unknown_penalty * (i - j) as f64);
            let prob = probs[j] * p;
            if prob > best_prob {
                best_prob = prob;
                best_start = j;
            }
        }

        probs.push(best_prob);
        lasts.push(best_start);
    }

    let mut words = Vec::new();
    let mut end = n;
    while end > 0 {
        let start = lasts[end];
        words.push(chars[start..end].iter().collect::<String>());
        end = start;
    }
    words.reverse();

    log::debug!("split {n} characters into {} words", words.len());
    Ok(words)
}
