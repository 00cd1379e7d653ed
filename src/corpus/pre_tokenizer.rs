// Pluggable line tokenizers and token normalizers for free-text corpora.

use std::sync::LazyLock;
use regex::Regex;

/// Splits one line of text into tokens.
pub type Tokenizer = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Maps one token to its normalized form.
pub type Normalizer = Box<dyn Fn(&str) -> String + Send + Sync>;

// GPT-2 style split: contractions, letter runs, digit runs, punctuation runs.
// `unwrap()` is fine, the pattern is static.
pub static RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+").unwrap()
});

/// Default tokenizer: trims line-end characters and splits on whitespace.
pub fn whitespace_tokenize(line: &str) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenizer built on [`RE`]. Surrounding spaces are trimmed off each match
/// and whitespace-only matches are dropped.
pub fn regex_tokenize(line: &str) -> Vec<String> {
    RE.find_iter(line)
        .map(|m| m.as_str().trim_matches(['\r', '\n', ' ']))
        .filter(|s| !s.is_empty() && !s.chars().all(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

/// Default normalizer.
pub fn identity(token: &str) -> String {
    token.to_string()
}

pub fn lowercase(token: &str) -> String {
    token.to_lowercase()
}
