use std::fs::File;
use std::sync::{Arc, Mutex};
use std::thread;

use corpus_segmenter::corpus::{
    pre_tokenizer, viterbi_split, Corpus, DictEntry, Error, TextCorpusBuilder,
};
use rustc_hash::FxHashMap;

fn english_corpus() -> Corpus {
    let file = File::open("tests/data/corpus_en.txt").unwrap();
    TextCorpusBuilder::new()
        .tokenizer(pre_tokenizer::regex_tokenize)
        .normalizer(pre_tokenizer::lowercase)
        .build(file)
        .unwrap()
}

#[test]
fn segments_text_corpus_words() {
    let corpus = english_corpus();

    assert_eq!(viterbi_split("whiterabbit", &corpus).unwrap(), vec!["white", "rabbit"]);
    assert_eq!(
        viterbi_split("thebestwaytoexplainitistodoit", &corpus).unwrap(),
        vec!["the", "best", "way", "to", "explain", "it", "is", "to", "do", "it"]
    );
    assert_eq!(
        viterbi_split("twoindividuals", &corpus).unwrap(),
        vec!["two", "individuals"]
    );
    assert_eq!(
        viterbi_split("FederalCourts", &corpus).unwrap(),
        vec!["federal", "courts"]
    );
    assert_eq!(
        viterbi_split("toreplaceon", &corpus).unwrap(),
        vec!["to", "replace", "on"]
    );
}

#[test]
fn text_corpus_counts() {
    let corpus = english_corpus();
    assert_eq!(corpus.word_freq("rabbit"), 3);
    assert_eq!(corpus.word_freq("the"), 8);
    assert_eq!(corpus.word_freq("it"), 5);
    assert_eq!(corpus.id("Alice"), None);

    let id = corpus.id("alice").unwrap();
    assert_eq!(corpus.word(id), Some("alice"));
    assert_eq!(corpus.id_freq(id), 1);
}

#[test]
fn every_added_word_resolves_both_ways() {
    let mut corpus = Corpus::new();
    let words = ["alpha", "beta", "gamma", "beta", "δέλτα"];
    for word in words {
        let id = corpus.add(word);
        assert_eq!(corpus.id(word), Some(id));
        assert_eq!(corpus.word(id), Some(word));
    }
    assert_eq!(corpus.word_freq("beta"), 2);
    assert_eq!(corpus.size(), 3 + 4);
    assert_eq!(corpus.max_word_length(), 5);
}

#[test]
fn save_and_load() {
    let corpus = english_corpus();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.bin");

    corpus.save(&path).unwrap();
    let loaded = Corpus::load(&path).unwrap();

    assert_eq!(loaded, corpus);
    assert_eq!(
        viterbi_split("whiterabbit", &loaded).unwrap(),
        vec!["white", "rabbit"]
    );
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Corpus::load(dir.path().join("nope.bin")),
        Err(Error::Io(_))
    ));
}

#[test]
fn json_dictionary_round_trip() {
    let corpus = english_corpus();

    let json = serde_json::to_string(&corpus.to_dict_with_freq()).unwrap();
    let dict: FxHashMap<String, DictEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(Corpus::from_dict_with_freq(dict).unwrap(), corpus);

    let json = serde_json::to_string(&corpus.to_dict()).unwrap();
    let dict: FxHashMap<String, usize> = serde_json::from_str(&json).unwrap();
    let ids_only = Corpus::from_dict(dict).unwrap();
    assert_eq!(ids_only.size(), corpus.size());
    assert_eq!(ids_only.total_freq(), corpus.size() as u64);
    assert_eq!(ids_only.word_freq("the"), 1);
    assert_eq!(ids_only.id("rabbit"), corpus.id("rabbit"));
}

#[test]
fn renamed_dictionary_keeps_aliases_out_of_live_export() {
    let mut corpus = Corpus::from_words(&["World", "Hello", "World"]);
    corpus.replace("Hello", "Bye").unwrap();

    let with_freq = corpus.to_dict_with_freq();
    assert!(with_freq.contains_key("Bye"));
    assert!(!with_freq.contains_key("Hello"));

    // The alias shares an ID with "Bye", so the ID-only export is no longer dense.
    assert!(matches!(
        Corpus::from_dict(corpus.to_dict()),
        Err(Error::CorruptMapping(_))
    ));
}

#[test]
fn merge_of_independent_corpora() {
    let mut left = Corpus::from_words(&["b", "a", "b"]);
    let right = Corpus::from_words(&["c", "b"]);
    left.merge(&right);

    assert_eq!(left.word_freq("b"), 3);
    assert_eq!(left.word_freq("c"), 1);
    assert_eq!(left.id("c"), Some(2));
    assert_ne!(left.id("b"), right.id("b"));
    assert_eq!(left.total_freq(), 5);
}

#[test]
fn shared_between_writers_behind_a_mutex() {
    let corpus = Arc::new(Mutex::new(Corpus::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                for i in 0..50 {
                    let word = format!("w{}", (i + t) % 10);
                    corpus.lock().unwrap().add(&word);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let corpus = corpus.lock().unwrap();
    assert_eq!(corpus.size(), 3 + 10);
    assert_eq!(corpus.total_freq(), 3 + 200);
    for id in 3..corpus.size() {
        let word = corpus.word(id).unwrap();
        assert_eq!(corpus.id(word), Some(id));
        assert_eq!(corpus.id_freq(id), 20);
    }
}

#[test]
fn empty_corpus_cannot_segment() {
    let corpus = Corpus::from_text_corpus("".as_bytes()).unwrap();
    assert!(matches!(
        viterbi_split("anything", &corpus),
        Err(Error::DegenerateModel)
    ));
}
