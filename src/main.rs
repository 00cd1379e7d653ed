// main.rs
//
// Builds a corpus from a free-text file or a one-gram file and writes
// `corpus.bin` (bincode) and `vocab.json` (word -> {id, freq}, in ID order).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde_json::{json, Map, Value};

use corpus_segmenter::corpus::{pre_tokenizer, Corpus, Result, TextCorpusBuilder};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    /// Free text, one or more words per line.
    Text,
    /// `word<TAB>count` lines, loaded on top of the sentinel words.
    OneGram,
}

#[derive(Parser, Debug)]
#[command(name = "build_corpus", about = "Builds a word frequency corpus")]
struct Args {
    /// Input file.
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Input format.
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: InputFormat,

    /// Output directory.
    #[arg(short = 'o', long, default_value = "corpus_output")]
    output_dir: PathBuf,

    /// Lowercases every token of a text corpus.
    #[arg(short = 'l', long)]
    lowercase: bool,

    /// Splits text on letters, digits and punctuation instead of whitespace.
    #[arg(short = 'r', long)]
    regex_tokenizer: bool,
}

fn build(args: &Args) -> Result<Corpus> {
    let file = File::open(&args.input)?;
    match args.format {
        InputFormat::Text => {
            let mut builder = TextCorpusBuilder::new();
            if args.lowercase {
                builder = builder.normalizer(pre_tokenizer::lowercase);
            }
            if args.regex_tokenizer {
                builder = builder.tokenizer(pre_tokenizer::regex_tokenize);
            }
            builder.build(file)
        }
        InputFormat::OneGram => {
            let mut corpus = Corpus::new();
            corpus.load_one_gram(file)?;
            Ok(corpus)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let corpus = build(&args)?;
    fs::create_dir_all(&args.output_dir)?;
    corpus.save(args.output_dir.join("corpus.bin"))?;

    // Entries in ascending ID order.
    let mut ordered_vocab = Map::new();
    for (id, word, freq) in corpus.iter() {
        ordered_vocab.insert(word.to_string(), json!({ "id": id, "freq": freq }));
    }
    let mut root = Map::new();
    root.insert("vocab".to_string(), Value::Object(ordered_vocab));

    let vocab_file = File::create(args.output_dir.join("vocab.json"))?;
    let mut writer = BufWriter::new(vocab_file);
    serde_json::to_writer_pretty(&mut writer, &Value::Object(root))?;
    writer.flush()?;

    log::info!(
        "wrote {} words (total frequency {}) to {}",
        corpus.size(),
        corpus.total_freq(),
        args.output_dir.display()
    );
    Ok(())
}
