// src/segment_main.rs
//
// Splits every line of the input into words using a corpus saved by
// `build_corpus`, writing one space-joined line per input line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use corpus_segmenter::corpus::{viterbi_split, Corpus, Result};

#[derive(Parser, Debug)]
#[command(name = "segment_main", about = "Splits concatenated words")]
struct Args {
    /// Corpus written by build_corpus (corpus.bin).
    #[arg(short = 'c', long)]
    corpus: PathBuf,

    /// Input file; reads stdin when omitted.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let corpus = Corpus::load(&args.corpus)?;
    log::info!("loaded corpus of {} words", corpus.size());

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = BufWriter::new(io::stdout().lock());

    let mut total_words = 0usize;
    for line in reader.lines() {
        let line = line?;
        let words = viterbi_split(line.trim_end_matches(['\r', '\n']), &corpus)?;
        total_words += words.len();
        writeln!(out, "{}", words.join(" "))?;
    }
    out.flush()?;

    eprintln!("total words written: {}", total_words);
    Ok(())
}
