use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use lexmill_core::{ExtractOptions, ExtractReport, Strategy, WordPair};
use lexmill_fb2::extract_file;
use lexmill_text::{resolver_for, tokenize, ValidityFilter, VocabularyExtractor};
use lexmill_translate::{MyMemoryTranslator, TranslationStage};

// ─── CLI ────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "lexmill",
    about = "Mine a sorted new-word vocabulary from an FB2 book, optionally paired with translations"
)]
struct Cli {
    /// FB2 book to process
    input: PathBuf,

    /// Newline-delimited sorted word list output
    #[arg(long, default_value = "result/new_words.txt")]
    words_out: PathBuf,

    /// CSV (word,translation) output; enables the translation stage
    #[arg(long)]
    pairs_out: Option<PathBuf>,

    /// Source language code
    #[arg(long, default_value = "en")]
    source_lang: String,

    /// Target translation language code
    #[arg(long, default_value = "uk")]
    lang: String,

    /// Base-form strategy: "stem" or "lemma"
    #[arg(long, default_value = "stem")]
    strategy: String,

    /// Keep stopwords in the vocabulary
    #[arg(long)]
    keep_stopwords: bool,

    /// Cap on how many words reach the translation stage
    #[arg(long)]
    max_words: Option<usize>,
}

// ─── Output writers ─────────────────────────────────────────────

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn write_word_list(path: &Path, words: &[String]) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()
}

fn write_pairs_csv(path: &Path, pairs: &[WordPair]) -> Result<(), String> {
    ensure_parent_dir(path).map_err(|e| format!("Cannot create output dir: {}", e))?;
    let file = File::create(path).map_err(|e| format!("Cannot create {:?}: {}", path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for pair in pairs {
        writer
            .write_record([&pair.word, &pair.translation])
            .map_err(|e| format!("CSV write failed: {}", e))?;
    }
    writer.flush().map_err(|e| format!("CSV flush failed: {}", e))
}

fn print_report(report: &ExtractReport) {
    println!("  Tokens processed:  {}", report.tokens_seen);
    println!("  Tokens kept:       {}", report.tokens_kept);
    println!("  Unique base forms: {}", report.unique_words);
}

// ─── Main ───────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let options = ExtractOptions {
        strategy: match Strategy::parse(&cli.strategy) {
            Some(s) => s,
            None => {
                eprintln!(
                    "Error: unknown strategy '{}' (expected \"stem\" or \"lemma\")",
                    cli.strategy
                );
                process::exit(1);
            }
        },
        filter_stopwords: !cli.keep_stopwords,
        max_words: cli.max_words,
    };

    if !cli.input.exists() {
        eprintln!("Error: file {:?} not found", cli.input);
        process::exit(1);
    }

    println!("Parsing FB2 file {:?} ...", cli.input);
    let text = match extract_file(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {:?}: {}", cli.input, e);
            process::exit(1);
        }
    };
    if text.is_empty() {
        eprintln!("Error: no text extracted from {:?}", cli.input);
        process::exit(1);
    }
    println!("Extracted {} characters of text.", text.chars().count());

    println!("Tokenizing text...");
    let tokens = tokenize(&text);

    let filter = if options.filter_stopwords {
        ValidityFilter::english()
    } else {
        ValidityFilter::without_stopwords()
    };
    let mut extractor = VocabularyExtractor::new(filter, resolver_for(options.strategy));

    println!(
        "Extracting vocabulary ({} strategy)...",
        extractor.resolver_name()
    );
    let (vocab, report) = extractor.extract(&tokens);

    if let Err(e) = write_word_list(&cli.words_out, &vocab.to_vec()) {
        eprintln!("Error: cannot write {:?}: {}", cli.words_out, e);
        process::exit(1);
    }
    println!("Word list saved to {:?}", cli.words_out);

    if let Some(pairs_out) = &cli.pairs_out {
        let selected = match options.max_words {
            Some(max) if vocab.len() > max => {
                println!("Limiting translation to the first {} words...", max);
                vocab.truncated(max)
            }
            _ => vocab.to_vec(),
        };

        let backend = MyMemoryTranslator::new(&cli.source_lang, &cli.lang);
        let mut stage = TranslationStage::new(Box::new(backend));

        println!(
            "Translating {} words to '{}' via {}...",
            selected.len(),
            cli.lang,
            stage.backend_name()
        );
        let pairs = stage.translate_all(&selected);

        if let Err(e) = write_pairs_csv(pairs_out, &pairs) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        println!("Saved {} word pairs to {:?}", pairs.len(), pairs_out);
        if stage.failures() > 0 {
            println!(
                "  {} word(s) kept their source form after failed translation",
                stage.failures()
            );
        }
    }

    println!("\nProcessing complete!");
    print_report(&report);
}
