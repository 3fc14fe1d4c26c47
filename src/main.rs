use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use rusmorph::{Language, MorphAnalyzer};
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Subcommand)]
enum Commands {
    /// All inflected forms of the word's lexeme.
    Forms { word: String },
    /// The word's primary OpenCorpora tag.
    Tag { word: String },
    /// Whether the word resolves to a dictionary entry.
    Known { word: String },
    /// All concordant declensions of a short phrase.
    Phrase {
        #[clap(value_delimiter = ' ')]
        phrase: Vec<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory holding words.dawg, paradigms.array, suffixes.json,
    /// gramtab-opencorpora-int.json and meta.json.
    #[clap(long = "dict", default_value = "data/dict")]
    dict: PathBuf,

    /// Dictionary language; cross-checked against meta.json.
    #[clap(long = "language", value_enum, default_value_t = Language::Russian)]
    language: Language,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let Args { dict, language, command } = Args::parse();

    let start = std::time::Instant::now();
    let analyzer = MorphAnalyzer::open(dict, language)?;
    debug!("dictionary loaded in {:?}", start.elapsed());

    match command {
        Commands::Forms { word } => {
            for form in analyzer.word_forms(&word) {
                println!("{form}");
            }
        }
        Commands::Tag { word } => println!("{}", analyzer.tag(&word)),
        Commands::Known { word } => println!("{}", analyzer.is_known(&word)),
        Commands::Phrase { phrase } => {
            let phrase = phrase.join(" ");
            for form in analyzer.phrase_forms_concordant(&phrase) {
                println!("{form}");
            }
        }
    };

    Ok(())
}
