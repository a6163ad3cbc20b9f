//! hifz CLI — generate Quran memorization quizzes from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hifz", version, about = "Quran memorization quiz generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz set for a chapter
    Quiz {
        /// Chapter number (1-114)
        #[arg(long)]
        chapter: u16,

        /// Quiz mode: fill-blank, tap-hear, what-next, reorder, full-chapter
        #[arg(long, default_value = "fill-blank")]
        mode: String,

        /// Use every verse instead of the first few
        #[arg(long)]
        full: bool,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List chapters
    Chapters {
        /// Fetch the list from the scripture service instead of the bundled table
        #[arg(long)]
        remote: bool,

        /// Filter: short, long, popular, meccan, medinan
        #[arg(long)]
        filter: Option<String>,

        /// Match against chapter names
        #[arg(long)]
        search: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Search verse text and translations
    Search {
        /// Keyword or phrase
        #[arg(long)]
        keyword: String,

        /// Restrict to one chapter
        #[arg(long)]
        chapter: Option<u16>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the recitation URL for a verse
    Audio {
        /// Chapter number (1-114)
        #[arg(long)]
        chapter: u16,

        /// Verse number within the chapter
        #[arg(long, default_value = "1")]
        verse: u32,

        /// Reciter id (e.g. "ar.husary")
        #[arg(long)]
        reciter: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List bundled reciters
    Reciters,

    /// List available translation editions
    Editions {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hifz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            chapter,
            mode,
            full,
            format,
            config,
        } => commands::quiz::execute(chapter, mode, full, format, config).await,
        Commands::Chapters {
            remote,
            filter,
            search,
            config,
        } => commands::chapters::execute(remote, filter, search, config).await,
        Commands::Search {
            keyword,
            chapter,
            config,
        } => commands::search::execute(keyword, chapter, config).await,
        Commands::Audio {
            chapter,
            verse,
            reciter,
            config,
        } => commands::audio::execute(chapter, verse, reciter, config),
        Commands::Reciters => commands::reciters::execute(),
        Commands::Editions { config } => commands::editions::execute(config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
