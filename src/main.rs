//! Command-line entry point — recite.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse CLI arguments.
//! 3. Load [`AppConfig`] from disk (returns default on first run).
//! 4. Dispatch the subcommand: `score` grades a transcript offline,
//!    `submit` uploads a recording to the transcription backend and grades
//!    whatever it heard.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use recite::config::AppConfig;
use recite::score::{score, ComparisonResult, Language};
use recite::session::PracticeSession;
use recite::transcribe::{AudioPayload, HttpBackend, TranscriptionBackend};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "recite", version)]
#[command(about = "Grade how faithfully a spoken sentence reproduces its reference text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grade a transcript against a reference sentence, no backend involved.
    Score {
        /// The sentence the speaker was asked to read.
        #[arg(short, long)]
        reference: String,
        /// The transcript to grade.
        #[arg(short, long)]
        transcript: String,
        /// Language selector (english, vietnamese; anything else uses
        /// baseline rules).  Defaults to the configured language.
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Upload a recording to the transcription backend and grade the result.
    Submit {
        /// Path to the recorded audio file (webm, wav, ...).
        #[arg(short, long)]
        audio: PathBuf,
        /// The sentence the speaker was asked to read.
        #[arg(short, long)]
        reference: String,
        /// Language selector.  Defaults to the configured language.
        #[arg(short, long)]
        language: Option<String>,
        /// Override the configured backend base URL.
        #[arg(long)]
        base_url: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. CLI arguments
    let cli = Cli::parse();

    // 3. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 4. Dispatch
    match cli.command {
        Command::Score {
            reference,
            transcript,
            language,
        } => {
            let language = language.unwrap_or_else(|| config.practice.language.clone());
            let result = score(&reference, &transcript, Language::parse(&language))?;
            print_comparison(&transcript, &result);
        }

        Command::Submit {
            audio,
            reference,
            language,
            base_url,
        } => {
            let mut backend_config = config.backend.clone();
            if let Some(url) = base_url {
                backend_config.base_url = url;
            }
            let language = language.unwrap_or_else(|| config.practice.language.clone());

            let bytes = std::fs::read(&audio)
                .with_context(|| format!("cannot read audio file {}", audio.display()))?;
            let file_name = audio
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("audio.webm")
                .to_string();
            let payload = AudioPayload::new(bytes, file_name);

            let backend: Arc<dyn TranscriptionBackend> =
                Arc::new(HttpBackend::from_config(&backend_config));
            let session = PracticeSession::new(backend, language);

            let outcome = session.submit(&payload, &reference).await?;
            print_comparison(&outcome.transcript, &outcome.result);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Print one graded attempt in the shape speakers see after every try.
fn print_comparison(transcript: &str, result: &ComparisonResult) {
    println!("Transcript: {transcript}");
    println!(
        "Matched:    {}/{} words",
        result.correct_words, result.total_words
    );
    println!("Accuracy:   {}", result.accuracy_percent());
    if !result.incorrect_words.is_empty() {
        println!("Incorrect:  {}", result.incorrect_words_joined());
    }
}
