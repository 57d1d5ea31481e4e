//! Niihau - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds a trie from the
//! configured word list and runs the requested command.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use niihau_lib::config::{ConfigLoader, LogConfig, NiihauConfig, OutputFormat, Validate, ENV_PREFIX};
use niihau_lib::dictionary::{build_trie, load_vocabulary};
use niihau_lib::error::{
    report_error, set_error_reporter, ErrorContext, NiihauError, NiihauResult,
    TracingErrorReporter,
};
use niihau_lib::session::{Completion, Session};
use niihau_lib::NiihauTrie;
use tracing::{error, info};

/// Exit status when the interactive loop has no console to read from.
const CONSOLE_UNAVAILABLE_EXIT_CODE: u8 = 99;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list with one word per line (overrides dictionary.path)
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Maximum number of completions printed per prefix, 0 for unlimited
    #[clap(long)]
    max_results: Option<usize>,

    /// Output format for results
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// Run the interactive loop even when stdin is not a terminal
    #[clap(long)]
    no_terminal_check: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

impl Args {
    /// Applies command line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut NiihauConfig) {
        if let Some(path) = &self.dictionary {
            config.dictionary.path = Some(path.clone());
        }
        if let Some(max_results) = self.max_results {
            config.session.max_results = max_results;
        }
        if let Some(format) = self.format {
            config.session.format = format;
        }
        if self.no_terminal_check {
            config.session.require_terminal = false;
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read prefixes interactively and print their completions
    Repl,

    /// Print the completions of a single prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Check whether a word is stored
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Print every stored word, one per line
    Dump,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr; stdout carries results.
fn init_logging(config: &LogConfig) -> NiihauResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn gen_config(output: &Path) -> NiihauResult<()> {
    let default_config = NiihauConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| NiihauError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

fn load_trie(config: &NiihauConfig) -> NiihauTrie {
    let vocabulary = load_vocabulary(&config.dictionary);
    build_trie(&vocabulary)
}

fn run(mut args: Args) -> NiihauResult<ExitCode> {
    let command = args.command.take().unwrap_or(Command::Repl);

    if let Command::GenConfig { output } = &command {
        gen_config(output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load()?;
    args.apply(&mut config);
    config.validate()?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match &command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(ExitCode::SUCCESS)
        }
        Command::Repl => {
            if config.session.require_terminal && !io::stdin().is_terminal() {
                error!("Could not find a console, quitting!");
                return Ok(ExitCode::from(CONSOLE_UNAVAILABLE_EXIT_CODE));
            }

            let trie = load_trie(&config);
            info!("Inserted {} words into our Trie", trie.len());

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(&trie, config.session.clone(), stdin.lock(), stdout.lock());
            session.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Complete { prefix } => {
            let trie = load_trie(&config);
            let completion = Completion::resolve(&trie, prefix, config.session.result_limit());
            println!("{}", completion.render(config.session.format)?);
            Ok(if completion.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Lookup { word } => {
            let trie = load_trie(&config);
            match trie.lookup(word) {
                Some(word) => {
                    println!("{word}");
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            }
        }
        Command::Dump => {
            let trie = load_trie(&config);
            let mut out = io::stdout().lock();
            for word in trie.words() {
                writeln!(out, "{word}")?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { .. } => Ok(ExitCode::SUCCESS),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            report_error(ErrorContext::new(e, "niihau"));
            ExitCode::FAILURE
        }
    }
}
