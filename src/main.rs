//! Makai Suggest - Main entrypoint.
//!
//! This is the main entry point for the Makai Suggest application. It
//! loads configuration, initializes the logging system from the loaded log
//! section, and runs an interactive autocomplete session over standard
//! input.

mod config;
mod data_structures;
mod engine;
mod error;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use engine::SuggestEngine;
use error::{set_error_reporter, MakaiError, MakaiResult, TracingErrorReporter};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for Makai Suggest.
#[derive(Parser, Debug)]
#[clap(name = "Makai Suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run an interactive suggestion session
    Repl,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Pick the configuration file to load.
///
/// An explicit `--config` path always wins; otherwise the shipped default
/// is used when it exists. `None` means defaults plus environment
/// overrides only.
fn resolve_config_path(cli: Option<PathBuf>, default: &Path) -> Option<PathBuf> {
    cli.or_else(|| default.exists().then(|| default.to_path_buf()))
}

/// Build the log filter directives.
///
/// An explicit `RUST_LOG` directive wins so operators can always override a
/// session; otherwise the configured level applies.
fn log_filter(env_directive: Option<&str>, level: &str) -> tracing_subscriber::EnvFilter {
    match env_directive {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::new(level),
    }
}

/// Initialize the logging system from the loaded log configuration.
fn init_logging(log: &config::LogConfig) -> MakaiResult<()> {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref(), &log.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Seed the engine's vocabulary from a dictionary file, one word per line.
///
/// Blank lines are skipped and trailing whitespace is trimmed; everything
/// else is stored as-is. Returns the number of words added.
fn seed_from_dictionary(engine: &mut SuggestEngine, path: &Path) -> MakaiResult<usize> {
    let file = std::fs::File::open(path).map_err(MakaiError::Io)?;
    let mut count = 0;
    for line in std::io::BufReader::new(file).lines() {
        let word = line.map_err(MakaiError::Io)?;
        let word = word.trim_end();
        if !word.is_empty() {
            engine.add(word);
            count += 1;
        }
    }
    Ok(count)
}

/// Run the interactive suggestion session over stdin/stdout.
///
/// Commands: `add <word>`, `find <prefix>`, `has <word>`, `remove <word>`,
/// `list`, `quit`.
fn run_session(engine: &mut SuggestEngine) -> MakaiResult<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!(
        "Makai Suggest {} - type 'help' for commands",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        print!("> ");
        stdout.flush().map_err(MakaiError::Io)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(MakaiError::Io)? == 0 {
            // EOF ends the session like an explicit quit.
            break;
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };

        match command {
            "" => {}
            "add" => {
                engine.add(rest);
                println!("added '{rest}'");
            }
            "find" => {
                let suggestions = engine.suggest(rest);
                if suggestions.is_empty() {
                    println!("no suggestions");
                } else {
                    for word in suggestions {
                        println!("  {word}");
                    }
                }
            }
            "has" => {
                println!("{}", engine.knows(rest));
            }
            "remove" => {
                engine.dismiss(rest);
                println!("removed '{rest}'");
            }
            "list" => {
                for word in engine.words() {
                    println!("  {word}");
                }
                println!("{} word(s)", engine.len());
            }
            "help" => {
                println!("commands: add <word>, find <prefix>, has <word>, remove <word>, list, quit");
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command '{other}', type 'help' for commands");
            }
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> MakaiResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration first; the logging setup reads its log section.
    // Without --config, the shipped default file is picked up when present.
    let env_prefix = "MAKAI";
    let config_path = resolve_config_path(args.config, Path::new(config::DEFAULT_CONFIG_PATH));
    let config_loader = config::ConfigLoader::new(config_path, env_prefix);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            // No subscriber exists yet, so report directly on stderr
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    // Initialize logging early to capture any startup errors
    init_logging(&config.log)?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Initialize global configuration
    config::init_global_config(config);

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            info!("Starting Makai Suggest session");

            let config = config::get_global_config();
            let suggest = &config.get().suggest;

            let mut engine = SuggestEngine::with_config(suggest);
            if let Some(dictionary) = &suggest.dictionary {
                let count = seed_from_dictionary(&mut engine, dictionary)?;
                info!("Seeded {} word(s) from {:?}", count, dictionary);
            }

            run_session(&mut engine)
        }
        Command::Validate => {
            // Loading already validated; reaching this point means success.
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
