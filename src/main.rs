use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use triespell::checker::{self, SpellChecker};
use triespell::cli::output::{self, OutputFormat};
use triespell::config::{Config, Overrides};
use triespell::dict;

const LOG_ENV: &str = "TRIESPELL_LOG";

#[derive(Parser, Debug)]
#[command(name = "triespell")]
#[command(version, about = "Trie-backed spellchecker with substitution-bounded suggestions", long_about = None)]
struct Cli {
    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Word list file to load instead of the installed dictionary
    #[arg(short, long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Personal dictionary file
    #[arg(long, global = true, value_name = "PATH")]
    personal_dict: Option<PathBuf>,

    /// Maximum number of substituted characters in a suggestion
    #[arg(short = 'm', long, global = true, allow_negative_numbers = true)]
    max_mistakes: Option<i32>,

    /// Maximum number of suggestions shown per word
    #[arg(long, global = true)]
    max_suggestions: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check files or directories for misspellings
    Check {
        /// Files or directories to check
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<PathBuf>,

        /// Output format (text, json)
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,

        /// Exit with code 0 even if errors are found
        #[arg(long)]
        no_fail: bool,

        /// Pattern to ignore (regex)
        #[arg(long)]
        ignore_pattern: Vec<String>,
    },
    /// Suggest corrections for words
    Suggest {
        #[arg(required = true)]
        words: Vec<String>,

        /// Sort by number of substitutions and apply --max-suggestions
        #[arg(long)]
        ranked: bool,

        /// Output format (text, json)
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },
    /// Report whether a word is in the dictionary
    Contains { word: String },
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Install a dictionary from a local word list or URL
    Install {
        /// Language code (e.g., en_US, en_GB)
        language: String,
        /// Word list path or http(s) URL; defaults to the upstream English list
        #[arg(long)]
        from: Option<String>,
    },
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let colored = !cli.no_color;

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "triespell", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut overrides = Overrides {
        language: cli.language,
        dictionary: cli.dictionary,
        personal_dictionary: cli.personal_dict,
        ignore_patterns: Vec::new(),
        max_mistakes: cli.max_mistakes,
        max_suggestions: cli.max_suggestions,
    };

    match command {
        Commands::Check {
            paths,
            format,
            no_fail,
            ignore_pattern,
        } => {
            overrides.ignore_patterns = ignore_pattern;
            let config = Config::load(overrides)?;
            let checker = SpellChecker::new(&config)?;

            let mut results = Vec::new();
            for file_path in checker::collect_files(&paths) {
                if !file_path.exists() {
                    warn!(file = %file_path.display(), "file not found");
                    continue;
                }
                let result = checker.check_file(&file_path)?;
                results.push((file_path, result));
            }

            output::print_report(&results, colored, format)?;

            let total_errors: usize = results.iter().map(|(_, r)| r.error_count).sum();
            if total_errors > 0 && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Suggest {
            words,
            ranked,
            format,
        } => {
            let config = Config::load(overrides)?;
            let checker = SpellChecker::new(&config)?;
            debug!(
                words = checker.trie().len(),
                max_mistakes = config.max_mistakes,
                ranked,
                "suggesting"
            );

            for word in &words {
                let suggestions = if ranked {
                    checker.suggest(word)
                } else {
                    checker.suggest_raw(word)
                };
                output::print_suggestions(
                    word,
                    checker.is_correct(word),
                    &suggestions,
                    colored,
                    format,
                )?;
            }
        }
        Commands::Contains { word } => {
            let config = Config::load(overrides)?;
            let checker = SpellChecker::new(&config)?;
            let found = checker.is_correct(&word);
            println!("{}", found);
            if !found {
                std::process::exit(2);
            }
        }
        Commands::Dict { action } => match action {
            DictCommands::List => dict::manager::list_dictionaries()?,
            DictCommands::Install { language, from } => {
                dict::manager::install_dictionary(&language, from.as_deref())?
            }
            DictCommands::Info { language } => dict::manager::show_info(&language)?,
        },
    }

    Ok(())
}
