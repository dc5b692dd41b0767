use crate::{CheckResult, SpellError};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFileReport<'a> {
    file: String,
    errors: &'a [SpellError],
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    total_errors: usize,
    files: Vec<JsonFileReport<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSuggestions<'a> {
    word: &'a str,
    known: bool,
    suggestions: &'a [String],
}

/// Print every file's findings, as one JSON document or as text blocks.
pub fn print_report(
    results: &[(impl AsRef<Path>, CheckResult)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (path, result) in results {
                print_text_errors(path.as_ref(), result, colored_output);
            }
            let total: usize = results.iter().map(|(_, r)| r.error_count).sum();
            print_check_summary(total, results.len(), colored_output);
        }
        OutputFormat::Json => {
            let report = JsonReport {
                files_checked: results.len(),
                total_errors: results.iter().map(|(_, r)| r.error_count).sum(),
                files: results
                    .iter()
                    .map(|(path, result)| JsonFileReport {
                        file: path.as_ref().display().to_string(),
                        errors: &result.errors,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_text_errors(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in &result.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                error.word.red().bold(),
                format_context(&error.context, &error.word, colored_output)
            );
        } else {
            println!("  {} {} {}", line_info, error.word, &error.context);
        }

        if !error.suggestions.is_empty() {
            println!(
                "    {} {}",
                if colored_output { "→".dimmed().to_string() } else { "→".to_string() },
                join_suggestions(&error.suggestions, colored_output)
            );
        }
    }
}

/// Print suggestions for a single queried word.
pub fn print_suggestions(
    word: &str,
    known: bool,
    suggestions: &[String],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let out = JsonSuggestions {
                word,
                known,
                suggestions,
            };
            println!("{}", serde_json::to_string(&out)?);
        }
        OutputFormat::Text => {
            let label = if colored_output {
                if known {
                    word.green().bold().to_string()
                } else {
                    word.yellow().bold().to_string()
                }
            } else {
                word.to_string()
            };

            if suggestions.is_empty() {
                let none = if colored_output {
                    "(no suggestions)".dimmed().to_string()
                } else {
                    "(no suggestions)".to_string()
                };
                println!("{}: {}", label, none);
            } else {
                println!("{}: {}", label, join_suggestions(suggestions, colored_output));
            }
        }
    }
    Ok(())
}

fn join_suggestions(suggestions: &[String], colored_output: bool) -> String {
    if colored_output {
        suggestions
            .iter()
            .map(|s| s.green().to_string())
            .collect::<Vec<_>>()
            .join(&", ".dimmed().to_string())
    } else {
        suggestions.join(", ")
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

pub fn print_check_summary(total_errors: usize, files: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
        return;
    }

    let error_word = if total_errors == 1 { "error" } else { "errors" };
    let file_word = if files == 1 { "file" } else { "files" };
    if colored {
        println!(
            "{} {} {} found in {} {}",
            "✗".red().bold(),
            total_errors.to_string().red().bold(),
            error_word,
            files,
            file_word
        );
    } else {
        println!(
            "✗ {} {} found in {} {}",
            total_errors, error_word, files, file_word
        );
    }
}
