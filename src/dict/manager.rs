use crate::dict::loader::{dictionary_path, load_word_list, read_words};
use crate::error::DictionaryError;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{BufReader, Cursor};
use tracing::{debug, info};

// Pinned commit so that installs are reproducible
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";
const WORDLIST_VERSION: &str = "2023.12";

pub fn list_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().ok_or(DictionaryError::NoDataDir)?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to install one.",
            "triespell dict install en_US".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    let mut found_any = false;
    for entry in fs::read_dir(&data_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }

        found_any = true;
        let language = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        let size_kb = fs::metadata(&path)?.len() / 1024;

        println!(
            "  {} {} ({})",
            "✓".green(),
            language.cyan().bold(),
            format!("{}KB", size_kb).dimmed()
        );
    }

    if !found_any {
        println!("{}", "No dictionaries found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

/// Install a word list for `language`, either from `source` (a local path
/// or an http(s) URL) or from the pinned upstream English list.
pub fn install_dictionary(language: &str, source: Option<&str>) -> Result<()> {
    let source = match source {
        Some(source) => source.to_string(),
        None => default_source(language)?,
    };

    println!(
        "{} dictionary for {} from {}...",
        "Installing".cyan().bold(),
        language.yellow(),
        source.dimmed()
    );

    let words = if source.starts_with("http://") || source.starts_with("https://") {
        let body = download(&source)?;
        read_words(Cursor::new(body), false)?
    } else {
        let file = fs::File::open(&source)
            .with_context(|| format!("Failed to open word list: {}", source))?;
        read_words(BufReader::new(file), false)?
    };

    let mut words: Vec<String> = words
        .into_iter()
        .filter(|w| w.chars().count() > 1)
        .collect();
    words.sort();
    words.dedup();

    println!("Found {} words", words.len().to_string().yellow());

    let dict_path = dictionary_path(language)?;
    if let Some(parent) = dict_path.parent() {
        fs::create_dir_all(parent).context("Failed to create data directory")?;
    }

    let mut contents = words.join("\n");
    contents.push('\n');
    fs::write(&dict_path, contents)
        .with_context(|| format!("Failed to write dictionary: {}", dict_path.display()))?;
    info!(path = %dict_path.display(), words = words.len(), "installed dictionary");

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let dict_path = dictionary_path(language)?;

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Run {} to install it.",
            format!("triespell dict install {}", language).cyan()
        );
        return Ok(());
    }

    let bytes = fs::read(&dict_path)?;
    let trie = load_word_list(&dict_path, true)?;

    println!("{}", format!("Dictionary: {}", language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", bytes.len() / 1024);
    println!("  SHA-256: {}", checksum(&bytes));
    println!("  Format: plain word list");
    println!("  Words: {}", trie.len().to_string().yellow());
    println!("  Trie nodes: {}", trie.node_count());

    Ok(())
}

fn default_source(language: &str) -> Result<String> {
    match language {
        "en_US" | "en_GB" => Ok(format!("{}/words_alpha.txt", WORDLIST_BASE_URL)),
        other => Err(DictionaryError::UnsupportedLanguage(other.to_string()).into()),
    }
}

fn download(url: &str) -> Result<String> {
    debug!(url, version = WORDLIST_VERSION, "downloading word list");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message("Downloading...");

    fetch(&pb, url)
}

/// Fetch `url` as text. `pb` is finished on every path out.
fn fetch(pb: &ProgressBar, url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url).map_err(|e| {
        pb.finish_and_clear();
        DictionaryError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !response.status().is_success() {
        pb.finish_and_clear();
        return Err(DictionaryError::Download {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        }
        .into());
    }

    let body = response.text().map_err(|e| {
        pb.finish_and_clear();
        DictionaryError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;
    pb.finish_with_message("Download complete");

    Ok(body)
}

fn checksum(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
