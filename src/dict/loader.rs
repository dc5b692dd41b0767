use crate::error::{DictionaryError, DictionaryResult};
use crate::trie::Trie;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Read a newline separated word list. Blank lines and `#` comments are
/// skipped, surrounding whitespace is trimmed.
pub fn read_words<R: BufRead>(reader: R, case_sensitive: bool) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }

        if case_sensitive {
            words.push(word.to_string());
        } else {
            words.push(word.to_lowercase());
        }
    }

    Ok(words)
}

/// Load a word list file into a fresh trie. Files ending in `.gz` are
/// decompressed on the fly.
pub fn load_word_list(path: &Path, case_sensitive: bool) -> DictionaryResult<Trie> {
    if !path.exists() {
        return Err(DictionaryError::NotFound(path.to_path_buf()));
    }

    let started = Instant::now();
    let file = File::open(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let words = read_words(BufReader::new(reader), case_sensitive).map_err(|source| {
        DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let trie: Trie = words.iter().collect();
    info!(
        path = %path.display(),
        words = trie.len(),
        nodes = trie.node_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded dictionary"
    );

    Ok(trie)
}

/// Load the installed dictionary for `language`, falling back to the
/// built-in bootstrap list when nothing has been installed yet.
pub fn load_language(language: &str, case_sensitive: bool) -> DictionaryResult<Trie> {
    let path = dictionary_path(language)?;
    if path.exists() {
        return load_word_list(&path, case_sensitive);
    }

    info!(
        language,
        "no installed dictionary, using the built-in word list"
    );
    let trie: Trie = basic_wordlist(language)
        .iter()
        .map(|w| if case_sensitive { w.to_string() } else { w.to_lowercase() })
        .collect();
    debug!(words = trie.len(), "built-in dictionary ready");

    Ok(trie)
}

/// Location of the installed word list for `language`.
pub fn dictionary_path(language: &str) -> DictionaryResult<PathBuf> {
    let data_dir = crate::config::Config::data_dir().ok_or(DictionaryError::NoDataDir)?;
    Ok(data_dir.join(format!("{}.txt", language)))
}

fn basic_wordlist(language: &str) -> &'static [&'static str] {
    match language {
        "en_US" | "en_GB" => &[
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not",
            "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from",
            "they", "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would",
            "there", "their", "what", "so", "up", "out", "if", "about", "who", "get", "which",
            "go", "me", "when", "make", "can", "like", "time", "no", "just", "him", "know",
            "take", "people", "into", "year", "your", "good", "some", "could", "them", "see",
            "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
            "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
            "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
            "is", "are", "was", "word", "words", "line", "file", "text", "check", "spell",
            "tree", "trie", "node", "list", "string", "error", "test", "build", "version",
        ],
        _ => &["the", "be", "to", "of", "and", "a", "in", "that", "have", "i"],
    }
}
