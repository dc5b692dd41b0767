pub mod suggestions;
pub mod tokenizer;

use crate::dict;
use crate::trie::Trie;
use crate::{CheckResult, Config, SpellError};
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::io::BufReader;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tokenizer::Token;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct SpellChecker {
    trie: Trie,
    ignore_patterns: Vec<Regex>,
    max_mistakes: i32,
    max_suggestions: usize,
    case_sensitive: bool,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        // Load main dictionary
        let mut trie = match &config.dictionary {
            Some(path) => dict::load_word_list(path, config.case_sensitive)?,
            None => dict::load_language(&config.language, config.case_sensitive)?,
        };

        // Personal words go into the same trie
        if let Some(personal_path) = config.personal_dictionary_path() {
            let file = fs::File::open(&personal_path).with_context(|| {
                format!(
                    "Failed to read personal dictionary: {}",
                    personal_path.display()
                )
            })?;
            let words = dict::read_words(BufReader::new(file), config.case_sensitive)?;
            debug!(
                path = %personal_path.display(),
                words = words.len(),
                "loaded personal dictionary"
            );
            trie.extend(words);
        }

        Ok(Self::with_trie(trie, config))
    }

    /// Build a checker around an already loaded trie.
    pub fn with_trie(trie: Trie, config: &Config) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern"),
            }
        }

        Self {
            trie,
            ignore_patterns,
            max_mistakes: config.max_mistakes,
            max_suggestions: config.max_suggestions,
            case_sensitive: config.case_sensitive,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.trie.contains(&self.normalize(word))
    }

    /// Ranked suggestions for a single word.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(
            &self.normalize(word),
            &self.trie,
            self.max_mistakes,
            self.max_suggestions,
        )
    }

    /// Unranked matches straight from the trie, in traversal order.
    pub fn suggest_raw(&self, word: &str) -> Vec<String> {
        self.trie
            .suggest_with_budget(&self.normalize(word), self.max_mistakes)
    }

    /// Find misspelled words in `content`, in document order.
    pub fn check_text(&self, content: &str) -> Vec<SpellError> {
        let lines: Vec<&str> = content.lines().collect();
        let ignored: Vec<Vec<Range<usize>>> =
            lines.iter().map(|line| self.ignored_ranges(line)).collect();

        tokenizer::tokenize(content)
            .into_par_iter()
            .filter(|token| !self.should_ignore(token, &ignored[token.line - 1]))
            .filter_map(|token| {
                if self.is_correct(&token.text) {
                    return None;
                }

                let suggestions = self.suggest(&token.text);
                Some(SpellError {
                    word: token.text,
                    line: token.line,
                    column: token.column,
                    context: token.context,
                    suggestions,
                })
            })
            .collect()
    }

    pub fn check_file(&self, file_path: &Path) -> Result<CheckResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let errors = self.check_text(&content);
        debug!(
            file = %file_path.display(),
            errors = errors.len(),
            "checked file"
        );

        Ok(CheckResult {
            error_count: errors.len(),
            errors,
        })
    }

    fn normalize(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }

    fn ignored_ranges(&self, line: &str) -> Vec<Range<usize>> {
        self.ignore_patterns
            .iter()
            .flat_map(|re| re.find_iter(line).map(|m| m.range()))
            .collect()
    }

    fn should_ignore(&self, token: &Token, ignored: &[Range<usize>]) -> bool {
        // Skip single characters
        if token.text.chars().count() <= 1 {
            return true;
        }

        // Skip anything containing digits
        if token.text.chars().any(|c| c.is_numeric()) {
            return true;
        }

        ignored
            .iter()
            .any(|range| token.start < range.end && range.start < token.end)
    }
}

/// Expand directories into the files below them. Plain files pass through.
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn build_checker(words: &[&str], config: Config) -> SpellChecker {
        SpellChecker::with_trie(words.iter().collect(), &config)
    }

    #[test]
    fn test_check_text_finds_misspellings() {
        let checker = build_checker(&["the", "cat", "sat", "on", "mat"], Config::default());
        let errors = checker.check_text("The cat sat on the mxt");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].word, "mxt");
        assert_eq!(errors[0].line, 1);
        assert_eq!(errors[0].column, 20);
        assert_eq!(errors[0].suggestions, vec!["mat"]);
    }

    #[test]
    fn test_errors_keep_document_order() {
        let checker = build_checker(&["good"], Config::default());
        let errors = checker.check_text("bda good\nxyz\ngood qqq");
        let words: Vec<&str> = errors.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["bda", "xyz", "qqq"]);
    }

    #[test]
    fn test_ignore_patterns_cover_urls() {
        let checker = build_checker(&["see"], Config::default());
        let errors = checker.check_text("see https://exmaple.com/pathz and README");
        let words: Vec<&str> = errors.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["and"]);
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let config = Config {
            ignore_patterns: vec!["(".to_string(), "^skip".to_string()],
            ..Default::default()
        };
        let checker = build_checker(&[], config);
        let errors = checker.check_text("skip this");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].word, "this");
    }

    #[test]
    fn test_case_sensitivity() {
        let checker = build_checker(&["rust"], Config::default());
        assert!(checker.is_correct("Rust"));

        let sensitive = Config {
            case_sensitive: true,
            ..Default::default()
        };
        let checker = build_checker(&["rust"], sensitive);
        assert!(!checker.is_correct("Rust"));
        assert!(checker.is_correct("rust"));
    }

    #[test]
    fn test_suggest_uses_budget() {
        let config = Config {
            max_mistakes: 2,
            ..Default::default()
        };
        let checker = build_checker(&["cat", "cot", "dog", "cats"], config);
        assert_eq!(checker.suggest("cog"), vec!["cot", "dog", "cat"]);
        assert_eq!(checker.suggest_raw("cog"), vec!["cat", "cot", "dog"]);
    }

    #[test]
    fn test_new_with_word_list_and_personal_dictionary() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let personal = dir.path().join("personal.txt");
        fs::write(&words, "hello\nworld\n").unwrap();
        fs::write(&personal, "# mine\ntriespell\n").unwrap();

        let config = Config {
            dictionary: Some(words),
            personal_dictionary: Some(personal),
            ..Default::default()
        };
        let checker = SpellChecker::new(&config).unwrap();
        assert!(checker.is_correct("hello"));
        assert!(checker.is_correct("triespell"));
        assert!(!checker.is_correct("mine"));
    }

    #[test]
    fn test_check_file_and_collect_files() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("docs");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("a.txt"), "hello wrld").unwrap();
        fs::write(nested.join("b.txt"), "hello").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 2);

        let checker = build_checker(&["hello", "world"], Config::default());
        let result = checker.check_file(&dir.path().join("a.txt")).unwrap();
        assert_eq!(result.error_count, 1);
        assert_eq!(result.errors[0].word, "wrld");
        assert!(result.errors[0].suggestions.is_empty());
    }
}
