use unicode_segmentation::UnicodeSegmentation;

const CONTEXT_RADIUS: usize = 20;

/// A candidate word found in a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// Byte range of the word inside its line
    pub start: usize,
    pub end: usize,
    pub context: String,
}

/// Split text into candidate words, line by line.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        for (offset, segment) in line.split_word_bound_indices() {
            if !segment.chars().next().is_some_and(char::is_alphabetic) {
                continue;
            }

            for (part_offset, part) in split_compound_word(segment) {
                let start = offset + part_offset;
                let end = start + part.len();
                tokens.push(Token {
                    column: line[..start].chars().count() + 1,
                    context: get_context(line, start, end),
                    text: part,
                    line: line_idx + 1,
                    start,
                    end,
                });
            }
        }
    }

    tokens
}

/// Split camelCase and snake_case words. Offsets are byte offsets into `word`.
pub fn split_compound_word(word: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_start = 0;
    let mut prev_lower = false;

    for (idx, ch) in word.char_indices() {
        if ch == '_' {
            if !current.is_empty() {
                result.push((current_start, std::mem::take(&mut current)));
            }
            prev_lower = false;
            continue;
        }

        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            result.push((current_start, std::mem::take(&mut current)));
        }

        if current.is_empty() {
            current_start = idx;
        }
        current.push(ch);
        prev_lower = ch.is_lowercase();
    }

    if !current.is_empty() {
        result.push((current_start, current));
    }

    result
}

fn get_context(line: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(CONTEXT_RADIUS);
    while !line.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + CONTEXT_RADIUS).min(line.len());
    while !line.is_char_boundary(to) {
        to += 1;
    }

    let context = &line[from..to];
    match (from > 0, to < line.len()) {
        (true, true) => format!("...{}...", context),
        (true, false) => format!("...{}", context),
        (false, true) => format!("{}...", context),
        (false, false) => context.to_string(),
    }
}
