//! In-memory prefix tree used as the lexicon.
//!
//! Words are inserted during a load phase and then queried for exact
//! membership or for approximate matches. Approximate matching only models
//! same-position character substitutions: a suggestion always has exactly as
//! many characters as the query.
//!
//! Children are kept in a `BTreeMap`, so every traversal visits them in
//! ascending code point order and [`Trie::suggest_with_budget`] returns its
//! matches sorted lexicographically.

mod node;

use node::Node;

/// Prefix tree of stored words.
///
/// `insert` needs `&mut self` while the queries only need `&self`, so once
/// loading is done the trie can be shared across threads (it is `Send` and
/// `Sync`) and queried in parallel without further locking.
#[derive(Debug, Clone)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie holding only the sentinel root.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
        }
    }

    /// Stores `word`. Inserting the same word again is a no-op and the empty
    /// string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
    }

    /// Returns true iff `word` was inserted. A stored prefix of a longer word
    /// does not count unless it was inserted on its own.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_terminal
    }

    /// Returns every stored word of the same length as `word` that differs
    /// from it in at most `max_mistakes` positions.
    ///
    /// A budget of `0` is an exact lookup, a negative budget never matches,
    /// and a budget at least as large as the word returns every stored word
    /// of that length. Results come back in ascending code point order with
    /// no duplicates.
    pub fn suggest_with_budget(&self, word: &str, max_mistakes: i32) -> Vec<String> {
        let query: Vec<char> = word.chars().collect();
        let mut matches = Vec::new();
        let mut path = String::with_capacity(word.len());

        collect_suggestions(&self.root, &query, &mut path, max_mistakes, &mut matches);
        matches
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// All stored words in traversal order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut words);
        words
    }
}

fn collect_suggestions(
    node: &Node,
    query: &[char],
    path: &mut String,
    budget: i32,
    matches: &mut Vec<String>,
) {
    // Checked before the exhausted-query case: a path that ends with the
    // budget at exactly zero still matches.
    if budget < 0 {
        return;
    }

    let Some((&expected, rest)) = query.split_first() else {
        if node.is_terminal {
            matches.push(path.clone());
        }
        return;
    };

    for child in node.children.values() {
        let branch_budget = if child.character == expected {
            budget
        } else {
            budget - 1
        };

        path.push(child.character);
        collect_suggestions(child, rest, path, branch_budget, matches);
        path.pop();
    }
}

fn collect_words(node: &Node, path: &mut String, words: &mut Vec<String>) {
    if node.is_terminal {
        words.push(path.clone());
    }

    for child in node.children.values() {
        path.push(child.character);
        collect_words(child, path, words);
        path.pop();
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
