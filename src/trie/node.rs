use std::collections::BTreeMap;

/// Character the root node carries. Never compared against input.
pub(crate) const ROOT_SENTINEL: char = '\0';

/// One character position shared by every stored word whose path passes
/// through it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) character: char,
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) is_terminal: bool,
}

impl Node {
    pub(crate) fn new(character: char) -> Self {
        Self {
            character,
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT_SENTINEL)
    }

    /// Child for `c`, created on first use.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_insert_with(|| Node::new(c))
    }

    pub(crate) fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
