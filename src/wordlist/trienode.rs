use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// One character position in the trie. Owns its children outright.
#[derive(Default)]
pub(crate) struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Mark a word end here. Returns `true` if the flag was not already set.
    pub(crate) fn set_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.is_terminal, true)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut letters = self.children.keys().copied().collect::<Vec<_>>();
        letters.sort_unstable();
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &letters)
            .finish()
    }
}
