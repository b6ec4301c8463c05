use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trienode::TrieNode;

/// Prefix tree over `char`s, used for exact-word membership only.
///
/// Lookup cost is linear in the query length and independent of how many
/// words are stored. Inserting `""` marks the root as a word end.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if current.set_terminal() {
            self.len += 1;
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(TrieNode::is_terminal).unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    /// Follow `word` from the root; `None` as soon as a character has no child.
    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
