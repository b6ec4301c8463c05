pub mod index;
pub mod trie;
pub mod wordlist;
pub mod wordset;
mod trienode;
