use std::collections::HashSet;

use crate::wordlist::index::Index;

/// Flat hash-set store. Same contract as [`Trie`](crate::wordlist::trie::Trie),
/// trading prefix sharing for a single hash per lookup.
#[derive(Default, Debug)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> WordSet {
        Default::default()
    }
}

impl Index for WordSet {
    fn add(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_owned());
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = WordSet::new();
        set.add_all(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Cursor;

    use proptest::prelude::*;

    use crate::matcher::Matcher;
    use crate::tokenizer::tokenize;
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::Trie;
    use crate::wordlist::wordlist::Wordlist;
    use crate::wordlist::wordset::WordSet;

    #[test]
    fn finds_words_in_set() {
        let set: WordSet = vec!["hello", "help", ""].into_iter().collect();
        assert!(set.contains("hello"));
        assert!(set.contains("help"));
        assert!(set.contains(""));
        assert!(!set.contains("hel"));
        assert!(!set.contains("Hello"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn duplicate_inserts_collapse() {
        let mut set = WordSet::new();
        set.add_all(vec!["cat", "cat"]);
        assert_eq!(set.len(), 1);
    }

    fn vocabulary() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-cé]{0,6}", 0..30)
    }

    fn queries() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-cé]{0,7}", 0..60)
    }

    fn text() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-cA-CéÉ]{1,4}[ \t\u{1f}]{1,2}", 0..40)
            .prop_map(|chunks| chunks.into_iter().enumerate()
                .map(|(i, chunk)| if i % 7 == 6 { format!("{}\n", chunk) } else { chunk })
                .collect())
    }

    proptest! {
        #[test]
        fn tallies_agree_and_count_every_matching_token(words in vocabulary(), body in text()) {
            let listing = words.join("\n");
            let trie = Wordlist::<Trie>::from_reader(Cursor::new(listing.clone())).unwrap();
            let set = Wordlist::<WordSet>::from_reader(Cursor::new(listing)).unwrap();

            let trie_tally = Matcher::new(&trie).count_str(&body);
            let set_tally = Matcher::new(&set).count_str(&body);
            prop_assert_eq!(&trie_tally, &set_tally);

            let known: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
            let tokens: Vec<String> = body.lines().flat_map(tokenize).collect();
            for (word, count) in trie_tally.iter() {
                prop_assert!(known.contains(word));
                let expected = tokens.iter().filter(|t| *t == word).count() as u64;
                prop_assert_eq!(*count, expected, "word {:?}", word);
            }
            for token in &tokens {
                prop_assert_eq!(trie_tally.get(token) > 0, known.contains(token));
            }
        }

        #[test]
        fn trie_and_set_agree(words in vocabulary(), lookups in queries()) {
            let trie: Trie = words.iter().map(String::as_str).collect();
            let set: WordSet = words.iter().map(String::as_str).collect();

            prop_assert_eq!(trie.len(), set.len());
            for lookup in lookups.iter().chain(words.iter()) {
                prop_assert_eq!(trie.contains(lookup), set.contains(lookup), "lookup {:?}", lookup);
            }
        }
    }
}
