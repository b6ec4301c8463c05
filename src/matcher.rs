use std::collections::hash_map;
use std::collections::HashMap;
use std::convert::Infallible;

use derive_new::new;
use log::debug;
use metrics::counter;

use crate::tokenizer::tokenize;
use crate::wordlist::index::Index;
use crate::wordlist::wordlist::Wordlist;

/// Occurrence count per matched vocabulary word.
///
/// Words that never matched have no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, u64>,
}

impl Tally {
    pub fn new() -> Tally {
        Default::default()
    }

    pub fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct matched words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl From<Tally> for HashMap<String, u64> {
    fn from(tally: Tally) -> Self {
        tally.counts
    }
}

impl IntoIterator for Tally {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ScanStats {
    lines: u64,
    tokens: u64,
    matches: u64,
}

/// Streams text through the tokenizer and counts tokens found in the vocabulary.
#[derive(new)]
pub struct Matcher<'v, I: Index> {
    vocabulary: &'v Wordlist<I>,
}

impl<'v, I: Index> Matcher<'v, I> {
    /// Count matches over `lines`. The first read error aborts the scan.
    pub fn count_lines<L, S, E>(&self, lines: L) -> Result<Tally, E>
        where L: IntoIterator<Item = Result<S, E>>,
              S: AsRef<str> {
        let mut tally = Tally::new();
        let mut stats = ScanStats::default();

        for line in lines {
            let line = line?;
            stats.lines += 1;
            for token in tokenize(line.as_ref()) {
                stats.tokens += 1;
                if self.vocabulary.contains(&token) {
                    stats.matches += 1;
                    tally.record(token);
                }
            }
        }

        counter!("word_lookup.lines_scanned", stats.lines);
        counter!("word_lookup.tokens_scanned", stats.tokens);
        counter!("word_lookup.tokens_matched", stats.matches);
        debug!("Scanned {} lines, {} tokens, {} matches over {} distinct words",
               stats.lines, stats.tokens, stats.matches, tally.len());
        Ok(tally)
    }

    /// Convenience for in-memory text.
    pub fn count_str(&self, text: &str) -> Tally {
        match self.count_lines(text.lines().map(Ok::<_, Infallible>)) {
            Ok(tally) => tally,
            Err(never) => match never {},
        }
    }
}
