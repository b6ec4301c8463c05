use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::info;
use metrics::counter;

use crate::error::{LookupError, Result};
use crate::tokenizer::normalize;
use crate::wordlist::index::Index;

/// The predefined vocabulary, loaded once and queried read-only afterwards.
#[derive(Debug, Default)]
pub struct Wordlist<I: Index> {
    index: I,
}

impl<I: Index> Wordlist<I> {
    delegate! {
        to self.index {
            pub fn contains(&self, word: &str) -> bool;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn from_file(path: &Path) -> Result<Wordlist<I>> {
        info!("Reading words from {:?}", path);
        let wrap = |source| LookupError::WordList { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(wrap)?;
        Self::from_reader(BufReader::new(file)).map_err(wrap)
    }

    /// One word per line; `\n`, `\r\n` and a bare `\r` all end a line.
    /// Lines are trimmed and lowercased; blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Wordlist<I>> {
        let start = Instant::now();
        let mut index = I::default();
        let mut lines: usize = 0;

        for line in reader.lines() {
            for word in line?.split('\r').map(normalize) {
                if !word.is_empty() {
                    index.add(&word);
                    lines += 1;
                }
            }
        }

        counter!("word_lookup.words_loaded", index.len() as u64);
        info!("Read {} words ({} distinct) in {:.3}s",
              lines, index.len(), start.elapsed().as_secs_f64());
        Ok(Wordlist { index })
    }
}

impl<I: Index> From<I> for Wordlist<I> {
    fn from(index: I) -> Self {
        Wordlist { index }
    }
}
