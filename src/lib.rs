//! Count how often the words of a predefined vocabulary occur in a text.
//!
//! The vocabulary lives in an exact-membership [`Index`]: either a
//! character [`Trie`] or a flat [`WordSet`]. Both give identical tallies.

pub mod error;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod tokenizer;
pub mod wordlist;

use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

pub use crate::error::{LookupError, Result};
pub use crate::matcher::{Matcher, Tally};
pub use crate::report::{Destination, Report, ReportFormat};
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::Trie;
pub use crate::wordlist::wordlist::Wordlist;
pub use crate::wordlist::wordset::WordSet;

/// Which vocabulary store backs a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Trie,
    Set,
}

impl FromStr for StoreKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trie" => Ok(StoreKind::Trie),
            "set" => Ok(StoreKind::Set),
            _ => Err(LookupError::UnknownStore(s.to_string())),
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Trie => write!(f, "trie"),
            StoreKind::Set => write!(f, "set"),
        }
    }
}

/// Load `words`, count matches in `text`, and write the report to `destination`.
///
/// Nothing is written unless both files were read successfully.
pub fn run(store: StoreKind,
           words: &Path,
           text: &Path,
           destination: &Destination,
           format: ReportFormat) -> Result<Tally> {
    let tally = match store {
        StoreKind::Trie => count_file(&Wordlist::<Trie>::from_file(words)?, text)?,
        StoreKind::Set => count_file(&Wordlist::<WordSet>::from_file(words)?, text)?,
    };

    Report::new(tally.clone(), format).write_to(destination)?;
    Ok(tally)
}

/// Count vocabulary matches over the lines of the file at `text`.
pub fn count_file<I: Index>(vocabulary: &Wordlist<I>, text: &Path) -> Result<Tally> {
    let wrap = |source| LookupError::Text { path: text.to_path_buf(), source };

    let file = File::open(text).map_err(wrap)?;
    Matcher::new(vocabulary)
        .count_lines(BufReader::new(file).lines())
        .map_err(wrap)
}
