use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("cannot read word list {path:?}")]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read text file {path:?}")]
    Text {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write report to {path}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("unknown vocabulary store {0:?}, expected `trie` or `set`")]
    UnknownStore(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
