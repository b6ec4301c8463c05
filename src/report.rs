use std::cmp::Reverse;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::info;
use typed_builder::TypedBuilder;

use crate::error::{LookupError, Result};
use crate::matcher::Tally;

/// Column layout of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ReportFormat {
    #[builder(default = 50)]
    word_width: usize,
    #[builder(default = "Predefined word".to_string(), setter(into))]
    word_header: String,
    #[builder(default = "Match count".to_string(), setter(into))]
    count_header: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::builder().build()
    }
}

/// Where the rendered table goes. Exactly one destination per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Same bytes as a file destination; no blank line is appended after the table.
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(Destination::File).unwrap_or(Destination::Stdout)
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Tally rows ordered by count descending, then word ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    rows: Vec<(String, u64)>,
    format: ReportFormat,
}

impl Report {
    pub fn new(tally: Tally, format: ReportFormat) -> Report {
        let mut rows: Vec<(String, u64)> = tally.into_iter().collect();
        rows.sort_by(|(a_word, a_count), (b_word, b_count)| {
            (Reverse(a_count), a_word).cmp(&(Reverse(b_count), b_word))
        });
        Report { rows, format }
    }

    pub fn rows(&self) -> &[(String, u64)] {
        &self.rows
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render fully, then write in one go so a failed run leaves no partial table.
    pub fn write_to(&self, destination: &Destination) -> Result<()> {
        let rendered = self.render();
        let wrap = |source| LookupError::Output { path: destination.to_string(), source };

        info!("Writing {} rows to {}", self.rows.len(), destination);
        match destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes()).and_then(|_| handle.flush()).map_err(wrap)
            }
            Destination::File(path) => fs::write(path, rendered).map_err(wrap),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.format.word_width;
        writeln!(f, "{:<width$}{}", self.format.word_header, self.format.count_header, width = width)?;
        for (word, count) in &self.rows {
            writeln!(f, "{:<width$}{}", word, count, width = width)?;
        }
        Ok(())
    }
}
