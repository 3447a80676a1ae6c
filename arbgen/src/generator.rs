//! The transform driver: CSV table in, one ARB file per language out.
//!
//! A run moves through three states:
//!
//! 1. **Read header**: discover the language codes and load each language's
//!    existing ARB file (missing or unreadable files start empty).
//! 2. **Read rows**: fold every data row into every language store, in order.
//! 3. **Persist**: write each store back, overwriting the previous file.
//!
//! Only failures that make the whole table unusable abort a run. Problems with
//! a single language's file are logged and returned in the [`Report`].

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use encoding_rs_io::DecodeReaderBytesBuilder;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    error::Error,
    formats::{ArbFormat, TableReader},
    store::{LanguageStore, LanguageStores},
};

/// A per-language failure that did not stop the run.
#[derive(Debug)]
pub struct LanguageFailure {
    pub language: String,
    pub error: Error,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    /// Language codes in header order.
    pub languages: Vec<String>,
    /// Number of data rows processed.
    pub rows: usize,
    /// Files written, in header order.
    pub written: Vec<PathBuf>,
    /// Read and write failures, in the order they happened.
    pub failures: Vec<LanguageFailure>,
}

impl Report {
    /// Returns `true` if every language was loaded and written without error.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, language: &str, error: Error) {
        self.failures.push(LanguageFailure {
            language: language.to_string(),
            error,
        });
    }
}

/// Runs the CSV to ARB transformation for one [`Config`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `config.csv_file` and runs the transformation.
    ///
    /// Returns `Err` only for fatal failures: the CSV cannot be opened or
    /// parsed, or its header has no language column. In that case no file
    /// is written.
    pub fn run(&self) -> Result<Report, Error> {
        let path = &self.config.csv_file;
        info!(path = %path.display(), "reading translation table");
        let file = File::open(path).map_err(|e| Error::csv_read(path, Error::Io(e)))?;
        self.run_from_reader(BufReader::new(file))
            .map_err(|e| match e {
                Error::CsvParse(_) | Error::Io(_) | Error::DataMismatch(_) => {
                    Error::csv_read(path, e)
                }
                other => other,
            })
    }

    /// Runs the transformation over an already opened CSV source.
    pub fn run_from_reader<R: Read>(&self, reader: R) -> Result<Report, Error> {
        let decoded = DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(reader);

        // Read header
        let mut table = TableReader::new(decoded)?;
        let mut report = Report {
            languages: table.languages().to_vec(),
            ..Report::default()
        };
        info!(languages = ?report.languages, "discovered languages");

        let mut stores = LanguageStores::new();
        for language in table.languages() {
            if stores.get(language).is_some() {
                continue;
            }
            let (store, failure) = self.load_store(language);
            if let Some(error) = failure {
                report.record_failure(language, error);
            }
            stores.insert(store);
        }

        // Read rows
        while let Some(row) = table.next_row() {
            let row = row?;
            debug!(key = %row.key, "applying row");
            stores.apply(&row);
            report.rows += 1;
        }
        info!(rows = report.rows, "processed translation table");

        // Persist
        self.persist(&stores, &mut report);
        Ok(report)
    }

    /// Loads the existing ARB file for `language`.
    ///
    /// A missing file yields an empty store with no error. A file that cannot
    /// be read or parsed yields an empty store and the error describing why.
    pub fn load_store(&self, language: &str) -> (LanguageStore, Option<Error>) {
        let path = self.config.arb_path(language);
        match ArbFormat::read_from(&path) {
            Ok(document) => {
                debug!(language, path = %path.display(), entries = document.len(), "loaded existing resource");
                (LanguageStore::new(language, document), None)
            }
            Err(e) if e.is_not_found() => {
                debug!(language, path = %path.display(), "no existing resource, starting empty");
                (LanguageStore::empty(language), None)
            }
            Err(e) => {
                let error = Error::resource_read(&path, e);
                warn!(language, "{}; starting from an empty store", error);
                (LanguageStore::empty(language), Some(error))
            }
        }
    }

    /// Writes every store to its ARB file. A failure for one language is
    /// recorded and the remaining languages are still written.
    pub fn persist(&self, stores: &LanguageStores, report: &mut Report) {
        if let Err(e) = std::fs::create_dir_all(&self.config.arb_dir) {
            warn!(
                path = %self.config.arb_dir.display(),
                "could not create output directory: {}", e
            );
        }

        for store in stores.iter() {
            let path = self.config.arb_path(store.language());
            match write_store(store, &path) {
                Ok(()) => {
                    info!(language = store.language(), path = %path.display(), "wrote resource");
                    report.written.push(path);
                }
                Err(e) => {
                    let error = Error::resource_write(&path, e);
                    error!(language = store.language(), "{}", error);
                    report.record_failure(store.language(), error);
                }
            }
        }
    }
}

fn write_store(store: &LanguageStore, path: &Path) -> Result<(), Error> {
    store.document().write_to(path)
}
