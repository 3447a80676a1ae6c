//! Support for the multi-language CSV translation table.
//!
//! The first record is a header: `key_column, lang1, lang2, ...`. Every later
//! record is `key, value_for_lang1, value_for_lang2, ...`. Records may be
//! shorter or longer than the header; missing cells read as empty strings and
//! extra cells are ignored.
use std::io::Read;

use csv::StringRecord;
use indexmap::IndexMap;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// One data record bound to the header's language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    /// Language code to value, in header order.
    pub values: IndexMap<String, String>,
}

impl Row {
    /// Binds `record` to `languages`. Cell `i + 1` belongs to `languages[i]`;
    /// cells past the end of the record read as `""`.
    pub fn from_record(languages: &[String], record: &StringRecord) -> Result<Self, Error> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let key = record.get(0).ok_or_else(|| {
            Error::DataMismatch(format!("record on line {} has no key column", line))
        })?;
        if key.is_empty() {
            warn!(line, "record has an empty key");
        }

        let values = languages
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let value = record.get(i + 1).unwrap_or_default();
                (lang.clone(), value.to_string())
            })
            .collect();

        Ok(Row {
            key: key.to_string(),
            values,
        })
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }
}

/// Reads a translation table header-first, then yields rows one at a time.
pub struct TableReader<R: Read> {
    key_header: String,
    languages: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> TableReader<R> {
    /// Consumes the header record.
    ///
    /// Fails with [`Error::Configuration`] when the header has fewer than two
    /// columns or the input is empty.
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        let header = match records.next() {
            Some(header) => header?,
            None => return Err(Error::missing_language_columns()),
        };
        if header.len() < 2 {
            return Err(Error::missing_language_columns());
        }

        let key_header = header[0].to_string();
        let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
        check_languages(&languages);

        Ok(TableReader {
            key_header,
            languages,
            records,
        })
    }

    /// Name of the key column as written in the header.
    pub fn key_header(&self) -> &str {
        &self.key_header
    }

    /// Language codes in header order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Reads the next data row, or `None` at end of input.
    pub fn next_row(&mut self) -> Option<Result<Row, Error>> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(Error::CsvParse)
                .and_then(|record| Row::from_record(&self.languages, &record)),
        )
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<Row, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

fn check_languages(languages: &[String]) {
    for (i, lang) in languages.iter().enumerate() {
        if lang.parse::<LanguageIdentifier>().is_err() {
            warn!(column = i + 1, language = %lang, "header column is not a valid language identifier");
        }
        if languages[..i].contains(lang) {
            warn!(column = i + 1, language = %lang, "duplicate language column, rightmost value wins");
        }
    }
}
