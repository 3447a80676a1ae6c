//! Per-language stores and the row merge.
//!
//! A [`LanguageStore`] wraps the ARB document of one language. Rows from the
//! CSV table are folded into every store with [`LanguageStores::apply`]:
//! the message value is always overwritten, and `@key` metadata is written
//! whenever the new value contains placeholders.
//!
//! Metadata is never removed. If a value loses its placeholders, an `@key`
//! entry written earlier (by a previous row or a previous run) stays in place.

use indexmap::IndexMap;
use tracing::trace;

use crate::{formats::ArbFormat, formats::Row, placeholder::placeholder_metadata};

/// The translations of one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStore {
    language: String,
    document: ArbFormat,
}

impl LanguageStore {
    /// Creates an empty store for `language`.
    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(language, ArbFormat::new())
    }

    /// Creates a store seeded with previously persisted content.
    pub fn new(language: impl Into<String>, document: ArbFormat) -> Self {
        LanguageStore {
            language: language.into(),
            document,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn document(&self) -> &ArbFormat {
        &self.document
    }

    /// Writes `value` under `key`, plus `@key` metadata if `value` has placeholders.
    pub fn merge(&mut self, key: &str, value: &str) {
        self.document.set_message(key, value);
        if let Some(metadata) = placeholder_metadata(value) {
            trace!(language = %self.language, key, "writing placeholder metadata");
            self.document.set_metadata(key, metadata.to_value());
        }
    }
}

/// One store per language code, in header order.
#[derive(Debug, Clone, Default)]
pub struct LanguageStores {
    stores: IndexMap<String, LanguageStore>,
}

impl LanguageStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `store`, replacing any store already registered for its language.
    pub fn insert(&mut self, store: LanguageStore) {
        self.stores.insert(store.language.clone(), store);
    }

    /// Folds one CSV row into the store of every language the row carries.
    /// Languages without a registered store get an empty one.
    pub fn apply(&mut self, row: &Row) {
        for (language, value) in &row.values {
            self.stores
                .entry(language.clone())
                .or_insert_with(|| LanguageStore::empty(language.clone()))
                .merge(&row.key, value);
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStore> {
        self.stores.get(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageStore> {
        self.stores.values()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.stores.keys().map(String::as_str)
    }
}
