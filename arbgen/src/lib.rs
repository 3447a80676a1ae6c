#![forbid(unsafe_code)]
//! Generate ARB localization files from a multi-language CSV table.
//!
//! The table has one key column and one column per language. Each language
//! gets its own ARB file; values from the table are merged into whatever the
//! file already holds, and messages with `{placeholder}` tokens get a matching
//! `@key` metadata entry.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use arbgen::{Config, Generator};
//!
//! let report = Generator::new(Config::load(None)?).run()?;
//! for path in &report.written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), arbgen::Error>(())
//! ```
//!
//! Given `csv/lang.csv`:
//!
//! ```text
//! key,en,fr
//! greeting,Hello {name},Bonjour {name}
//! ```
//!
//! the run writes `arb/intl_en.arb`:
//!
//! ```json
//! {
//!     "greeting": "Hello {name}",
//!     "@greeting": {
//!         "placeholders": {
//!             "name": {}
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod formats;
pub mod generator;
pub mod placeholder;
pub mod store;

// Re-export most used types for easy consumption
pub use crate::{
    config::Config,
    error::Error,
    formats::{ArbFormat, Row, TableReader},
    generator::{Generator, LanguageFailure, Report},
    placeholder::{PlaceholderMetadata, extract_placeholders, placeholder_metadata},
    store::{LanguageStore, LanguageStores},
};
