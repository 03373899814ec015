//! Input layer for the galley build: file discovery, deserialization, and
//! row validation.
//!
//! Tables live as data files (`dishes.ron`, `ingredients.json`,
//! `dish_ingredients.toml`, ...) in one directory, one file per table, one
//! format per table. [`load_dataset`] discovers and deserializes them, runs
//! every row through schema validation, resolves join-row name references
//! to ids, and freezes the result into a [`galley_core::dataset::Dataset`].
//!
//! Schema violations are fatal and name the table, the 1-based row position
//! (counting the header row of the spreadsheet the table is exported from),
//! and every violated field. Join rows that reference an unknown name are
//! dropped with a warning and never abort the run.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::{load_raw_tables, LoadError, RawTables};
pub use validate::{validate_tables, ValidateError};

use galley_core::dataset::Dataset;
use std::path::Path;

/// Everything that can abort a load.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// Load, validate, and freeze every table in `dir`.
pub fn load_dataset(dir: &Path) -> Result<Dataset, DataError> {
    let raw = load_raw_tables(dir)?;
    Ok(validate_tables(raw)?)
}
