//! Table file discovery and deserialization.
//!
//! Each table is one file named after the table (`dishes`, `ingredients`,
//! `dish_ingredients`, ...) in RON, JSON, or TOML. Exactly one format per
//! table; two files with the same base name is a hard error rather than a
//! silent pick. `dishes`, `ingredients`, and `dish_ingredients` are
//! required; every other table may be absent and loads as empty.

use crate::schema::*;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while locating and deserializing table files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A required table file was not found in the data directory.
    #[error("required table '{table}' not found in {dir}")]
    MissingRequired { table: &'static str, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same table name but different formats exist.
    #[error("conflicting formats for one table: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection and discovery
// ===========================================================================

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(LoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Scan a directory for a table file with the given base name.
///
/// Looks for `{table}.ron`, `{table}.toml`, and `{table}.json`. Returns
/// `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if more
/// than one exists.
pub fn find_table_file(dir: &Path, table: &str) -> Result<Option<PathBuf>, LoadError> {
    let mut found: Option<PathBuf> = None;
    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{table}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(LoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }
    Ok(found)
}

/// Deserialize a table's row list. For TOML the list lives under the
/// table's own key; RON and JSON deserialize directly as a list.
pub fn deserialize_rows<T: DeserializeOwned>(path: &Path, table: &str) -> Result<Vec<T>, LoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let parse_err = |detail: String| LoadError::Parse {
        file: path.to_path_buf(),
        detail,
    };

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => {
            let value: toml::Value =
                toml::from_str(&content).map_err(|e| parse_err(e.to_string()))?;
            let list = value
                .get(table)
                .ok_or_else(|| parse_err(format!("missing key '{table}' in TOML file")))?
                .clone();
            list.try_into()
                .map_err(|e: toml::de::Error| parse_err(e.to_string()))
        }
    }
}

// ===========================================================================
// Raw tables
// ===========================================================================

/// Every table as deserialized, before validation.
#[derive(Debug, Default)]
pub struct RawTables {
    pub dishes: Vec<RawDish>,
    pub ingredients: Vec<RawIngredient>,
    pub parties: Vec<RawParty>,
    pub staff: Vec<RawStaff>,
    pub chapters: Vec<RawChapter>,
    pub dlcs: Vec<RawDlc>,
    pub cooksta: Vec<RawCookstaTier>,
    pub dish_ingredients: Vec<RawDishIngredient>,
    pub dish_parties: Vec<RawDishParty>,
}

fn load_table<T: DeserializeOwned>(
    dir: &Path,
    table: &'static str,
    required: bool,
) -> Result<Vec<T>, LoadError> {
    match find_table_file(dir, table)? {
        Some(path) => deserialize_rows(&path, table),
        None if required => Err(LoadError::MissingRequired {
            table,
            dir: dir.to_path_buf(),
        }),
        None => Ok(Vec::new()),
    }
}

/// Discover and deserialize every table in `dir`.
pub fn load_raw_tables(dir: &Path) -> Result<RawTables, LoadError> {
    Ok(RawTables {
        dishes: load_table(dir, "dishes", true)?,
        ingredients: load_table(dir, "ingredients", true)?,
        parties: load_table(dir, "parties", false)?,
        staff: load_table(dir, "staff", false)?,
        chapters: load_table(dir, "chapters", false)?,
        dlcs: load_table(dir, "dlcs", false)?,
        cooksta: load_table(dir, "cooksta", false)?,
        dish_ingredients: load_table(dir, "dish_ingredients", true)?,
        dish_parties: load_table(dir, "dish_parties", false)?,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
