//! Deterministic JSON export.
//!
//! Every bundle is serialized to bytes before anything touches the
//! filesystem, so a serialization failure leaves no partial output behind.
//! File contents are a pure function of the bundles: BTreeMap ordering
//! upstream makes two exports of the same build byte-identical.

use crate::build::Bundles;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize {file}: {source}")]
    Json {
        file: &'static str,
        source: serde_json::Error,
    },
    #[error("failed to write {file}: {source}")]
    Io {
        file: &'static str,
        source: std::io::Error,
    },
}

fn serialize<T: Serialize>(
    file: &'static str,
    bundle: &T,
    pretty: bool,
) -> Result<Vec<u8>, ExportError> {
    let result = if pretty {
        serde_json::to_vec_pretty(bundle)
    } else {
        serde_json::to_vec(bundle)
    };
    result.map_err(|source| ExportError::Json { file, source })
}

/// Write every bundle as one JSON file under `out_dir`, creating the
/// directory if needed. All-or-nothing: serialization happens up front and
/// no file is written until every bundle has produced its bytes.
pub fn export_bundles(bundles: &Bundles, out_dir: &Path, pretty: bool) -> Result<(), ExportError> {
    let files: Vec<(&'static str, Vec<u8>)> = vec![
        (
            "dishes.json",
            serialize("dishes.json", &bundles.dishes, pretty)?,
        ),
        (
            "party_dishes.json",
            serialize("party_dishes.json", &bundles.party_dishes, pretty)?,
        ),
        (
            "ingredients.json",
            serialize("ingredients.json", &bundles.ingredients, pretty)?,
        ),
        (
            "parties.json",
            serialize("parties.json", &bundles.parties, pretty)?,
        ),
        (
            "staff.json",
            serialize("staff.json", &bundles.staff, pretty)?,
        ),
        (
            "chapters.json",
            serialize("chapters.json", &bundles.chapters, pretty)?,
        ),
        ("dlcs.json", serialize("dlcs.json", &bundles.dlcs, pretty)?),
        (
            "cooksta.json",
            serialize("cooksta.json", &bundles.cooksta, pretty)?,
        ),
    ];

    fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        file: "<out dir>",
        source,
    })?;
    for (file, bytes) in files {
        fs::write(out_dir.join(file), bytes).map_err(|source| ExportError::Io { file, source })?;
    }
    Ok(())
}
