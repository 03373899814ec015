//! The bundle container and its integrity check.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Version stamp embedded in every exported bundle file.
pub const SCHEMA_VERSION: u32 = 2;

/// Facet inverted index: facet name -> facet value -> ordered ids.
pub type FacetMap<Id> = BTreeMap<String, BTreeMap<String, Vec<Id>>>;

/// One entity type's fully denormalized, pre-indexed export unit.
///
/// All maps are BTreeMaps so that serialization order is a pure function of
/// content: running the build twice on identical input produces
/// byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle<Id: Ord, E> {
    pub schema_version: u32,
    pub by_id: BTreeMap<Id, E>,
    pub facets: FacetMap<Id>,
    pub sorted_ids: BTreeMap<String, Vec<Id>>,
}

/// A violation of the referential-closure invariant.
#[derive(Debug, thiserror::Error)]
pub enum ClosureError {
    #[error("facet {facet}={value} references id {id} missing from byId")]
    FacetUnknownId {
        facet: String,
        value: String,
        id: String,
    },
    #[error("sort order '{key}' references id {id} missing from byId")]
    SortUnknownId { key: String, id: String },
    #[error("sort order '{key}' has {got} ids, byId has {expected}")]
    SortIncomplete {
        key: String,
        got: usize,
        expected: usize,
    },
}

impl<Id: Ord + Copy + Debug, E> Bundle<Id, E> {
    /// Check that every id in facets/sortedIds exists in byId and that
    /// every sort order is a total ordering of byId's keys.
    pub fn verify_referential_closure(&self) -> Result<(), ClosureError> {
        for (facet, values) in &self.facets {
            for (value, ids) in values {
                for id in ids {
                    if !self.by_id.contains_key(id) {
                        return Err(ClosureError::FacetUnknownId {
                            facet: facet.clone(),
                            value: value.clone(),
                            id: format!("{id:?}"),
                        });
                    }
                }
            }
        }
        for (key, ids) in &self.sorted_ids {
            for id in ids {
                if !self.by_id.contains_key(id) {
                    return Err(ClosureError::SortUnknownId {
                        key: key.clone(),
                        id: format!("{id:?}"),
                    });
                }
            }
            if ids.len() != self.by_id.len() {
                return Err(ClosureError::SortIncomplete {
                    key: key.clone(),
                    got: ids.len(),
                    expected: self.by_id.len(),
                });
            }
        }
        Ok(())
    }
}
