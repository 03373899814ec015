//! Chapter, DLC, and cooksta-tier enrichment.
//!
//! These entities carry no derived economics; they get a stable sort order
//! and a search string so the bundle builders can treat every entity type
//! uniformly.

use crate::dataset::Dataset;
use crate::id::*;
use crate::text::{sort_key, SearchBuilder};
use serde::Serialize;

/// A story chapter. Its number doubles as its display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedChapter {
    pub id: ChapterId,
    pub number: u32,
    pub name: String,
    pub order: u32,
    pub search: String,
    pub name_key: String,
}

/// A DLC pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDlc {
    pub id: DlcId,
    pub name: String,
    pub order: u32,
    pub search: String,
    pub name_key: String,
}

/// A cooksta tier. Its rank doubles as its display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCookstaTier {
    pub id: CookstaTierId,
    pub name: String,
    pub rank: u32,
    pub order: u32,
    pub search: String,
    pub name_key: String,
}

pub fn enrich_chapters(dataset: &Dataset) -> Vec<EnrichedChapter> {
    dataset
        .chapters
        .iter()
        .map(|row| {
            let mut search = SearchBuilder::new();
            search.push(&row.name);
            EnrichedChapter {
                id: row.id,
                number: row.number,
                name: row.name.clone(),
                order: row.number,
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}

pub fn enrich_dlcs(dataset: &Dataset) -> Vec<EnrichedDlc> {
    dataset
        .dlcs
        .iter()
        .map(|row| {
            let mut search = SearchBuilder::new();
            search.push(&row.name);
            EnrichedDlc {
                id: row.id,
                name: row.name.clone(),
                order: row.order,
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}

pub fn enrich_cooksta(dataset: &Dataset) -> Vec<EnrichedCookstaTier> {
    dataset
        .cooksta
        .iter()
        .map(|row| {
            let mut search = SearchBuilder::new();
            search.push(&row.name);
            EnrichedCookstaTier {
                id: row.id,
                name: row.name.clone(),
                rank: row.rank,
                order: row.rank,
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}
