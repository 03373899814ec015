//! Bundle construction and export.
//!
//! A bundle is the externally visible unit per entity type:
//! `{byId, facets, sortedIds}`. `byId` is the single source of truth;
//! facets and sorted id lists are pure derived indices that never introduce
//! or omit ids relative to it.
//!
//! - [`facet`] builds the inverted indices, including the cumulative
//!   chapter/cooksta semantics ("unlocked at tier N" means "available at
//!   every tier >= N").
//! - [`sort`] materializes total orderings for a fixed set of
//!   (field, direction) pairs, with directional null handling and an
//!   ascending-id tie-break.
//! - [`build`] runs the whole pipeline over a frozen dataset and assembles
//!   one bundle per entity type.
//! - [`export`] serializes bundles to deterministic JSON files, written
//!   only after the entire build has succeeded.

pub mod build;
pub mod bundle;
pub mod export;
pub mod facet;
pub mod sort;

pub use build::{build_all, Bundles};
pub use bundle::{Bundle, ClosureError, SCHEMA_VERSION};
pub use export::{export_bundles, ExportError};
