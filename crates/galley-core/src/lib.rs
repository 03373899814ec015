//! Galley Core -- the enrichment engine for restaurant-management game data.
//!
//! This crate takes validated relational tables (dishes, ingredients,
//! parties, staff, chapters, DLCs, cooksta tiers, plus the dish-ingredient
//! and dish-party join tables) and computes everything a read-only frontend
//! needs precomputed: recipe costs, revenues, profits, per-party economics,
//! search strings, and stable sort keys.
//!
//! # Pipeline
//!
//! The full build is a single synchronous pass:
//!
//! 1. **Dataset** -- All validated rows, frozen into a [`dataset::Dataset`]
//!    value that is passed by reference into every later stage.
//! 2. **Graph** -- [`graph::RelationGraph`] indexes the join tables in both
//!    directions with O(1) amortized lookups.
//! 3. **Enrichment** -- One enricher per entity type (see [`enrich`])
//!    computes derived fields as pure `(&Dataset, &RelationGraph) -> Vec<_>`
//!    functions. No shared mutable state, no globals.
//!
//! Facet indexing and sort-order materialization live one crate up, in
//! `galley-bundle`.
//!
//! # Error policy
//!
//! Schema validation happens before this crate is reached and is fatal.
//! Inside the enrichment pass, a join that points at a missing entity is
//! logged as a warning and skipped; missing optional prices degrade to
//! `None` (or, for recipe-cost purposes only, to a zero contribution).
//! Nothing in this crate aborts a run.

pub mod dataset;
pub mod enrich;
pub mod graph;
pub mod id;
pub mod money;
pub mod row;
pub mod text;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
