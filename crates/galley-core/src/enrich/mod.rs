//! Entity enrichers: one pure pass per entity type.
//!
//! Every enricher is a function of `(&Dataset, &RelationGraph)` (plus, for
//! the party enricher, the already-derived party dishes) returning freshly
//! built enriched rows. Nothing here mutates shared state, so each entity
//! type could be enriched independently.
//!
//! The dish enricher is the heavy one: it derives recipe costs, revenues,
//! profits, the per-party [`dish::EnrichedPartyDish`] rows, and the
//! best-outcome `max_profit_per_serving` aggregate. The others compute
//! reverse views, display orders, and search strings.

pub mod dish;
pub mod ingredient;
pub mod misc;
pub mod party;
pub mod staff;

pub use dish::{enrich_dishes, EnrichedDish, EnrichedPartyDish, IngredientLine};
pub use ingredient::{enrich_ingredients, EnrichedIngredient, UsedIn};
pub use misc::{
    enrich_chapters, enrich_cooksta, enrich_dlcs, EnrichedChapter, EnrichedCookstaTier,
    EnrichedDlc,
};
pub use party::{enrich_parties, EnrichedParty};
pub use staff::{enrich_staff, EnrichedStaff};
