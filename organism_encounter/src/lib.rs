#![forbid(unsafe_code)]

//! Organism Encounter v1
//!
//! Pure, deterministic resolution of pairwise encounters between
//! organisms: one eats the other, both breed, or nothing happens.
//! No population, no simulation loop, no randomness, no I/O.

/// Ruleset v1. Bound into every canonical hash; behavioural changes
/// require a new version.
pub const RULESET_VERSION: u32 = 1;

pub mod arithmetic;
pub mod error;
pub mod diet;
pub mod organism;
pub mod config;
pub mod invariants;
pub mod encounter;
pub mod series;
pub mod codec;

pub use config::{EncounterConfig, OverflowPolicy, PlantPairPolicy};
pub use diet::DietClassification;
pub use encounter::{encounter, Encounter, Resolver};
pub use error::{EncounterError, EncounterResult};
pub use organism::Organism;
pub use series::encounter_series;
