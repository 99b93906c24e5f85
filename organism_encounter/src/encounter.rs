/// Organism Encounter v1 — Encounter Resolution
///
/// `Resolver` binds an `EncounterConfig` to the pure resolution
/// procedure. Inputs are never mutated; every outcome is a fresh value.
///
/// Resolution order, first match wins:
///   1. Both plants       → rejected, or inert under `PlantPairPolicy::Inert`
///   2. Either dead       → both unchanged, no offspring
///   3. Same diet+species → both unchanged, offspring bred from the first
///   4. Otherwise         → each side eats against the other's original value

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EncounterConfig, PlantPairPolicy};
use crate::error::{EncounterError, EncounterResult};
use crate::invariants::validate_outcome;
use crate::organism::Organism;

/// Resolved state of a single pairwise encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Encounter<S> {
    pub first: Organism<S>,
    pub second: Organism<S>,
    pub offspring: Option<Organism<S>>,
}

impl<S> Encounter<S> {
    fn unchanged(o1: &Organism<S>, o2: &Organism<S>) -> Self
    where
        S: Clone,
    {
        Self {
            first: o1.clone(),
            second: o2.clone(),
            offspring: None,
        }
    }

    pub fn into_tuple(self) -> (Organism<S>, Organism<S>, Option<Organism<S>>) {
        (self.first, self.second, self.offspring)
    }
}

/// Stateless resolver over a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: EncounterConfig,
}

impl Resolver {
    pub fn new(config: EncounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// Resolve one encounter between `o1` and `o2`.
    pub fn encounter<S: Clone + PartialEq>(
        &self,
        o1: &Organism<S>,
        o2: &Organism<S>,
    ) -> EncounterResult<Encounter<S>> {
        let outcome = self.resolve(o1, o2)?;
        if self.config.validate_outcomes {
            validate_outcome(o1, o2, &outcome).map_err(EncounterError::InvariantViolation)?;
        }
        Ok(outcome)
    }

    fn resolve<S: Clone + PartialEq>(
        &self,
        o1: &Organism<S>,
        o2: &Organism<S>,
    ) -> EncounterResult<Encounter<S>> {
        // -- At least one participant must be able to eat --
        if o1.is_plant() && o2.is_plant() {
            match self.config.plant_pair {
                PlantPairPolicy::Reject => {
                    warn!(first = %o1.diet(), second = %o2.diet(), "rejected plant-only encounter");
                    return Err(EncounterError::InvalidEncounter {
                        first: o1.diet(),
                        second: o2.diet(),
                    });
                }
                PlantPairPolicy::Inert => {
                    debug!(outcome = "inert", "plant-only encounter left unchanged");
                    return Ok(Encounter::unchanged(o1, o2));
                }
            }
        }

        if o1.is_dead() || o2.is_dead() {
            debug!(
                outcome = "dead",
                first_vitality = o1.vitality(),
                second_vitality = o2.vitality(),
                "dead participant, encounter skipped"
            );
            return Ok(Encounter::unchanged(o1, o2));
        }

        if o1.same_kind(o2) {
            let child = o1.breed(o2);
            debug!(
                outcome = "breed",
                diet = %o1.diet(),
                offspring_vitality = child.vitality(),
                "same-kind encounter bred offspring"
            );
            return Ok(Encounter {
                first: o1.clone(),
                second: o2.clone(),
                offspring: Some(child),
            });
        }

        // Both sides read the other's pre-encounter value.
        let first = o1.eat_with(o2, self.config.overflow)?;
        let second = o2.eat_with(o1, self.config.overflow)?;
        debug!(
            outcome = "predation",
            first_diet = %o1.diet(),
            second_diet = %o2.diet(),
            first_vitality = first.vitality(),
            second_vitality = second.vitality(),
            "predation resolved"
        );
        Ok(Encounter {
            first,
            second,
            offspring: None,
        })
    }
}

/// Resolve one encounter under the default configuration.
pub fn encounter<S: Clone + PartialEq>(
    o1: &Organism<S>,
    o2: &Organism<S>,
) -> EncounterResult<Encounter<S>> {
    Resolver::default().encounter(o1, o2)
}
