/// Organism Encounter v1 — Organism Value
///
/// Immutable value: species, vitality, diet. Every transformation
/// returns a new `Organism`; nothing is mutated in place.
/// Vitality 0 means dead.

use serde::{Deserialize, Serialize};

use crate::arithmetic::{add_with, floor_half, floor_midpoint};
use crate::config::OverflowPolicy;
use crate::diet::DietClassification;
use crate::error::EncounterResult;

/// A single organism. `S` is the species identifier and only needs
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Organism<S> {
    species: S,
    vitality: u64,
    diet: DietClassification,
}

impl<S> Organism<S> {
    pub const fn new(species: S, vitality: u64, diet: DietClassification) -> Self {
        Self {
            species,
            vitality,
            diet,
        }
    }

    pub const fn plant(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, DietClassification::Plant)
    }

    pub const fn herbivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, DietClassification::Herbivore)
    }

    pub const fn carnivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, DietClassification::Carnivore)
    }

    pub const fn omnivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, DietClassification::Omnivore)
    }

    pub fn species(&self) -> &S {
        &self.species
    }

    pub fn vitality(&self) -> u64 {
        self.vitality
    }

    pub fn diet(&self) -> DietClassification {
        self.diet
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }

    pub fn is_plant(&self) -> bool {
        self.diet.is_plant()
    }
}

impl<S: Clone + PartialEq> Organism<S> {
    /// Same diet and same species: the pair breeds instead of fighting.
    pub fn same_kind(&self, other: &Organism<S>) -> bool {
        self.diet == other.diet && self.species == other.species
    }

    /// Outcome of `self` meeting `other`, from `self`'s side only.
    /// Overflow is rejected; see [`Organism::eat_with`].
    pub fn eat(&self, other: &Organism<S>) -> EncounterResult<Organism<S>> {
        self.eat_with(other, OverflowPolicy::Reject)
    }

    /// First matching branch wins:
    ///
    /// 1. `self` may eat `other`: a plant is absorbed whole, an animal
    ///    with strictly lower vitality yields half its vitality (floor).
    ///    An animal that is not strictly weaker falls through.
    /// 2. `other` may eat `self`: `self` dies if it is a plant, if `other`
    ///    is strictly stronger, or if both may eat each other at equal
    ///    vitality.
    /// 3. Otherwise `self` is returned unchanged.
    ///
    /// Two mutual predators at equal vitality therefore both die when
    /// each side is resolved against the other's original value.
    pub fn eat_with(
        &self,
        other: &Organism<S>,
        overflow: OverflowPolicy,
    ) -> EncounterResult<Organism<S>> {
        let self_is_plant = self.diet.is_plant();
        let other_is_plant = other.diet.is_plant();
        let self_can_eat = self.diet.can_eat(other.diet);
        let other_can_eat = other.diet.can_eat(self.diet);

        if self_can_eat {
            if other_is_plant {
                let v = add_with(self.vitality, other.vitality, overflow)?;
                return Ok(self.successor(v));
            }
            if self.vitality > other.vitality {
                let v = add_with(self.vitality, floor_half(other.vitality), overflow)?;
                return Ok(self.successor(v));
            }
        }

        if other_can_eat
            && (self_is_plant
                || other.vitality > self.vitality
                || (self_can_eat && other.vitality == self.vitality))
        {
            return Ok(self.successor(0));
        }

        Ok(self.clone())
    }

    /// Offspring of `self` and `other`: `self`'s species and diet, the
    /// floor midpoint of both vitalities. Callers check `same_kind`.
    pub fn breed(&self, other: &Organism<S>) -> Organism<S> {
        self.successor(floor_midpoint(self.vitality, other.vitality))
    }

    fn successor(&self, vitality: u64) -> Organism<S> {
        Organism::new(self.species.clone(), vitality, self.diet)
    }
}
