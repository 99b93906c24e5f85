/// Organism Encounter v1 — Diet Classification
///
/// Closed set of four capability profiles. Pure lookup, no state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What an organism is able to eat.
///
/// | Variant   | eats meat | eats plants |
/// |-----------|-----------|-------------|
/// | Plant     | no        | no          |
/// | Herbivore | no        | yes         |
/// | Carnivore | yes       | no          |
/// | Omnivore  | yes       | yes         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietClassification {
    Plant,
    Herbivore,
    Carnivore,
    Omnivore,
}

impl DietClassification {
    /// All four variants in table order.
    pub const ALL: [DietClassification; 4] = [
        DietClassification::Plant,
        DietClassification::Herbivore,
        DietClassification::Carnivore,
        DietClassification::Omnivore,
    ];

    pub const fn can_eat_meat(self) -> bool {
        matches!(self, DietClassification::Carnivore | DietClassification::Omnivore)
    }

    pub const fn can_eat_plants(self) -> bool {
        matches!(self, DietClassification::Herbivore | DietClassification::Omnivore)
    }

    /// True only for `Plant`: eats neither meat nor plants.
    pub const fn is_plant(self) -> bool {
        !self.can_eat_meat() && !self.can_eat_plants()
    }

    /// Whether this diet permits eating an organism of diet `prey`.
    /// Plants are eaten by plant-eaters, everything else by meat-eaters.
    pub const fn can_eat(self, prey: DietClassification) -> bool {
        if prey.is_plant() {
            self.can_eat_plants()
        } else {
            self.can_eat_meat()
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DietClassification::Plant => "plant",
            DietClassification::Herbivore => "herbivore",
            DietClassification::Carnivore => "carnivore",
            DietClassification::Omnivore => "omnivore",
        }
    }
}

impl fmt::Display for DietClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
