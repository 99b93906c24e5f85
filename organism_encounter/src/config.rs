/// Organism Encounter v1 — Resolution Configuration
///
/// Injected into a `Resolver`. Defaults are the strict behaviour:
/// reject plant-vs-plant encounters, reject vitality overflow,
/// validate every outcome.

use serde::{Deserialize, Serialize};

/// Handling of an encounter where both participants are plants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantPairPolicy {
    /// Return `EncounterError::InvalidEncounter`.
    #[default]
    Reject,
    /// Return both participants unchanged with no offspring.
    Inert,
}

/// Handling of vitality sums past `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Return `EncounterError::VitalityOverflow`.
    #[default]
    Reject,
    /// Clamp at `u64::MAX`.
    Saturate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EncounterConfig {
    pub plant_pair: PlantPairPolicy,
    pub overflow: OverflowPolicy,
    pub validate_outcomes: bool,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            plant_pair: PlantPairPolicy::Reject,
            overflow: OverflowPolicy::Reject,
            validate_outcomes: true,
        }
    }
}

impl EncounterConfig {
    /// Parse a config from JSON. Missing fields take their defaults,
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
