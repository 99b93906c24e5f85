//! Codec — canonical encoding and hashing of organisms and encounters.
//!
//! Pure codec layer. No I/O, no timestamps.
//!
//! - `encode_organism` / `decode_organism`: strict JSON for one organism
//! - `canonical_serialize`: encounter → compact JSON in fixed field order
//! - `canonical_hash`:      SHA-256 of the canonical bytes (lowercase hex)

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::encounter::Encounter;
use crate::organism::Organism;
use crate::RULESET_VERSION;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// JSON serialization failed.
    #[error("SerializationError: {0}")]
    Serialization(String),
    /// JSON deserialization failed (malformed, unknown fields, negative vitality).
    #[error("DeserializationError: {0}")]
    Deserialization(String),
}

// ---------------------------------------------------------------------------
// Single organism
// ---------------------------------------------------------------------------

pub fn encode_organism<S: Serialize>(organism: &Organism<S>) -> Result<String, CodecError> {
    serde_json::to_string(organism).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Strict: unknown fields, missing fields and out-of-range vitality all fail.
pub fn decode_organism<S: DeserializeOwned>(json: &str) -> Result<Organism<S>, CodecError> {
    serde_json::from_str(json).map_err(|e| CodecError::Deserialization(e.to_string()))
}

// ---------------------------------------------------------------------------
// Canonical encounter encoding
// ---------------------------------------------------------------------------

/// Field order: ruleset_version, first, second, offspring.
/// Each organism: species, vitality, diet. No whitespace.
pub fn canonical_serialize<S: Serialize>(outcome: &Encounter<S>) -> Result<Vec<u8>, CodecError> {
    let mut root = Map::new();
    root.insert(
        "ruleset_version".to_string(),
        Value::Number(RULESET_VERSION.into()),
    );
    root.insert("first".to_string(), organism_value(&outcome.first)?);
    root.insert("second".to_string(), organism_value(&outcome.second)?);
    let offspring = match &outcome.offspring {
        Some(child) => organism_value(child)?,
        None => Value::Null,
    };
    root.insert("offspring".to_string(), offspring);

    serde_json::to_string(&Value::Object(root))
        .map(String::into_bytes)
        .map_err(|e| CodecError::Serialization(e.to_string()))
}

/// SHA-256 of `canonical_serialize`. Lowercase hex string.
pub fn canonical_hash<S: Serialize>(outcome: &Encounter<S>) -> Result<String, CodecError> {
    let bytes = canonical_serialize(outcome)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

fn organism_value<S: Serialize>(organism: &Organism<S>) -> Result<Value, CodecError> {
    let species = serde_json::to_value(organism.species())
        .map_err(|e| CodecError::Serialization(e.to_string()))?;
    let mut map = Map::new();
    map.insert("species".to_string(), species);
    map.insert(
        "vitality".to_string(),
        Value::Number(organism.vitality().into()),
    );
    map.insert(
        "diet".to_string(),
        Value::String(organism.diet().as_str().to_string()),
    );
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organism_json_shape() {
        let wolf = Organism::carnivore("wolf".to_string(), 10);
        assert_eq!(
            encode_organism(&wolf).unwrap(),
            r#"{"species":"wolf","vitality":10,"diet":"carnivore"}"#
        );
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let err = decode_organism::<String>(
            r#"{"species":"wolf","vitality":10,"diet":"carnivore","age":3}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::Deserialization(_)));
    }

    #[test]
    fn decode_rejects_negative_vitality() {
        assert!(decode_organism::<String>(
            r#"{"species":"wolf","vitality":-1,"diet":"carnivore"}"#
        )
        .is_err());
    }

    #[test]
    fn decode_rejects_unknown_diet() {
        assert!(decode_organism::<String>(
            r#"{"species":"wolf","vitality":1,"diet":"fungus"}"#
        )
        .is_err());
    }

    #[test]
    fn decode_accepts_numeric_species() {
        let o: Organism<u32> =
            decode_organism(r#"{"species":7,"vitality":3,"diet":"plant"}"#).unwrap();
        assert_eq!(o, Organism::plant(7, 3));
    }

    #[test]
    fn canonical_layout() {
        let outcome = Encounter {
            first: Organism::herbivore("deer", 10),
            second: Organism::herbivore("deer", 4),
            offspring: Some(Organism::herbivore("deer", 7)),
        };
        let json = String::from_utf8(canonical_serialize(&outcome).unwrap()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"ruleset_version":1,"#,
                r#""first":{"species":"deer","vitality":10,"diet":"herbivore"},"#,
                r#""second":{"species":"deer","vitality":4,"diet":"herbivore"},"#,
                r#""offspring":{"species":"deer","vitality":7,"diet":"herbivore"}}"#
            )
        );
    }

    #[test]
    fn canonical_null_offspring() {
        let outcome = Encounter {
            first: Organism::carnivore(1u8, 12),
            second: Organism::carnivore(2u8, 0),
            offspring: None,
        };
        let json = String::from_utf8(canonical_serialize(&outcome).unwrap()).unwrap();
        assert!(json.ends_with(r#""offspring":null}"#), "got: {}", json);
    }

    #[test]
    fn hash_is_lowercase_hex() {
        let outcome = Encounter {
            first: Organism::plant("moss", 1),
            second: Organism::herbivore("snail", 1),
            offspring: None,
        };
        let h = canonical_hash(&outcome).unwrap();
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
