/// Organism Encounter v1 — Outcome Invariant Checks
///
/// Post-resolution validation of an `Encounter` against its inputs.
/// `validate_outcome` reports the first failure as `Err(message)`;
/// `assert_outcome` panics with the same message.

use crate::encounter::Encounter;
use crate::organism::Organism;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run all outcome checks. Returns the first failure.
pub fn validate_outcome<S: Clone + PartialEq>(
    o1: &Organism<S>,
    o2: &Organism<S>,
    outcome: &Encounter<S>,
) -> Result<(), String> {
    check_identity(o1, &outcome.first, "first")?;
    check_identity(o2, &outcome.second, "second")?;
    check_dead_are_inert(o1, o2, outcome)?;
    check_vitality_direction(o1, &outcome.first, "first")?;
    check_vitality_direction(o2, &outcome.second, "second")?;
    check_offspring(o1, o2, outcome)?;
    Ok(())
}

/// Panicking variant of `validate_outcome`.
pub fn assert_outcome<S: Clone + PartialEq>(
    o1: &Organism<S>,
    o2: &Organism<S>,
    outcome: &Encounter<S>,
) {
    if let Err(msg) = validate_outcome(o1, o2, outcome) {
        panic!("Invariant violation: {}", msg);
    }
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

/// Species and diet never change across an encounter.
fn check_identity<S: PartialEq>(
    before: &Organism<S>,
    after: &Organism<S>,
    side: &str,
) -> Result<(), String> {
    if before.species() != after.species() {
        return Err(format!(
            "[INVARIANT:identity] {} participant changed species",
            side
        ));
    }
    if before.diet() != after.diet() {
        return Err(format!(
            "[INVARIANT:identity] {} participant changed diet from {} to {}",
            side,
            before.diet(),
            after.diet()
        ));
    }
    Ok(())
}

/// Dead participants leave both sides untouched and breed nothing.
fn check_dead_are_inert<S: PartialEq>(
    o1: &Organism<S>,
    o2: &Organism<S>,
    outcome: &Encounter<S>,
) -> Result<(), String> {
    if !(o1.is_dead() || o2.is_dead()) {
        return Ok(());
    }
    if outcome.first != *o1 || outcome.second != *o2 || outcome.offspring.is_some() {
        return Err(
            "[INVARIANT:dead_inert] encounter with a dead participant changed state"
                .to_string(),
        );
    }
    Ok(())
}

/// Vitality goes to zero, stays put, or grows. Never partially drops.
fn check_vitality_direction<S>(
    before: &Organism<S>,
    after: &Organism<S>,
    side: &str,
) -> Result<(), String> {
    let (b, a) = (before.vitality(), after.vitality());
    if a != 0 && a < b {
        return Err(format!(
            "[INVARIANT:vitality_direction] {} participant dropped from {} to {}",
            side, b, a
        ));
    }
    Ok(())
}

/// Offspring only from same-kind parents, who stay unchanged.
fn check_offspring<S: Clone + PartialEq>(
    o1: &Organism<S>,
    o2: &Organism<S>,
    outcome: &Encounter<S>,
) -> Result<(), String> {
    let child = match &outcome.offspring {
        Some(child) => child,
        None => return Ok(()),
    };
    if !o1.same_kind(o2) {
        return Err(format!(
            "[INVARIANT:offspring] offspring from different kinds ({} vs {})",
            o1.diet(),
            o2.diet()
        ));
    }
    if child.species() != o1.species() || child.diet() != o1.diet() {
        return Err("[INVARIANT:offspring] offspring does not match first parent".to_string());
    }
    let lo = o1.vitality().min(o2.vitality());
    let hi = o1.vitality().max(o2.vitality());
    if child.vitality() < lo || child.vitality() > hi {
        return Err(format!(
            "[INVARIANT:offspring] offspring vitality {} outside [{}, {}]",
            child.vitality(),
            lo,
            hi
        ));
    }
    if outcome.first != *o1 || outcome.second != *o2 {
        return Err("[INVARIANT:offspring] parents changed while breeding".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(
        first: Organism<&'static str>,
        second: Organism<&'static str>,
        offspring: Option<Organism<&'static str>>,
    ) -> Encounter<&'static str> {
        Encounter {
            first,
            second,
            offspring,
        }
    }

    #[test]
    fn test_valid_predation_passes() {
        let wolf = Organism::carnivore("wolf", 10);
        let fox = Organism::carnivore("fox", 4);
        let out = outcome(
            Organism::carnivore("wolf", 12),
            Organism::carnivore("fox", 0),
            None,
        );
        assert_eq!(validate_outcome(&wolf, &fox, &out), Ok(()));
    }

    #[test]
    fn test_species_change_fails() {
        let wolf = Organism::carnivore("wolf", 10);
        let fox = Organism::carnivore("fox", 4);
        let out = outcome(Organism::carnivore("dog", 10), fox.clone(), None);
        let err = validate_outcome(&wolf, &fox, &out).unwrap_err();
        assert!(err.contains("identity"), "got: {}", err);
    }

    #[test]
    fn test_dead_change_fails() {
        let wolf = Organism::carnivore("wolf", 10);
        let fox = Organism::carnivore("fox", 0);
        let out = outcome(Organism::carnivore("wolf", 10), Organism::carnivore("fox", 3), None);
        let err = validate_outcome(&wolf, &fox, &out).unwrap_err();
        assert!(err.contains("dead_inert"), "got: {}", err);
    }

    #[test]
    fn test_partial_drop_fails() {
        let wolf = Organism::carnivore("wolf", 10);
        let fox = Organism::carnivore("fox", 4);
        let out = outcome(Organism::carnivore("wolf", 9), fox.clone(), None);
        let err = validate_outcome(&wolf, &fox, &out).unwrap_err();
        assert!(err.contains("vitality_direction"), "got: {}", err);
    }

    #[test]
    fn test_cross_kind_offspring_fails() {
        let wolf = Organism::carnivore("wolf", 10);
        let fox = Organism::carnivore("fox", 4);
        let out = outcome(wolf.clone(), fox.clone(), Some(Organism::carnivore("wolf", 7)));
        let err = validate_outcome(&wolf, &fox, &out).unwrap_err();
        assert!(err.contains("offspring"), "got: {}", err);
    }

    #[test]
    fn test_offspring_out_of_range_fails() {
        let a = Organism::herbivore("deer", 10);
        let b = Organism::herbivore("deer", 4);
        let out = outcome(a.clone(), b.clone(), Some(Organism::herbivore("deer", 11)));
        let err = validate_outcome(&a, &b, &out).unwrap_err();
        assert!(err.contains("outside"), "got: {}", err);
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn test_assert_outcome_panics() {
        let a = Organism::herbivore("deer", 10);
        let b = Organism::herbivore("deer", 4);
        let out = outcome(a.clone(), Organism::herbivore("deer", 1), Some(a.breed(&b)));
        assert_outcome(&a, &b, &out);
    }
}
