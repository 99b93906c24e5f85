/// Organism Encounter v1 — Encounter Series
///
/// Left fold of encounters against one protagonist. Only the
/// protagonist's resolved state carries forward; the opponents'
/// resolved states and any offspring are discarded.
///
/// Neither commutative nor associative: each step sees the vitality
/// accumulated by the steps before it.

use tracing::trace;

use crate::encounter::Resolver;
use crate::error::EncounterResult;
use crate::organism::Organism;

impl Resolver {
    /// `encounter(...encounter(encounter(p, x1).first, x2).first..., xn).first`
    ///
    /// An empty series returns the protagonist unchanged. The first failing
    /// step aborts the fold.
    pub fn encounter_series<'a, S, I>(
        &self,
        protagonist: Organism<S>,
        others: I,
    ) -> EncounterResult<Organism<S>>
    where
        S: Clone + PartialEq + 'a,
        I: IntoIterator<Item = &'a Organism<S>>,
    {
        others
            .into_iter()
            .enumerate()
            .try_fold(protagonist, |current, (step, other)| {
                let next = self.encounter(&current, other)?.first;
                trace!(step, vitality = next.vitality(), "series step resolved");
                Ok(next)
            })
    }
}

/// Fold `others` against `protagonist` under the default configuration.
pub fn encounter_series<'a, S, I>(protagonist: Organism<S>, others: I) -> EncounterResult<Organism<S>>
where
    S: Clone + PartialEq + 'a,
    I: IntoIterator<Item = &'a Organism<S>>,
{
    Resolver::default().encounter_series(protagonist, others)
}
