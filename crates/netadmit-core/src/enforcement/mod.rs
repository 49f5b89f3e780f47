//! Enforcement collection and reduction.
//!
//! A device typically inherits the same policy through several groups, each
//! binding it with its own staleness threshold. [`collect`] gathers the raw
//! enforcement rules over the resolved group set; [`reduce`] collapses them
//! to exactly one rule per policy, keeping the strictest (smallest
//! `max_age_secs`).
//!
//! # Determinism
//!
//! Collection iterates groups in id order and relies on the store returning
//! each group's enforcements in a stable order, so the concatenation — and
//! with it the reducer's first-encountered tie-break — is reproducible for
//! an unchanged store.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Enforcement, GroupId, PolicyId};
use crate::storage::{StorageError, Store};

/// Gathers every enforcement attached to any group in the resolved set.
///
/// Duplicates per policy across groups are expected; [`reduce`] resolves
/// them.
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be read.
pub fn collect(
    store: &impl Store,
    groups: &BTreeSet<GroupId>,
) -> Result<Vec<Enforcement>, StorageError> {
    let mut collected = Vec::new();
    for group in groups {
        collected.extend(store.enforcements_of(*group)?);
    }
    Ok(collected)
}

/// Collapses a raw enforcement collection to one entry per policy.
///
/// A single pass folds the input into a map keyed by policy; an entry is
/// replaced only when a strictly smaller `max_age_secs` is seen, so at
/// equal thresholds the first-encountered enforcement wins. The map is
/// ordered by policy id for deterministic downstream iteration.
#[must_use]
pub fn reduce(enforcements: Vec<Enforcement>) -> BTreeMap<PolicyId, Enforcement> {
    let mut strictest: BTreeMap<PolicyId, Enforcement> = BTreeMap::new();
    for enforcement in enforcements {
        match strictest.entry(enforcement.policy) {
            Entry::Vacant(slot) => {
                slot.insert(enforcement);
            }
            Entry::Occupied(mut slot) => {
                if enforcement.max_age_secs < slot.get().max_age_secs {
                    slot.insert(enforcement);
                }
            }
        }
    }
    strictest
}
