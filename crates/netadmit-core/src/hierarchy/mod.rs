//! Group hierarchy resolution.
//!
//! A device inherits enforcements from every ancestor of its directly
//! assigned groups. This module computes that ancestor closure by walking
//! `parent` links upward from each direct group.
//!
//! # Misconfiguration tolerance
//!
//! The parent relation should form a forest, but administrators can
//! misconfigure it into a cycle (including a group that is its own parent).
//! The walk keeps a per-chain visited guard and a depth bound, so it always
//! terminates with a finite set; a detected cycle is logged as an anomaly
//! and truncates that chain, it never fails the session.

use std::collections::BTreeSet;

use tracing::warn;

use crate::model::{DeviceId, GroupId};
use crate::storage::{StorageError, Store};

/// Default bound on the length of a single parent chain.
///
/// Deployments nest groups a handful of levels deep; the bound only exists
/// to cap pathological configurations and can be raised through
/// [`EngineConfig`](crate::engine::EngineConfig).
pub const DEFAULT_MAX_PARENT_DEPTH: usize = 64;

/// Resolves the full group set of a device: its direct groups plus every
/// ancestor reachable through `parent` links, deduplicated.
///
/// The returned set is ordered by group id, which downstream stages rely on
/// for deterministic iteration.
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be read. Cyclic or dangling
/// parent references are tolerated, not errors.
pub fn resolve_group_set(
    store: &impl Store,
    device: DeviceId,
    max_depth: usize,
) -> Result<BTreeSet<GroupId>, StorageError> {
    let direct = store.groups_of(device)?;
    let mut resolved: BTreeSet<GroupId> = direct.iter().map(|g| g.id).collect();

    for group in &direct {
        let mut chain: Vec<GroupId> = vec![group.id];
        let mut next = group.parent;

        while let Some(parent_id) = next {
            if chain.contains(&parent_id) {
                warn!(
                    device = %device,
                    group = %group.id,
                    parent = %parent_id,
                    "cycle in group parent chain; truncating walk"
                );
                break;
            }
            if chain.len() > max_depth {
                warn!(
                    device = %device,
                    group = %group.id,
                    max_depth,
                    "group parent chain exceeds depth bound; truncating walk"
                );
                break;
            }
            let Some(parent) = store.group(parent_id)? else {
                warn!(
                    device = %device,
                    group = %group.id,
                    parent = %parent_id,
                    "parent group missing from store; truncating walk"
                );
                break;
            };
            if !resolved.insert(parent_id) {
                // Ancestor already reached through another chain; everything
                // above it is already accumulated or will be by its own walk.
                break;
            }
            chain.push(parent_id);
            next = parent.parent;
        }
    }

    Ok(resolved)
}

/// Resolves the groups a device inherited but is not directly assigned to.
///
/// Display-only; enforcement collection always uses the full set from
/// [`resolve_group_set`].
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be read.
pub fn inherited_group_set(
    store: &impl Store,
    device: DeviceId,
    max_depth: usize,
) -> Result<BTreeSet<GroupId>, StorageError> {
    let mut resolved = resolve_group_set(store, device, max_depth)?;
    for group in store.groups_of(device)? {
        resolved.remove(&group.id);
    }
    Ok(resolved)
}
