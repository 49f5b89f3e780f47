//! End-to-end tests for the resolution pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::clock::FixedClock;
use crate::model::{
    CheckResult, Device, DeviceId, DirectoryId, Enforcement, EnforcementId, FileId, Group, GroupId,
    Policy, PolicyId, PolicyType, ProductId, Recommendation, ResultId, Session, SessionId,
};
use crate::storage::MemoryStore;

use super::{Engine, EngineError};

const DEV: DeviceId = DeviceId(1);
const SESSION: SessionId = SessionId(100);

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
}

fn engine() -> Engine<FixedClock> {
    Engine::with_clock(FixedClock(now()))
}

fn group(id: u64, parent: Option<u64>) -> Group {
    Group {
        id: GroupId(id),
        name: format!("group-{id}"),
        parent: parent.map(GroupId),
        product_defaults: Vec::new(),
    }
}

fn file_hash_policy(id: u64, file: u64) -> Policy {
    Policy {
        id: PolicyId(id),
        policy_type: PolicyType::FileHash,
        name: format!("policy-{id}"),
        argument: String::new(),
        fail: Recommendation::Block,
        noresult: Recommendation::None,
        file: Some(FileId(file)),
        directory: None,
    }
}

fn enforcement(id: u64, policy: u64, group: u64, max_age_secs: u32) -> Enforcement {
    Enforcement {
        id: EnforcementId(id),
        policy: PolicyId(policy),
        group: GroupId(group),
        max_age_secs,
        fail: None,
        noresult: None,
    }
}

/// Device 1 in group 1, with the attestation session inserted.
fn base_store(groups: &[u64]) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_device(Device {
        id: DEV,
        value: "dev1".to_string(),
        description: "test device".to_string(),
        product: ProductId(1),
        trusted: false,
        groups: groups.iter().copied().map(GroupId).collect(),
    });
    store.insert_session(Session {
        id: SESSION,
        device: DEV,
        time: now(),
        connection_id: 7,
    });
    store
}

fn record_result(
    store: &mut MemoryStore,
    id: u64,
    policy: u64,
    age_secs: i64,
    recommendation: Recommendation,
) {
    let time = now() - Duration::seconds(age_secs);
    let session = SessionId(id + 1000);
    store.insert_session(Session {
        id: session,
        device: DEV,
        time,
        connection_id: 1,
    });
    store.insert_result(CheckResult {
        id: ResultId(id),
        session,
        session_time: time,
        policy: PolicyId(policy),
        raw: "0".to_string(),
        recommendation,
    });
}

// ============================================================================
// Spec scenarios
// ============================================================================

#[test]
fn first_time_check_creates_one_work_item() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.session, SESSION);
    assert_eq!(item.policy, PolicyId(5));
    assert_eq!(item.work_type, PolicyType::FileHash);
    assert_eq!(item.argument, "42");
    assert_eq!(item.fail, Recommendation::Block);
    assert_eq!(item.noresult, Recommendation::None);
    assert!(item.result.is_none());
    assert!(item.recommendation.is_none());
}

#[test]
fn parent_and_child_enforcements_reduce_to_the_strictest() {
    let mut store = base_store(&[1]);
    store.insert_group(group(0, None));
    store.insert_group(group(1, Some(0)));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 0, 3600));
    store.insert_enforcement(enforcement(2, 5, 1, 7200));

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].enforcement, EnforcementId(1));
}

#[test]
fn fresh_allow_result_suppresses_the_work_item() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));
    record_result(&mut store, 1, 5, 7200, Recommendation::Allow);

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert!(items.is_empty());
}

#[test]
fn fresh_block_result_forces_a_recheck() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));
    record_result(&mut store, 1, 5, 7200, Recommendation::Block);

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].policy, PolicyId(5));
}

#[test]
fn cyclic_group_hierarchy_still_resolves() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, Some(2)));
    store.insert_group(group(2, Some(1)));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 2, 86_400));

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    // The enforcement hangs off the inherited group inside the cycle.
    assert_eq!(items.len(), 1);
}

// ============================================================================
// Idempotence and skips
// ============================================================================

#[test]
fn reinvocation_for_the_same_session_creates_nothing() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));

    let first = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();
    let second = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(store.work_item_count(), 1);
}

#[test]
fn dangling_policy_reference_skips_only_that_enforcement() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));
    // Policy 9 was deleted concurrently.
    store.insert_enforcement(enforcement(2, 9, 1, 3600));

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].policy, PolicyId(5));
}

#[test]
fn policy_missing_its_argument_target_is_skipped() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    let mut broken = file_hash_policy(5, 42);
    broken.file = None;
    store.insert_policy(broken);
    store.insert_policy(Policy {
        id: PolicyId(6),
        policy_type: PolicyType::DirHash,
        name: "dir-hash".to_string(),
        argument: String::new(),
        fail: Recommendation::Isolate,
        noresult: Recommendation::None,
        file: None,
        directory: Some(DirectoryId(3)),
    });
    store.insert_enforcement(enforcement(1, 5, 1, 86_400));
    store.insert_enforcement(enforcement(2, 6, 1, 86_400));

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].policy, PolicyId(6));
    assert_eq!(items[0].argument, "3");
}

#[test]
fn enforcement_overrides_reach_the_work_item() {
    let mut store = base_store(&[1]);
    store.insert_group(group(1, None));
    store.insert_policy(file_hash_policy(5, 42));
    let mut e = enforcement(1, 5, 1, 86_400);
    e.fail = Some(Recommendation::Isolate);
    store.insert_enforcement(e);

    let items = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap();

    assert_eq!(items[0].fail, Recommendation::Isolate);
    // noresult falls back to the policy default.
    assert_eq!(items[0].noresult, Recommendation::None);
}

#[test]
fn unknown_device_is_an_error() {
    let mut store = MemoryStore::new();
    let err = engine()
        .resolve_and_create_work_items(&mut store, DEV, SESSION)
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownDevice { device: DEV });
}

#[test]
fn verdicts_are_deterministic_for_a_fixed_snapshot() {
    let mut store = base_store(&[1]);
    store.insert_group(group(0, None));
    store.insert_group(group(1, Some(0)));
    for id in 5..8 {
        store.insert_policy(file_hash_policy(id, id + 100));
        store.insert_enforcement(enforcement(id, id, 1, 3600));
        store.insert_enforcement(enforcement(id + 10, id, 0, 7200));
    }
    record_result(&mut store, 1, 6, 60, Recommendation::Allow);

    let baseline = engine()
        .resolve_and_create_work_items(&mut store.clone(), DEV, SESSION)
        .unwrap();
    let repeat = engine()
        .resolve_and_create_work_items(&mut store.clone(), DEV, SESSION)
        .unwrap();

    assert_eq!(baseline, repeat);
    // Policy 6 has a fresh ALLOW; 5 and 7 are first-time checks.
    let policies: Vec<PolicyId> = baseline.iter().map(|i| i.policy).collect();
    assert_eq!(policies, vec![PolicyId(5), PolicyId(7)]);
}
