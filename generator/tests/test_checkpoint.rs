//! Tests for snapshot save/restore
//!
//! CRITICAL: A restored generator must continue exactly where it left off.

use xorshift_generator::{
    BitsStreamGenerator64, CheckpointError, GeneratorSnapshot, XorShift1024Star,
};

#[test]
fn test_restore_continues_sequence() {
    let mut rng = XorShift1024Star::new(12345i64);
    for _ in 0..21 {
        rng.next_long();
    }

    let snapshot = rng.snapshot();
    let expected: Vec<i64> = (0..50).map(|_| rng.next_long()).collect();

    let mut restored = XorShift1024Star::new(1i64);
    restored.restore(&snapshot).unwrap();
    let actual: Vec<i64> = (0..50).map(|_| restored.next_long()).collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_restore_keeps_pending_halves() {
    let mut rng = XorShift1024Star::new(77i64);
    rng.next_int();
    rng.next_gaussian();

    let snapshot = rng.snapshot();
    assert!(snapshot.spare_int.is_some());
    assert!(snapshot.spare_gaussian.is_some());

    let mut restored = XorShift1024Star::new(1i64);
    restored.restore(&snapshot).unwrap();

    assert_eq!(restored.next_int(), rng.next_int());
    assert_eq!(restored.next_gaussian(), rng.next_gaussian());
    assert_eq!(restored, rng);
}

#[test]
fn test_json_round_trip() {
    let mut rng = XorShift1024Star::new(5i64);
    rng.next_int();
    rng.next_long();

    let json = rng.snapshot().to_json().unwrap();
    let loaded = GeneratorSnapshot::from_json(&json).unwrap();

    let mut restored = XorShift1024Star::new(1i64);
    restored.restore(&loaded).unwrap();
    assert_eq!(restored, rng);
}

#[test]
fn test_tampered_snapshot_leaves_generator_untouched() {
    let mut source = XorShift1024Star::new(9i64);
    source.next_long();
    let mut snapshot = source.snapshot();
    snapshot.index = (snapshot.index + 1) % 16;

    let mut target = XorShift1024Star::new(1i64);
    let before = target.clone();

    let result = target.restore(&snapshot);
    assert!(matches!(result, Err(CheckpointError::ChecksumMismatch { .. })));
    assert_eq!(target, before);
}

#[test]
fn test_truncated_snapshot_rejected() {
    let snapshot = GeneratorSnapshot::new(vec![1, 2, 3], 0, None, None);
    let mut rng = XorShift1024Star::new(1i64);

    assert_eq!(
        rng.restore(&snapshot),
        Err(CheckpointError::WrongStateLength {
            expected: 16,
            actual: 3
        })
    );
}

#[test]
fn test_snapshot_state_matches_state_accessor() {
    let rng = XorShift1024Star::new(31i64);
    assert_eq!(rng.snapshot().state, rng.state());
}
