use bigunsigned::{BlockStore, Error};

#[test]
fn new_store_is_empty_and_unallocated() {
    let store = BlockStore::<u32>::new();

    assert_eq!(store.capacity(), 0);
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert_eq!(store.as_slice(), &[] as &[u32]);
}

#[test]
fn with_capacity_allocates_but_stays_empty() {
    let one = BlockStore::<i32>::with_capacity(1);
    let two = BlockStore::<i32>::with_capacity(2);

    assert_eq!(one.capacity(), 1);
    assert_eq!(one.len(), 0);
    assert_eq!(two.capacity(), 2);
    assert_eq!(two.len(), 0);
    assert_eq!(two.get(0), None);
}

#[test]
fn try_with_capacity_reports_allocation_failure() {
    let store = BlockStore::<u64>::try_with_capacity(4).unwrap();
    assert_eq!(store.capacity(), 4);

    let huge = BlockStore::<u64>::try_with_capacity(usize::MAX);
    assert_eq!(huge.unwrap_err(), Error::AllocationFailure);
}

#[test]
fn from_slice_copies_blocks() {
    let store = BlockStore::from_slice(&[1u64, 2, 3]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.capacity(), 3);
    assert_eq!(store.get(2), Some(3));
    assert_eq!(store.get(3), None);
}

#[test]
fn destructive_growth_only_grows() {
    let mut store = BlockStore::<u64>::with_capacity(8);

    store.ensure_capacity_destructive(4);
    assert_eq!(store.capacity(), 8);

    store.ensure_capacity_destructive(16);
    assert_eq!(store.capacity(), 16);
}

#[test]
fn preserving_growth_keeps_live_blocks() {
    let mut store = BlockStore::from_slice(&[7u64, 8, 9]);

    store.ensure_capacity_preserving(10);

    assert_eq!(store.capacity(), 10);
    assert_eq!(store.as_slice(), &[7, 8, 9]);

    store.ensure_capacity_preserving(2);
    assert_eq!(store.capacity(), 10);
}

#[test]
fn clone_is_deep_and_sized_to_length() {
    let mut source = BlockStore::<u64>::with_capacity(32);
    source.assign(&BlockStore::from_slice(&[5, 6]));
    assert_eq!(source.capacity(), 32);

    let copy = source.clone();
    assert_eq!(copy.capacity(), 2);
    assert_eq!(copy, source);

    source.assign(&BlockStore::from_slice(&[1]));
    assert_eq!(copy.as_slice(), &[5, 6]);
}

#[test]
fn assign_reuses_buffer_when_large_enough() {
    let mut target = BlockStore::<u64>::with_capacity(8);

    target.assign(&BlockStore::from_slice(&[1, 2, 3]));
    assert_eq!(target.capacity(), 8);
    assert_eq!(target.as_slice(), &[1, 2, 3]);

    target.assign(&BlockStore::new());
    assert!(target.is_empty());
    assert_eq!(target.capacity(), 8);
}

#[test]
fn equality_ignores_capacity() {
    let mut roomy = BlockStore::<u64>::with_capacity(10);
    roomy.assign(&BlockStore::from_slice(&[4, 2]));

    assert_eq!(roomy, BlockStore::from_slice(&[4, 2]));
    assert_ne!(roomy, BlockStore::from_slice(&[4, 2, 0]));
    assert_ne!(roomy, BlockStore::from_slice(&[4, 3]));
    assert_eq!(BlockStore::<u64>::new(), BlockStore::with_capacity(3));
}

#[test]
fn clear_keeps_capacity() {
    let mut store = BlockStore::from_slice(&[1u64, 2]);
    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.capacity(), 2);
}
