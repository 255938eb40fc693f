//! Literal end-to-end scenarios, one test per scenario in `SPEC_FULL.md` §8.

use ringchunk::{Policy, Store, StoreError};

#[test]
fn scenario_1_capacity_8_overflow_refusal() {
    let mut store = Store::new(8).unwrap();
    store.push(&[0x00], Policy::TailDrop).unwrap();
    store.push(&[0x01], Policy::TailDrop).unwrap();
    assert_eq!(store.space(), 1);

    let err = store.push(&[0x17], Policy::TailDrop).unwrap_err();
    assert_eq!(err, StoreError::OutOfBufferSpace);
}

#[test]
fn scenario_2_wrap_after_shift() {
    let mut store = Store::new(8).unwrap();
    let mut out = [0u8; 8];

    store.push(b"AAA", Policy::TailDrop).unwrap();
    store.shift(&mut out).unwrap();
    assert_eq!(store.count(), 0);

    store.push(b"BBB", Policy::TailDrop).unwrap();
    let len = store.shift(&mut out).unwrap();
    assert_eq!(len, 3);
    assert_eq!(&out[..len], b"BBB");
}

#[test]
fn scenario_3_peek_then_commit() {
    let mut store = Store::new(8).unwrap();
    store.push(&[0x01], Policy::TailDrop).unwrap();

    let mut out = [0u8; 8];
    let len = store.peek(&mut out).unwrap();
    assert_eq!(&out[..len], &[0x01]);

    let len = store.peek(&mut out).unwrap();
    assert_eq!(&out[..len], &[0x01]);

    store.peek_commit().unwrap();
    assert_eq!(
        store.peek_commit().unwrap_err(),
        StoreError::InvalidArgument
    );
}

#[test]
fn scenario_4_cursor_walk() {
    let mut store = Store::new(8).unwrap();
    store.push(&[0x01], Policy::TailDrop).unwrap();
    store.push(&[0x02], Policy::TailDrop).unwrap();

    let mut cursor = store.cursor();
    let mut out = [0u8; 8];

    let len = cursor.next(&store, &mut out).unwrap();
    assert_eq!(&out[..len], &[0x01]);

    let len = cursor.next(&store, &mut out).unwrap();
    assert_eq!(&out[..len], &[0x02]);

    assert_eq!(
        cursor.next(&store, &mut out).unwrap_err(),
        StoreError::InvalidArgument
    );

    assert_eq!(store.count(), 2);
}

#[test]
fn scenario_5_head_drop_steady_state() {
    let mut store = Store::new(8).unwrap();
    store.push(&[0x00], Policy::HeadDrop).unwrap();
    assert_eq!(store.count(), 1);

    for _ in 0..11 {
        store.push(&[0x01], Policy::HeadDrop).unwrap();
        assert_eq!(store.count(), 2);
    }
}

#[test]
fn scenario_6_chunks_and_space_accounting() {
    let mut store = Store::new(16).unwrap();
    let mut out = [0u8; 16];

    store.push(&[0x00, 0x00, 0x00, 0x00], Policy::TailDrop).unwrap();
    assert_eq!(store.space(), 15 - 6);
    assert_eq!(store.count(), 1);

    store.push(&[0x00, 0x00, 0x00, 0x00], Policy::TailDrop).unwrap();
    assert_eq!(store.space(), 15 - 12);
    assert_eq!(store.count(), 2);

    store.shift(&mut out).unwrap();
    store.shift(&mut out).unwrap();
    assert_eq!(store.count(), 0);
    assert_eq!(store.space(), 15);

    let err = store.shift(&mut out).unwrap_err();
    assert_eq!(err, StoreError::InvalidArgument);
    assert_eq!(store.count(), 0);
    assert_eq!(store.space(), 15);
}
