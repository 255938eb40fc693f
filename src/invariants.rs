//! Debug assertion macros for the store invariants documented in `SPEC_FULL.md` §3.
//!
//! Only active in debug builds (`#[cfg(debug_assertions)]` via `debug_assert!`),
//! so there is zero overhead in release builds. Mirrors the `INV-*` tagging
//! convention used for the ring buffer this crate is descended from.

/// INV-STORE-01: `used + free + 1 == capacity` at all times.
///
/// Used in: `Store::push`, `Store::shift`, `Store::peek_commit` after
/// mutating `head`/`tail`.
macro_rules! debug_assert_fill_identity {
    ($used:expr, $free:expr, $capacity:expr) => {
        debug_assert!(
            $used + $free + 1 == $capacity,
            "INV-STORE-01 violated: used {} + free {} + 1 != capacity {}",
            $used,
            $free,
            $capacity
        )
    };
}

/// INV-STORE-02: `head == tail` iff `chunks == 0`.
///
/// Used in: after any operation that changes `chunks`.
macro_rules! debug_assert_empty_iff_no_chunks {
    ($head:expr, $tail:expr, $chunks:expr) => {
        debug_assert!(
            ($head == $tail) == ($chunks == 0),
            "INV-STORE-02 violated: head {} tail {} chunks {}",
            $head,
            $tail,
            $chunks
        )
    };
}

/// INV-STORE-03: no payload exceeds `capacity - 2`.
///
/// Used in: `Store::push` before encoding.
macro_rules! debug_assert_payload_fits {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len + 2 <= $capacity,
            "INV-STORE-03 violated: payload len {} + 2 > capacity {}",
            $len,
            $capacity
        )
    };
}

/// INV-STORE-04: `chunks` never underflows on eviction/dequeue.
///
/// Used in: `Store::shift`, `Store::peek_commit`, head-drop eviction.
macro_rules! debug_assert_chunks_nonzero_before_decrement {
    ($chunks:expr) => {
        debug_assert!(
            $chunks > 0,
            "INV-STORE-04 violated: decrementing chunks at 0"
        )
    };
}

pub(crate) use debug_assert_chunks_nonzero_before_decrement;
pub(crate) use debug_assert_empty_iff_no_chunks;
pub(crate) use debug_assert_fill_identity;
pub(crate) use debug_assert_payload_fits;
