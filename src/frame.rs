//! Encode/decode the on-arena frame format: a 2-byte big-endian length
//! header followed by that many payload bytes, either of which may straddle
//! the arena's physical end.
//!
//! `shift`, `peek`, and `cursor_next` all read through [`decode_header`] and
//! [`copy_payload`] rather than each re-deriving the split cases, so there is
//! exactly one place the header/payload wrap logic can regress.

use crate::index::{advance, bytes_until_physical_end};

/// Size in bytes of the length prefix.
pub(crate) const HEADER_LEN: usize = 2;

/// Writes a framed chunk (`[len_hi, len_lo, payload...]`) starting at `head`
/// and returns the advanced index. `payload.len()` must already have been
/// checked to fit (`payload.len() + HEADER_LEN <= capacity`).
pub(crate) fn encode(arena: &mut [u8], capacity: usize, head: usize, payload: &[u8]) -> usize {
    let len = payload.len();
    let header = (len as u16).to_be_bytes();
    let till_end = bytes_until_physical_end(capacity, head);

    if till_end == 1 {
        // Header split 1+1: second header byte wraps to index 0, payload
        // starts contiguously at index 1.
        arena[head] = header[0];
        arena[0] = header[1];
        arena[1..1 + len].copy_from_slice(payload);
    } else if till_end == 2 {
        // Header fits exactly; payload wraps from index 0.
        arena[head] = header[0];
        arena[head + 1] = header[1];
        arena[0..len].copy_from_slice(payload);
    } else if till_end >= HEADER_LEN + len {
        // Fully contiguous: the common case.
        arena[head] = header[0];
        arena[head + 1] = header[1];
        arena[head + 2..head + 2 + len].copy_from_slice(payload);
    } else {
        // Header contiguous, payload split after `till_end - HEADER_LEN` bytes.
        arena[head] = header[0];
        arena[head + 1] = header[1];
        let first = till_end - HEADER_LEN;
        arena[head + 2..head + 2 + first].copy_from_slice(&payload[..first]);
        arena[0..len - first].copy_from_slice(&payload[first..]);
    }

    advance(head, HEADER_LEN + len, capacity)
}

/// Reads the 2-byte length header at `tail`, wrap-aware, and returns
/// `(payload_len, payload_start_index)`.
pub(crate) fn decode_header(arena: &[u8], capacity: usize, tail: usize) -> (u16, usize) {
    let till_end = bytes_until_physical_end(capacity, tail);
    let bytes = if till_end == 1 {
        [arena[tail], arena[0]]
    } else {
        [arena[tail], arena[tail + 1]]
    };
    let payload_start = advance(tail, HEADER_LEN, capacity);
    (u16::from_be_bytes(bytes), payload_start)
}

/// Copies `len` payload bytes starting at `start` (wrap-aware) into `out`.
/// `out` must be at least `len` bytes; callers check the `max` bound before
/// calling this.
pub(crate) fn copy_payload(arena: &[u8], capacity: usize, start: usize, len: usize, out: &mut [u8]) {
    let till_end = bytes_until_physical_end(capacity, start);
    if till_end >= len {
        out[..len].copy_from_slice(&arena[start..start + len]);
    } else {
        out[..till_end].copy_from_slice(&arena[start..start + till_end]);
        let remaining = len - till_end;
        out[till_end..till_end + remaining].copy_from_slice(&arena[..remaining]);
    }
}
