use crate::error::StoreError;
use crate::frame::{copy_payload, decode_header, HEADER_LEN};
use crate::index::{advance, used};
use crate::store::Store;

/// A read-only snapshot of a [`Store`]'s `(tail, head)` pair, for forward
/// traversal that never mutates the store.
///
/// A `Cursor` does not borrow or reference-count the store it was created
/// from — it is a plain `Copy` value, matching the abstract interface where
/// `cursor_next` takes the store as an explicit argument on every call. It is
/// invalidated by any mutation of that store in the meantime; this is not
/// detected.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    tail: usize,
    head: usize,
}

impl Cursor {
    pub(crate) fn new(tail: usize, head: usize) -> Self {
        Self { tail, head }
    }

    /// Decodes and copies the next frame in the snapshot into `out`,
    /// returning its length and advancing the cursor's own tail.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidArgument` once the snapshot range is exhausted.
    /// `StoreError::OutOfBufferSpace` if `out` is smaller than the framed
    /// payload, in which case the cursor position is unchanged.
    pub fn next(&mut self, store: &Store, out: &mut [u8]) -> Result<usize, StoreError> {
        let capacity = store.capacity();
        if used(self.head, self.tail, capacity) == 0 {
            return Err(StoreError::InvalidArgument);
        }

        let (len, payload_start) = decode_header(store.arena(), capacity, self.tail);
        let len = len as usize;
        if len > out.len() {
            return Err(StoreError::OutOfBufferSpace);
        }

        copy_payload(store.arena(), capacity, payload_start, len, out);
        self.tail = advance(self.tail, len + HEADER_LEN, capacity);
        Ok(len)
    }
}
