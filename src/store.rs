use crate::cursor::Cursor;
use crate::error::StoreError;
use crate::frame::{copy_payload, decode_header, encode, HEADER_LEN};
use crate::index::{advance, free, used};
use crate::invariants::{
    debug_assert_chunks_nonzero_before_decrement, debug_assert_empty_iff_no_chunks,
    debug_assert_fill_identity, debug_assert_payload_fits,
};
use crate::policy::Policy;

/// A bounded, in-place FIFO queue of length-prefixed byte chunks, backed by a
/// single contiguous power-of-two arena allocated once at construction.
///
/// `Store` owns its arena outright (a plain `Box<[u8]>`); there is no
/// `unsafe` anywhere in this crate because there is exactly one owner and one
/// thread touching it at a time (see `SPEC_FULL.md` §5). Dropping a `Store`
/// frees the arena — there is no separate `destroy` method to call.
///
/// # Example
///
/// ```
/// use ringchunk::{Policy, Store};
///
/// let mut store = Store::new(16).unwrap();
/// store.push(b"hello", Policy::TailDrop).unwrap();
/// store.push(b"world", Policy::TailDrop).unwrap();
///
/// let mut out = [0u8; 16];
/// let len = store.shift(&mut out).unwrap();
/// assert_eq!(&out[..len], b"hello");
/// ```
pub struct Store {
    capacity: usize,
    arena: Box<[u8]>,
    head: usize,
    tail: usize,
    chunks: usize,
}

impl Store {
    /// Creates a store with the given capacity and no reserved flags.
    ///
    /// Equivalent to `Store::with_flags(capacity, 0)`.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidArgument` if `capacity` is zero, not a power of
    /// two, or less than 2. `StoreError::OutOfMemory` if the arena
    /// allocation fails.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        Self::with_flags(capacity, 0)
    }

    /// Creates a store, accepting the abstract interface's reserved `flags`
    /// word. Only `0` is accepted today.
    ///
    /// # Errors
    ///
    /// Same as [`Store::new`], plus `StoreError::InvalidArgument` if `flags`
    /// is nonzero.
    pub fn with_flags(capacity: usize, flags: u32) -> Result<Self, StoreError> {
        if flags != 0 {
            return Err(StoreError::InvalidArgument);
        }
        if capacity < 2 || !capacity.is_power_of_two() {
            return Err(StoreError::InvalidArgument);
        }

        let mut backing = Vec::new();
        backing
            .try_reserve_exact(capacity)
            .map_err(|_| StoreError::OutOfMemory)?;
        backing.resize(capacity, 0u8);

        Ok(Self {
            capacity,
            arena: backing.into_boxed_slice(),
            head: 0,
            tail: 0,
            chunks: 0,
        })
    }

    /// The fixed arena capacity in bytes (a power of two).
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of whole framed chunks currently resident.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.chunks
    }

    /// Free bytes available for the next push, i.e. `capacity - 1 - used`.
    #[inline]
    #[must_use]
    pub fn space(&self) -> usize {
        free(self.head, self.tail, self.capacity)
    }

    #[inline]
    fn used(&self) -> usize {
        used(self.head, self.tail, self.capacity)
    }

    /// Read-only access to the backing arena, for [`Cursor`] traversal.
    pub(crate) fn arena(&self) -> &[u8] {
        &self.arena
    }

    /// Enqueues `payload`, applying `policy` if there isn't enough free
    /// space for the framed chunk.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidArgument` if the chunk could never fit
    /// (`payload.len() + 2 > capacity`). `StoreError::OutOfBufferSpace` under
    /// `Policy::TailDrop` when eviction would be required.
    pub fn push(&mut self, payload: &[u8], policy: Policy) -> Result<(), StoreError> {
        let len = payload.len();
        let needed = len + HEADER_LEN;
        if needed > self.capacity {
            return Err(StoreError::InvalidArgument);
        }
        debug_assert_payload_fits!(len, self.capacity);

        self.make_room(needed, policy)?;

        self.head = encode(&mut self.arena, self.capacity, self.head, payload);
        self.chunks += 1;

        debug_assert_fill_identity!(self.used(), self.space(), self.capacity);
        debug_assert_empty_iff_no_chunks!(self.head, self.tail, self.chunks);

        Ok(())
    }

    /// Applies the overwrite policy until `needed` bytes are free, or fails.
    fn make_room(&mut self, needed: usize, policy: Policy) -> Result<(), StoreError> {
        match policy {
            Policy::TailDrop => {
                if self.space() < needed {
                    return Err(StoreError::OutOfBufferSpace);
                }
            }
            Policy::HeadDrop => {
                while self.space() < needed {
                    self.evict_oldest();
                }
            }
            Policy::DropAll => {
                self.head = 0;
                self.tail = 0;
                self.chunks = 0;
            }
        }
        Ok(())
    }

    /// Drops the oldest resident frame without copying its payload out.
    /// Strictly reduces `used`, so a `HeadDrop` loop always terminates.
    fn evict_oldest(&mut self) {
        let (len, payload_start) = decode_header(&self.arena, self.capacity, self.tail);
        self.tail = advance(payload_start, len as usize, self.capacity);
        debug_assert_chunks_nonzero_before_decrement!(self.chunks);
        self.chunks -= 1;
    }

    /// Dequeues the oldest chunk into `out`, returning its length.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidArgument` if the store is empty.
    /// `StoreError::OutOfBufferSpace` if `out` is smaller than the framed
    /// payload — the store is left unchanged, so the caller may retry with a
    /// larger buffer.
    pub fn shift(&mut self, out: &mut [u8]) -> Result<usize, StoreError> {
        let len = self.peek(out)?;
        self.advance_tail_past(len);
        Ok(len)
    }

    /// Non-destructively reads the oldest chunk into `out`, returning its
    /// length. Calling this repeatedly yields identical results.
    ///
    /// # Errors
    ///
    /// Same as [`Store::shift`], except the store is never mutated.
    pub fn peek(&self, out: &mut [u8]) -> Result<usize, StoreError> {
        if self.chunks == 0 {
            return Err(StoreError::InvalidArgument);
        }

        let (len, payload_start) = decode_header(&self.arena, self.capacity, self.tail);
        let len = len as usize;
        if len > out.len() {
            return Err(StoreError::OutOfBufferSpace);
        }

        copy_payload(&self.arena, self.capacity, payload_start, len, out);
        Ok(len)
    }

    /// Drops the chunk a prior [`Store::peek`] returned, without re-reading
    /// it. `peek` followed by `peek_commit` is observationally identical to
    /// `shift`.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidArgument` if the store is empty.
    pub fn peek_commit(&mut self) -> Result<(), StoreError> {
        if self.chunks == 0 {
            return Err(StoreError::InvalidArgument);
        }
        let (len, _) = decode_header(&self.arena, self.capacity, self.tail);
        self.advance_tail_past(len as usize);
        Ok(())
    }

    fn advance_tail_past(&mut self, payload_len: usize) {
        self.tail = advance(self.tail, payload_len + HEADER_LEN, self.capacity);
        debug_assert_chunks_nonzero_before_decrement!(self.chunks);
        self.chunks -= 1;

        debug_assert_fill_identity!(self.used(), self.space(), self.capacity);
        debug_assert_empty_iff_no_chunks!(self.head, self.tail, self.chunks);
    }

    /// Snapshots the current `(tail, head)` pair for read-only traversal.
    /// The cursor is invalidated by any subsequent mutation of this store —
    /// that is not detected or reported.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.tail, self.head)
    }
}
