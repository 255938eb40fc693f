use thiserror::Error;

/// Errors reported by [`crate::Store`] and [`crate::Cursor`] operations.
///
/// `OutOfBufferSpace` intentionally covers two distinct conditions, matching
/// the abstract interface: a tail-drop `push` that would need eviction, and
/// a read-side call (`shift`/`peek`/`cursor_next`) whose output buffer is
/// smaller than the framed payload. In the latter case the store (or cursor
/// position) is left untouched so the caller can retry with a bigger buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Caller misuse: empty store for a dequeue, a zero/non-power-of-two/
    /// too-small capacity, reserved-flag violation, or a payload that can
    /// never fit (`payload.len() + 2 > capacity`).
    #[error("invalid argument")]
    InvalidArgument,

    /// The backing arena allocation failed.
    #[error("allocation failed")]
    OutOfMemory,

    /// Insufficient free space under `TAIL_DROP`, or an output buffer
    /// smaller than the framed payload.
    #[error("out of buffer space")]
    OutOfBufferSpace,

    /// A policy value outside `{TAIL_DROP, HEAD_DROP, DROP_ALL}`.
    ///
    /// Unreachable through this crate's safe `Policy` enum today; retained
    /// for taxonomy parity with the abstract interface (see `DESIGN.md`).
    #[error("unsupported policy")]
    Unsupported,
}

impl StoreError {
    /// Returns `true` if a caller can reasonably retry the same call after
    /// correcting its inputs (a bigger output buffer, a smaller payload).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfBufferSpace)
    }

    /// Returns `true` if the error indicates the store itself cannot be used
    /// (currently only allocation failure at construction time).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::OutOfMemory)
    }
}
