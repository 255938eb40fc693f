//! Overwrite policy selected per `push`: the caller's choice for what
//! happens when free space is insufficient. See Design Notes — this is
//! deliberately a closed enum rather than a trait object: it changes per
//! call, not per store.

/// Overwrite behavior when a `push` would not otherwise fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Refuse the push with `OUT_OF_BUFFER_SPACE`; state unchanged.
    TailDrop,
    /// Evict whole frames from the tail until there is room.
    HeadDrop,
    /// Drop every resident frame and accept the new one unconditionally.
    DropAll,
}
