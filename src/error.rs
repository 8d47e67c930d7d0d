//! Error type shared by every fallible list and cursor operation.

use thiserror::Error;

/// Errors raised by [`PleatList`](crate::PleatList) and [`Cursor`](crate::Cursor).
///
/// All of these are synchronous contract violations on the caller's side.
/// None of them leave the list in a partially-edited state: a failing
/// operation performs no splice at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index was outside the valid range for the operation.
    ///
    /// Element access (`get`, `set`, `remove`) requires `index < len`;
    /// insertion and cursor creation allow `index == len` as well.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A cursor `set` or `remove` was called with no element to target.
    ///
    /// The cursor must have returned an element via `next` or `prev` since
    /// it was created or since its last `remove`.
    #[error("cursor has no target element: advance it before calling set or remove")]
    IllegalCursorState,

    /// The list was structurally modified by someone other than this cursor
    /// since the cursor was created or last edited through it.
    #[error("sequence was structurally modified since this cursor last observed it")]
    StaleCursor,

    /// A cursor advance ran past the end of the list in that direction.
    #[error("no further element in this direction")]
    Exhausted,
}
