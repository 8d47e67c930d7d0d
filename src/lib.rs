//! Pleat - an indexable sequence for bursty positional editing.
//!
//! A [`PleatList`] stores its elements in a doubly linked node chain and
//! keeps an array snapshot of node positions (the backbone) from the last
//! call to [`snapshot`](PleatList::snapshot). Positional edits between
//! snapshots record small corrections (wrinkles) instead of shifting
//! anything, so a burst of inserts and removes stays cheap, and reads in
//! the long quiet stretches afterward jump through the backbone instead of
//! walking the chain.
//!
//! # Quick Start
//!
//! ```
//! use pleat::PleatList;
//!
//! let mut list: PleatList<&str> = PleatList::new();
//! for name in ["ada", "grace", "edsger"] {
//!     list.push(name);
//! }
//! list.snapshot();
//!
//! list.insert(1, "alan").unwrap();
//! assert_eq!(list.get(1), Ok(&"alan"));
//! assert_eq!(list.len(), 4);
//!
//! let mut cursor = list.cursor();
//! while cursor.has_next() {
//!     cursor.next(&list).unwrap();
//! }
//! assert_eq!(cursor.prev(&list), Ok(&"edsger"));
//! ```

pub mod cursor;
pub mod error;
pub mod list;
pub mod seq;

mod chain;
mod wrinkle;

pub use cursor::Cursor;
pub use error::ListError;
pub use list::PleatList;
pub use seq::Sequence;
