//! The pleated list: a node chain plus a stale-but-fast positional snapshot.
//!
//! `PleatList` keeps its elements in a doubly linked chain and, on demand,
//! captures a backbone: an array of node indices giving O(1) jump-in points
//! for positional lookup. Edits between snapshots record wrinkles instead of
//! rebuilding anything, so a lookup costs a short wrinkle walk plus a short
//! residual walk along the chain rather than a scan of the whole list. Call
//! [`snapshot`](PleatList::snapshot) after a burst of edits to flatten the
//! wrinkles and restore direct indexing.

use std::fmt;
use std::fmt::Display;

use crate::chain::Chain;
use crate::chain::NONE;
use crate::cursor::Cursor;
use crate::error::ListError;
use crate::wrinkle::WrinkleChain;

/// An ordered, indexable sequence optimized for bursts of positional edits
/// separated by long read-heavy stretches.
///
/// # Quick start
///
/// ```
/// use pleat::PleatList;
///
/// let mut list: PleatList<i32> = (0..10).collect();
/// list.snapshot();
///
/// list.insert(4, 99).unwrap();
/// assert_eq!(list.get(4), Ok(&99));
/// assert_eq!(list.remove(4), Ok(99));
/// assert_eq!(list.len(), 10);
/// ```
#[derive(Clone)]
pub struct PleatList<T> {
    pub(crate) chain: Chain<T>,
    /// Node index per logical position, as of the last snapshot.
    pub(crate) backbone: Vec<u32>,
    pub(crate) wrinkles: WrinkleChain,
    pub(crate) size: usize,
    /// Bumped on every structural edit; cursors compare against it.
    pub(crate) token: u64,
}

impl<T> PleatList<T> {
    /// Create an empty list.
    pub fn new() -> PleatList<T> {
        return PleatList {
            chain: Chain::new(),
            backbone: Vec::new(),
            wrinkles: WrinkleChain::new(),
            size: 0,
            token: 0,
        };
    }

    /// Number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.size;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.size == 0;
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.size {
            return Err(ListError::OutOfRange { index, len: self.size });
        }
        return Ok(());
    }

    /// Resolve a logical index to its node, starting from the backbone slot
    /// the translator picked.
    ///
    /// The ends are O(1) fast paths. Otherwise start at the slot's node (or
    /// the foot, for the tail sentinel) and close the residual by walking
    /// `prev` links. A slot holding no node (its referent was the head when
    /// it was removed) falls back to a forward walk from the head.
    pub(crate) fn grab(&self, backbone_index: usize, logical_index: usize) -> u32 {
        if logical_index == 0 {
            return self.chain.head();
        }
        if logical_index + 1 == self.size {
            return self.chain.foot();
        }

        let (mut node, mut at) = if backbone_index == self.backbone.len() {
            (self.chain.foot(), (self.size - 1) as isize)
        } else {
            let slot = self.backbone[backbone_index];
            if slot == NONE {
                let mut node = self.chain.head();
                for _ in 0..logical_index {
                    node = self.chain.next(node);
                }
                return node;
            }
            (slot, self.wrinkles.to_logical(backbone_index))
        };

        let target = logical_index as isize;
        while at > target {
            node = self.chain.prev(node);
            at -= 1;
        }
        return node;
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        let backbone_index = self.wrinkles.to_backbone(index, self.backbone.len());
        let node = self.grab(backbone_index, index);
        return Ok(self.chain.item(node));
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        self.check_index(index)?;
        let backbone_index = self.wrinkles.to_backbone(index, self.backbone.len());
        let node = self.grab(backbone_index, index);
        return Ok(self.chain.replace(node, item));
    }

    /// Append an element. O(1); tail growth needs no wrinkle.
    pub fn push(&mut self, item: T) {
        self.chain.push_back(item);
        self.size += 1;
        self.token += 1;
    }

    /// Insert an element at `index`, shifting everything after it.
    ///
    /// `index == len` appends. Interior insertions splice the chain and
    /// record a `+1` wrinkle at the affected backbone slot.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.size {
            return Err(ListError::OutOfRange { index, len: self.size });
        }
        if index == self.size {
            self.push(item);
            return Ok(());
        }
        let backbone_index = self.wrinkles.to_backbone(index, self.backbone.len());
        let after = self.grab(backbone_index, index);
        self.chain.insert_before(after, item);
        self.wrinkles.add(backbone_index, 1, self.backbone.len());
        self.size += 1;
        self.token += 1;
        return Ok(());
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let backbone_index = self.wrinkles.to_backbone(index, self.backbone.len());
        let target = self.grab(backbone_index, index);
        let (item, prev, _) = self.chain.remove(target);
        // A backbone slot must never keep referencing a freed node: repoint
        // it at the predecessor, which now occupies the slot's shifted
        // logical position. Removing the head leaves the slot empty and the
        // locator walks forward instead.
        if backbone_index < self.backbone.len() && self.backbone[backbone_index] == target {
            self.backbone[backbone_index] = prev;
        }
        self.wrinkles.add(backbone_index, -1, self.backbone.len());
        self.size -= 1;
        self.token += 1;
        return Ok(item);
    }

    /// Rebuild the backbone from the current chain and clear every wrinkle.
    ///
    /// O(len). Contents and size are untouched, but this counts as a
    /// structural edit: existing cursors go stale. Call it after a burst of
    /// edits, before a long run of reads.
    pub fn snapshot(&mut self) {
        self.backbone.clear();
        self.backbone.reserve(self.size);
        let mut node = self.chain.head();
        while node != NONE {
            self.backbone.push(node);
            node = self.chain.next(node);
        }
        self.wrinkles.clear();
        self.token += 1;
    }

    /// Drop every element and reset to the empty state.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.backbone.clear();
        self.wrinkles.clear();
        self.size = 0;
        self.token += 1;
    }

    /// Remove the half-open range `[from, to)`.
    ///
    /// Walks a cursor backward from `to`, which avoids re-shifting the
    /// positions of everything downstream on each removal.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        if to > self.size {
            return Err(ListError::OutOfRange { index: to, len: self.size });
        }
        if from > to {
            return Err(ListError::OutOfRange { index: from, len: self.size });
        }
        let mut cursor = self.cursor_at(to)?;
        while cursor.prev_index().is_some_and(|i| i >= from) {
            cursor.prev(self)?;
            cursor.remove(self)?;
        }
        return Ok(());
    }

    /// Cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor {
        return self.cursor_at(0).expect("index 0 is always in range");
    }

    /// Cursor positioned before the element at `index` (`index == len`
    /// places it past the last element).
    pub fn cursor_at(&self, index: usize) -> Result<Cursor, ListError> {
        if index > self.size {
            return Err(ListError::OutOfRange { index, len: self.size });
        }
        let backbone_index = self.wrinkles.to_backbone(index, self.backbone.len());
        let next = if index == self.size {
            NONE
        } else {
            self.grab(backbone_index, index)
        };
        return Ok(Cursor::new(next, index, backbone_index, self.token));
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            chain: &self.chain,
            node: self.chain.head(),
            remaining: self.size,
        };
    }
}

impl<T: Display> PleatList<T> {
    /// Render the internal structure for debugging.
    ///
    /// The backbone is wrapped in `{}` with each backbone node in `[]`.
    /// An insertion run is parenthesized with its base node bracketed; a
    /// deletion wrinkle renders as `X`. Tail nodes follow the backbone,
    /// each in its own parentheses. The format carries no stability
    /// guarantee.
    pub fn structure(&self) -> String {
        let mut out = String::from("{");
        let mut node = self.chain.head();
        let wrinkles: Vec<_> = self.wrinkles.iter().copied().collect();
        let mut next_wrinkle = 0usize;

        for slot in 0..self.backbone.len() {
            if slot > 0 {
                out.push_str(", ");
            }
            if next_wrinkle < wrinkles.len() && wrinkles[next_wrinkle].index == slot {
                let w = wrinkles[next_wrinkle];
                next_wrinkle += 1;
                if w.offset < 0 {
                    out.push('X');
                } else {
                    out.push('(');
                    for i in 0..=w.offset {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        if i == w.offset {
                            out.push('[');
                        }
                        out.push_str(&self.chain.item(node).to_string());
                        if i == w.offset {
                            out.push(']');
                        }
                        node = self.chain.next(node);
                    }
                    out.push(')');
                }
            } else {
                out.push('[');
                out.push_str(&self.chain.item(node).to_string());
                out.push(']');
                node = self.chain.next(node);
            }
        }
        out.push('}');

        while node != NONE {
            out.push_str(", (");
            out.push_str(&self.chain.item(node).to_string());
            out.push(')');
            node = self.chain.next(node);
        }
        return out;
    }
}

/// Borrowing iterator over a [`PleatList`], front to back.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    node: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.node == NONE {
            return None;
        }
        let item = self.chain.item(self.node);
        self.node = self.chain.next(self.node);
        self.remaining -= 1;
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a PleatList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T> Default for PleatList<T> {
    fn default() -> PleatList<T> {
        return PleatList::new();
    }
}

impl<T> Extend<T> for PleatList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for PleatList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PleatList<T> {
        let mut list = PleatList::new();
        list.extend(iter);
        return list;
    }
}

/// Content equality: same length, element-wise equal, regardless of how the
/// elements are distributed between backbone, wrinkle runs, and tail.
impl<T: PartialEq> PartialEq for PleatList<T> {
    fn eq(&self, other: &PleatList<T>) -> bool {
        return self.size == other.size && self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for PleatList<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for PleatList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        return self.size == other.len() && self.iter().eq(other.iter());
    }
}

impl<T: fmt::Debug> fmt::Debug for PleatList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
