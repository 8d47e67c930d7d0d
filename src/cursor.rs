//! Bidirectional cursor with fail-fast staleness detection.
//!
//! A `Cursor` is a detached handle: it stores node indices and coordinates,
//! not a borrow of the list, and every operation takes the list explicitly.
//! That is what makes the fail-fast contract observable: the caller can
//! mutate the list directly between cursor calls, and the next cursor
//! operation reports [`StaleCursor`](ListError::StaleCursor) instead of
//! traversing a chain that changed underneath it. Edits made *through* the
//! cursor advance both the list's token and the cursor's captured copy, so a
//! cursor never invalidates itself.
//!
//! The cursor sits between elements. `next` and `prev` return the element
//! crossed; `set` and `remove` target the element most recently returned;
//! `insert` splices at the current position. A cursor has no terminal
//! state: after exhausting one direction it can reverse.

use crate::chain::NONE;
use crate::error::ListError;
use crate::list::PleatList;

/// A stateful position over a [`PleatList`], supporting traversal in both
/// directions and in-place replace, insert, and remove.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Node returned by the next forward advance; `NONE` at the tail end.
    next: u32,
    /// Most recently returned node; `NONE` when there is no valid target
    /// for `set`/`remove`.
    last: u32,
    /// Logical index of the cursor position.
    index: usize,
    /// Backbone coordinate covering the cursor position. Lazily refreshed
    /// after each advance.
    backbone_index: usize,
    /// Backbone coordinate as of the last-returned node; `remove` edits the
    /// wrinkle chain here, not at the current coordinate.
    last_backbone_index: usize,
    /// Mutation token captured at creation or at the cursor's own last edit.
    token: u64,
}

impl Cursor {
    pub(crate) fn new(next: u32, index: usize, backbone_index: usize, token: u64) -> Cursor {
        return Cursor {
            next,
            last: NONE,
            index,
            backbone_index,
            last_backbone_index: backbone_index,
            token,
        };
    }

    fn check_token<T>(&self, list: &PleatList<T>) -> Result<(), ListError> {
        if list.token != self.token {
            return Err(ListError::StaleCursor);
        }
        return Ok(());
    }

    /// Whether a forward advance would return an element.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        return self.next != NONE;
    }

    /// Whether a backward advance would return an element.
    #[inline(always)]
    pub fn has_prev(&self) -> bool {
        return self.index != 0;
    }

    /// Logical index of the element a forward advance would return.
    #[inline(always)]
    pub fn next_index(&self) -> usize {
        return self.index;
    }

    /// Logical index of the element a backward advance would return, or
    /// `None` at the front.
    #[inline(always)]
    pub fn prev_index(&self) -> Option<usize> {
        return self.index.checked_sub(1);
    }

    /// Advance forward, returning the element crossed.
    pub fn next<'l, T>(&mut self, list: &'l PleatList<T>) -> Result<&'l T, ListError> {
        self.check_token(list)?;
        if self.next == NONE {
            return Err(ListError::Exhausted);
        }
        self.last = self.next;
        self.next = list.chain.next(self.next);
        self.index += 1;
        self.last_backbone_index = self.backbone_index;
        self.backbone_index = list.wrinkles.to_backbone(self.index, list.backbone.len());
        return Ok(list.chain.item(self.last));
    }

    /// Advance backward, returning the element crossed. Stepping back from
    /// the tail end lands on the chain's foot.
    pub fn prev<'l, T>(&mut self, list: &'l PleatList<T>) -> Result<&'l T, ListError> {
        self.check_token(list)?;
        if self.index == 0 {
            return Err(ListError::Exhausted);
        }
        if self.next == NONE {
            self.next = list.chain.foot();
        } else {
            self.next = list.chain.prev(self.next);
        }
        self.last = self.next;
        self.index -= 1;
        self.backbone_index = list.wrinkles.to_backbone(self.index, list.backbone.len());
        self.last_backbone_index = self.backbone_index;
        return Ok(list.chain.item(self.last));
    }

    /// Replace the last-returned element in place, returning the old one.
    /// Not a structural edit: the list's token is untouched.
    pub fn set<T>(&mut self, list: &mut PleatList<T>, item: T) -> Result<T, ListError> {
        self.check_token(list)?;
        if self.last == NONE {
            return Err(ListError::IllegalCursorState);
        }
        return Ok(list.chain.replace(self.last, item));
    }

    /// Remove and return the last-returned element.
    ///
    /// The wrinkle and the backbone repoint use the coordinate of the
    /// *last-returned* node, which may differ from the cursor's current
    /// coordinate. The cursor's logical index steps back only if it had
    /// advanced past the removed node. Both tokens bump, so the cursor
    /// stays live while any other cursor over the list goes stale.
    pub fn remove<T>(&mut self, list: &mut PleatList<T>) -> Result<T, ListError> {
        self.check_token(list)?;
        if self.last == NONE {
            return Err(ListError::IllegalCursorState);
        }
        let target = self.last;
        let (item, prev, next) = list.chain.remove(target);
        if self.last_backbone_index < list.backbone.len()
            && list.backbone[self.last_backbone_index] == target
        {
            list.backbone[self.last_backbone_index] = prev;
        }
        list.wrinkles.add(self.last_backbone_index, -1, list.backbone.len());
        if target != self.next {
            // The removal happened behind the cursor.
            self.index -= 1;
        } else {
            self.next = next;
        }
        // The wrinkle edit can shift which slot covers the cursor position
        // (removing the node the cursor sits before does). Refresh the
        // cached coordinate so a following insert splices at the right slot.
        self.backbone_index = list.wrinkles.to_backbone(self.index, list.backbone.len());
        list.size -= 1;
        list.token += 1;
        self.token += 1;
        self.last = NONE;
        return Ok(item);
    }

    /// Splice a new element in at the cursor's current position and step
    /// over it.
    pub fn insert<T>(&mut self, list: &mut PleatList<T>, item: T) -> Result<(), ListError> {
        self.check_token(list)?;
        if self.next == NONE {
            // Tail end (or empty list): plain append, no wrinkle.
            list.chain.push_back(item);
        } else if self.next == list.chain.head() {
            list.chain.insert_before(self.next, item);
            list.wrinkles.add(0, 1, list.backbone.len());
        } else {
            list.chain.insert_before(self.next, item);
            list.wrinkles.add(self.backbone_index, 1, list.backbone.len());
        }
        self.index += 1;
        list.size += 1;
        list.token += 1;
        self.token += 1;
        return Ok(());
    }
}
