//! Arena-backed doubly linked node chain.
//!
//! Nodes live in a `Vec` and address each other by stable `u32` indices,
//! with `NONE` (`u32::MAX`) marking an absent link. Freed slots go on a free
//! list and are reused by later allocations. The chain is the ground truth
//! of content and order; everything else in the crate (backbone, wrinkles,
//! cursors) holds node indices into it.

/// Sentinel for an absent node index.
pub(crate) const NONE: u32 = u32::MAX;

/// A single node slot. `item` is `None` only while the slot sits on the
/// free list.
#[derive(Clone, Debug)]
struct Node<T> {
    prev: u32,
    next: u32,
    item: Option<T>,
}

/// A doubly linked chain of nodes packed into an arena.
#[derive(Clone, Debug)]
pub(crate) struct Chain<T> {
    nodes: Vec<Node<T>>,
    free: Vec<u32>,
    head: u32,
    foot: u32,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Chain<T> {
        return Chain {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NONE,
            foot: NONE,
        };
    }

    #[inline(always)]
    pub(crate) fn head(&self) -> u32 {
        return self.head;
    }

    #[inline(always)]
    pub(crate) fn foot(&self) -> u32 {
        return self.foot;
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        return self.head == NONE;
    }

    #[inline(always)]
    pub(crate) fn next(&self, index: u32) -> u32 {
        return self.nodes[index as usize].next;
    }

    #[inline(always)]
    pub(crate) fn prev(&self, index: u32) -> u32 {
        return self.nodes[index as usize].prev;
    }

    /// Borrow the item stored at `index`. The slot must be live.
    #[inline]
    pub(crate) fn item(&self, index: u32) -> &T {
        return self.nodes[index as usize]
            .item
            .as_ref()
            .expect("chain slot is live");
    }

    /// Replace the item at `index` in place, returning the old one.
    pub(crate) fn replace(&mut self, index: u32, item: T) -> T {
        return self.nodes[index as usize]
            .item
            .replace(item)
            .expect("chain slot is live");
    }

    fn alloc(&mut self, prev: u32, next: u32, item: T) -> u32 {
        let node = Node { prev, next, item: Some(item) };
        if let Some(slot) = self.free.pop() {
            self.nodes[slot as usize] = node;
            return slot;
        }
        self.nodes.push(node);
        return (self.nodes.len() - 1) as u32;
    }

    /// Append a node at the foot. O(1).
    pub(crate) fn push_back(&mut self, item: T) -> u32 {
        let index = self.alloc(self.foot, NONE, item);
        if self.foot == NONE {
            self.head = index;
        } else {
            self.nodes[self.foot as usize].next = index;
        }
        self.foot = index;
        return index;
    }

    /// Splice a new node immediately before `at`, updating the head when
    /// `at` was the head. O(1).
    pub(crate) fn insert_before(&mut self, at: u32, item: T) -> u32 {
        let prev = self.nodes[at as usize].prev;
        let index = self.alloc(prev, at, item);
        self.nodes[at as usize].prev = index;
        if prev == NONE {
            self.head = index;
        } else {
            self.nodes[prev as usize].next = index;
        }
        return index;
    }

    /// Unlink the node at `index` and free its slot. Returns the item and
    /// the node's old neighbor links. O(1).
    pub(crate) fn remove(&mut self, index: u32) -> (T, u32, u32) {
        let prev = self.nodes[index as usize].prev;
        let next = self.nodes[index as usize].next;
        if next == NONE {
            self.foot = prev;
        } else {
            self.nodes[next as usize].prev = prev;
        }
        if prev == NONE {
            self.head = next;
        } else {
            self.nodes[prev as usize].next = next;
        }
        let item = self.nodes[index as usize]
            .item
            .take()
            .expect("chain slot is live");
        self.free.push(index);
        return (item, prev, next);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NONE;
        self.foot = NONE;
    }
}
