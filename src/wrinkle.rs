//! Wrinkle chain: corrections between backbone coordinates and logical
//! positions.
//!
//! A wrinkle `(index, offset)` means every logical position at or after
//! backbone slot `index` is shifted by `offset` relative to the naive
//! slot-equals-position mapping, until a wrinkle at a larger index takes
//! over. The chain stays sorted ascending by index, holds no zero offsets,
//! and no two wrinkles share an index. Edits in the appended tail (at or
//! past the backbone length) are never recorded here: tail growth is
//! implicit in the chain's foot and the size count.
//!
//! The chain is short in the target workload (a handful of entries between
//! snapshots), so every operation is a linear walk over inline storage.

use smallvec::SmallVec;

/// A single correction record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Wrinkle {
    /// Backbone slot where the discrepancy starts.
    pub index: usize,
    /// Net shift of logical positions at or after `index`. Nonzero.
    pub offset: isize,
}

/// The sorted chain of wrinkles, plus both translation directions.
#[derive(Clone, Debug, Default)]
pub(crate) struct WrinkleChain {
    wrinkles: SmallVec<[Wrinkle; 8]>,
}

impl WrinkleChain {
    pub(crate) fn new() -> WrinkleChain {
        return WrinkleChain { wrinkles: SmallVec::new() };
    }

    pub(crate) fn is_empty(&self) -> bool {
        return self.wrinkles.is_empty();
    }

    pub(crate) fn clear(&mut self) {
        self.wrinkles.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Wrinkle> {
        return self.wrinkles.iter();
    }

    /// Logical position of backbone slot `backbone_index`: the slot number
    /// plus the offsets of every wrinkle at or before it.
    pub(crate) fn to_logical(&self, backbone_index: usize) -> isize {
        let mut index = backbone_index as isize;
        for w in &self.wrinkles {
            if w.index > backbone_index {
                break;
            }
            index += w.offset;
        }
        return index;
    }

    /// Backbone coordinate covering `logical_index`.
    ///
    /// Walks the chain accumulating offset until the next wrinkle's own
    /// logical position would pass the target, then decides between three
    /// cases: the target sits inside the run of the last wrinkle passed
    /// (return that wrinkle's index; the caller walks node links the rest
    /// of the way), past the backbone entirely (return `backbone_len` as a
    /// tail sentinel), or in clean backbone territory (return the target
    /// minus the accumulated offset).
    pub(crate) fn to_backbone(&self, logical_index: usize, backbone_len: usize) -> usize {
        let logical = logical_index as isize;
        let mut last_seen: usize = 0;
        let mut offset: isize = 0;
        for w in &self.wrinkles {
            if w.index as isize + offset > logical {
                break;
            }
            last_seen = w.index;
            offset += w.offset;
        }

        if last_seen as isize + offset > logical {
            // Inside the last passed wrinkle's affected run.
            return last_seen;
        } else if logical - offset > backbone_len as isize {
            // Past the backbone: the node lives in the appended tail.
            return backbone_len;
        } else {
            // Clean backbone territory.
            return (logical - offset) as usize;
        }
    }

    /// Record a discrepancy of `offset` at backbone slot `index`.
    ///
    /// Tail edits (`index >= backbone_len`) need no correction and are
    /// dropped. An exact index match merges; a merged offset of zero
    /// splices the wrinkle out. Cost is linear in the chain length, never
    /// in the list size.
    pub(crate) fn add(&mut self, index: usize, offset: isize, backbone_len: usize) {
        if index >= backbone_len {
            return;
        }
        match self.wrinkles.iter().position(|w| w.index >= index) {
            Some(at) if self.wrinkles[at].index == index => {
                self.wrinkles[at].offset += offset;
                if self.wrinkles[at].offset == 0 {
                    self.wrinkles.remove(at);
                }
            }
            Some(at) => {
                self.wrinkles.insert(at, Wrinkle { index, offset });
            }
            None => {
                self.wrinkles.push(Wrinkle { index, offset });
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<(usize, isize)> {
        return self.wrinkles.iter().map(|w| (w.index, w.offset)).collect();
    }
}
