//! Minimal positional-sequence capability trait.
//!
//! `Sequence` is the interchangeability seam: anything that can be read,
//! written, spliced, and truncated by position can stand in for anything
//! else that can. [`PleatList`](crate::PleatList) implements it, and so do
//! `Vec` and `VecDeque`, which serve as the array-backed references that
//! lockstep tests and comparative benchmarks run against.

use std::collections::VecDeque;

use crate::error::ListError;
use crate::list::PleatList;

/// Positional read/write/splice access to an ordered sequence.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Borrow the element at `index` (`index < len`).
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: T) -> Result<T, ListError>;

    /// Append an element.
    fn push(&mut self, item: T);

    /// Insert at `index` (`index <= len`), shifting later elements.
    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError>;

    /// Remove and return the element at `index` (`index < len`).
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    fn clear(&mut self);
}

impl<T> Sequence<T> for PleatList<T> {
    fn len(&self) -> usize {
        return PleatList::len(self);
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        return PleatList::get(self, index);
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        return PleatList::set(self, index, item);
    }

    fn push(&mut self, item: T) {
        PleatList::push(self, item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        return PleatList::insert(self, index, item);
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        return PleatList::remove(self, index);
    }

    fn clear(&mut self) {
        PleatList::clear(self);
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        return Vec::len(self);
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = Vec::len(self);
        return self
            .as_slice()
            .get(index)
            .ok_or(ListError::OutOfRange { index, len });
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        let len = Vec::len(self);
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(ListError::OutOfRange { index, len }),
        }
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > Vec::len(self) {
            return Err(ListError::OutOfRange { index, len: Vec::len(self) });
        }
        Vec::insert(self, index, item);
        return Ok(());
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= Vec::len(self) {
            return Err(ListError::OutOfRange { index, len: Vec::len(self) });
        }
        return Ok(Vec::remove(self, index));
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    fn len(&self) -> usize {
        return VecDeque::len(self);
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = VecDeque::len(self);
        return VecDeque::get(self, index).ok_or(ListError::OutOfRange { index, len });
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        let len = VecDeque::len(self);
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(ListError::OutOfRange { index, len }),
        }
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > VecDeque::len(self) {
            return Err(ListError::OutOfRange { index, len: VecDeque::len(self) });
        }
        VecDeque::insert(self, index, item);
        return Ok(());
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let len = VecDeque::len(self);
        return VecDeque::remove(self, index).ok_or(ListError::OutOfRange { index, len });
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}
