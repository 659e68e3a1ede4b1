use std::{fmt, iter::FusedIterator, ptr};

use crate::set::VebSet;

/// Read-only bidirectional cursor over a [`VebSet`] in sorted order.
///
/// A cursor is positioned either at a stored value or at the end. Each
/// step performs one successor/predecessor query against the owning set,
/// so stepping is O(log log U). The borrow rules keep a cursor valid: the
/// set cannot be mutated while one is live.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    set: &'a VebSet,
    at: Option<u16>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(set: &'a VebSet, at: Option<u16>) -> Self {
        Self { set, at }
    }

    /// Value under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<u16> {
        self.at
    }

    /// Returns true if the cursor is at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    /// Moves to the next stored value. From the largest value the cursor
    /// moves to the end; at the end it stays put.
    pub fn move_next(&mut self) {
        if let Some(at) = self.at {
            self.at = self.set.successor(at);
        }
    }

    /// Moves to the previous stored value. From the end the cursor moves
    /// to the largest value; from the smallest value it moves to the end
    /// (there is no before-begin position).
    pub fn move_prev(&mut self) {
        self.at = match self.at {
            Some(at) => self.set.predecessor(at),
            None => self.set.last(),
        };
    }
}

/// Cursors are equal iff they belong to the same set and sit at the same
/// position (end == end).
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.set, other.set) && self.at == other.at
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.at {
            Some(at) => write!(f, "Cursor({at})"),
            None => write!(f, "Cursor(end)"),
        }
    }
}

/// Mutating cursor over a [`VebSet`].
///
/// Holds the set exclusively, which allows removal at the cursor without
/// invalidation.
pub struct CursorMut<'a> {
    set: &'a mut VebSet,
    at: Option<u16>,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(set: &'a mut VebSet, at: Option<u16>) -> Self {
        Self { set, at }
    }

    /// Value under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<u16> {
        self.at
    }

    /// Moves to the next stored value; see [`Cursor::move_next`].
    pub fn move_next(&mut self) {
        if let Some(at) = self.at {
            self.at = self.set.successor(at);
        }
    }

    /// Moves to the previous stored value; see [`Cursor::move_prev`].
    pub fn move_prev(&mut self) {
        self.at = match self.at {
            Some(at) => self.set.predecessor(at),
            None => self.set.last(),
        };
    }

    /// Removes the value under the cursor and advances to its successor.
    /// Returns the removed value, or `None` if the cursor was at the end.
    pub fn remove_current(&mut self) -> Option<u16> {
        let at = self.at?;
        self.at = self.set.successor(at);
        let removed = self.set.remove(at);
        debug_assert!(removed, "cursor names a stored value");
        Some(at)
    }
}

impl fmt::Debug for CursorMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.at {
            Some(at) => write!(f, "CursorMut({at})"),
            None => write!(f, "CursorMut(end)"),
        }
    }
}

/// Double-ended iterator over a [`VebSet`] in ascending order.
#[derive(Clone)]
pub struct Iter<'a> {
    set: &'a VebSet,
    front: Option<u16>,
    back: Option<u16>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a VebSet) -> Self {
        Self {
            set,
            front: set.first(),
            back: set.last(),
            remaining: set.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.front.expect("remaining values have a front");
        self.remaining -= 1;
        self.front = self.set.successor(value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.back.expect("remaining values have a back");
        self.remaining -= 1;
        self.back = self.set.predecessor(value);
        Some(value)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
