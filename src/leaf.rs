use std::fmt::{self, Debug};

use bitvec::{array::BitArray, order::Lsb0};

use crate::{
    level::{Block, Level},
    traits::{SubtreeRead, SubtreeWrite, TruncateFrom},
};

/// Base-case subtree: the 16-value universe as a flat bit array in a
/// single machine word. No min/max cache; every query is a constant-time
/// scan of the word.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Leaf {
    bits: BitArray<u16, Lsb0>,
}

static_assertions::const_assert_eq!(std::mem::size_of::<Leaf>(), std::mem::size_of::<u16>());
static_assertions::const_assert_eq!(<Block as Level>::CAPACITY, u16::BITS as usize);

impl Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaf({})", self.bits.count_ones())
    }
}

impl SubtreeRead<Block> for Leaf {
    #[inline]
    fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    #[inline]
    fn contains(&self, value: u8) -> bool {
        self.bits[value as usize]
    }

    #[inline]
    fn min(&self) -> Option<u8> {
        self.bits.first_one().map(u8::truncate_from)
    }

    #[inline]
    fn max(&self) -> Option<u8> {
        self.bits.last_one().map(u8::truncate_from)
    }

    fn successor(&self, value: u8) -> Option<u8> {
        let start = value as usize + 1;
        self.bits[start..]
            .first_one()
            .map(|offset| u8::truncate_from(start + offset))
    }

    fn predecessor(&self, value: u8) -> Option<u8> {
        self.bits[..value as usize].last_one().map(u8::truncate_from)
    }
}

impl SubtreeWrite<Block> for Leaf {
    fn insert(&mut self, value: u8) -> bool {
        let mut bit = self.bits.get_mut(value as usize).expect("value out of range");
        !bit.replace(true)
    }

    fn remove(&mut self, value: u8) -> bool {
        let mut bit = self.bits.get_mut(value as usize).expect("value out of range");
        bit.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let leaf = Leaf::default();
        assert!(leaf.is_empty());
        assert_eq!(leaf.min(), None);
        assert_eq!(leaf.max(), None);
        assert_eq!(leaf.successor(0), None);
        assert_eq!(leaf.predecessor(15), None);
        for i in 0..16 {
            assert!(!leaf.contains(i));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut leaf = Leaf::default();
        assert!(leaf.insert(7));
        assert!(!leaf.insert(7));
        assert!(leaf.contains(7));
        assert!(!leaf.is_empty());

        assert!(leaf.remove(7));
        assert!(!leaf.remove(7));
        assert!(!leaf.contains(7));
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_extrema() {
        let mut leaf = Leaf::default();
        leaf.insert(3);
        leaf.insert(9);
        leaf.insert(12);
        assert_eq!(leaf.min(), Some(3));
        assert_eq!(leaf.max(), Some(12));
    }

    #[test]
    fn test_successor_scan() {
        let mut leaf = Leaf::default();
        leaf.insert(2);
        leaf.insert(5);
        leaf.insert(15);

        assert_eq!(leaf.successor(0), Some(2));
        assert_eq!(leaf.successor(2), Some(5));
        assert_eq!(leaf.successor(5), Some(15));
        assert_eq!(leaf.successor(15), None);

        assert_eq!(leaf.predecessor(15), Some(5));
        assert_eq!(leaf.predecessor(5), Some(2));
        assert_eq!(leaf.predecessor(2), None);
        assert_eq!(leaf.predecessor(0), None);
    }

    #[test]
    fn test_boundary_bits() {
        let mut leaf = Leaf::default();
        leaf.insert(0);
        leaf.insert(15);
        assert_eq!(leaf.min(), Some(0));
        assert_eq!(leaf.max(), Some(15));
        assert_eq!(leaf.successor(0), Some(15));
        assert_eq!(leaf.predecessor(15), Some(0));
    }
}
