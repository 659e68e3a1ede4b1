use std::{fmt, mem};

use num::cast::AsPrimitive;

use crate::{
    level::{HiValue, Level},
    traits::{SubtreeRead, SubtreeWrite},
};

/// Cached extrema of a non-empty subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent<V> {
    min: V,
    max: V,
}

/// A vEB node above the base case.
///
/// The summary indexes the non-empty children by their high bits. The
/// cached min is never stored in a child; every other stored value lives
/// in exactly one child under its low bits, and the cached max equals the
/// largest child-stored value. A node holding a single value caches it in
/// the extent alone, which is what makes inserting into an empty child a
/// constant-time operation and keeps the whole recursion at one
/// non-trivial recursive call per level.
#[derive(Clone, PartialEq, Eq)]
pub struct Subtree<L: Level> {
    extent: Option<Extent<L::Value>>,
    summary: <L::Hi as Level>::Repr,
    children: Box<[<L::Lo as Level>::Repr]>,
}

impl<L: Level> Subtree<L> {
    #[inline]
    fn child(&self, hi: HiValue<L>) -> &<L::Lo as Level>::Repr {
        &self.children[hi.as_()]
    }

    #[inline]
    fn child_mut(&mut self, hi: HiValue<L>) -> &mut <L::Lo as Level>::Repr {
        &mut self.children[hi.as_()]
    }
}

impl<L: Level> Default for Subtree<L> {
    fn default() -> Self {
        Self {
            extent: None,
            summary: Default::default(),
            children: (0..<L::Hi as Level>::CAPACITY)
                .map(|_| Default::default())
                .collect(),
        }
    }
}

impl<L: Level> fmt::Debug for Subtree<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extent {
            None => write!(f, "Subtree<{}>(empty)", L::DEBUG_NAME),
            Some(Extent { min, max }) => {
                write!(f, "Subtree<{}>({min}..={max})", L::DEBUG_NAME)
            }
        }
    }
}

impl<L: Level> SubtreeRead<L> for Subtree<L> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    #[inline]
    fn min(&self) -> Option<L::Value> {
        self.extent.map(|e| e.min)
    }

    #[inline]
    fn max(&self) -> Option<L::Value> {
        self.extent.map(|e| e.max)
    }

    fn contains(&self, value: L::Value) -> bool {
        let Some(e) = self.extent else {
            return false;
        };
        if value == e.min || value == e.max {
            return true;
        }
        let (hi, lo) = L::split(value);
        self.child(hi).contains(lo)
    }

    fn successor(&self, value: L::Value) -> Option<L::Value> {
        let e = self.extent?;
        if value < e.min {
            return Some(e.min);
        }
        let (hi, lo) = L::split(value);
        // the successor shares the child iff the child stores anything above lo
        if self.child(hi).max().is_some_and(|max| lo < max) {
            let lo_succ = self.child(hi).successor(lo).expect("child max bounds lo");
            return Some(L::combine(hi, lo_succ));
        }
        if let Some(next_hi) = self.summary.successor(hi) {
            let lo_min = self
                .child(next_hi)
                .min()
                .expect("summary tracks non-empty children");
            return Some(L::combine(next_hi, lo_min));
        }
        (value < e.max).then_some(e.max)
    }

    fn predecessor(&self, value: L::Value) -> Option<L::Value> {
        let e = self.extent?;
        if value > e.max {
            return Some(e.max);
        }
        let (hi, lo) = L::split(value);
        if self.child(hi).min().is_some_and(|min| lo > min) {
            let lo_pred = self.child(hi).predecessor(lo).expect("child min bounds lo");
            return Some(L::combine(hi, lo_pred));
        }
        if let Some(prev_hi) = self.summary.predecessor(hi) {
            let lo_max = self
                .child(prev_hi)
                .max()
                .expect("summary tracks non-empty children");
            return Some(L::combine(prev_hi, lo_max));
        }
        // the cached min is not stored in any child, so it has to be
        // considered here explicitly
        (e.min < value).then_some(e.min)
    }
}

impl<L: Level> SubtreeWrite<L> for Subtree<L> {
    fn insert(&mut self, value: L::Value) -> bool {
        let Some(mut e) = self.extent else {
            // an empty node caches the value without touching any child
            self.extent = Some(Extent { min: value, max: value });
            return true;
        };
        if value == e.min || value == e.max {
            return false;
        }
        let mut value = value;
        if value < e.min {
            // the old min descends into a child; the new min stays cached here
            mem::swap(&mut value, &mut e.min);
        }
        if value > e.max {
            e.max = value;
        }
        let (hi, lo) = L::split(value);
        if self.child(hi).is_empty() {
            // the summary descent pays the recursion; the child insert is
            // then a constant-time extent write
            self.summary.insert(hi);
        }
        let inserted = self.child_mut(hi).insert(lo);
        self.extent = Some(e);
        inserted
    }

    fn remove(&mut self, value: L::Value) -> bool {
        let Some(mut e) = self.extent else {
            return false;
        };
        if e.min == e.max {
            if value != e.min {
                return false;
            }
            self.extent = None;
            return true;
        }
        let (hi, lo) = if value == e.min {
            // promote the smallest child-stored value to min; it must not
            // stay stored below
            let hi = self.summary.min().expect("summary is non-empty when |S| >= 2");
            let lo = self.child(hi).min().expect("summary tracks non-empty children");
            e.min = L::combine(hi, lo);
            (hi, lo)
        } else {
            L::split(value)
        };
        if !self.child_mut(hi).remove(lo) {
            return false;
        }
        if self.child(hi).is_empty() {
            self.summary.remove(hi);
        }
        if value == e.max {
            // the erased value was the cached max; recompute it from the
            // largest remaining child
            e.max = match self.summary.max() {
                Some(top) => {
                    let lo_max = self
                        .child(top)
                        .max()
                        .expect("summary tracks non-empty children");
                    L::combine(top, lo_max)
                }
                None => e.min,
            };
        }
        self.extent = Some(e);
        true
    }
}
