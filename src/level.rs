use std::fmt::{Debug, Display};

use num::cast::AsPrimitive;

use crate::{
    leaf::Leaf,
    never::Never,
    node::Subtree,
    traits::{SubtreeRead, SubtreeWrite, TruncateFrom},
};

/// One level of the universe-halving recursion.
///
/// A level manages the universe `[0, 2^BITS)`. Levels above the base split
/// every value into `Hi::BITS` high bits (the child index, which is also
/// the summary's universe) and `Lo::BITS` low bits (the position within
/// the child). The split is `ceil/floor`: `Hi::BITS = BITS - BITS / 2` and
/// `Lo::BITS = BITS / 2`, which for the 16-bit root yields the chain
/// 16 → 8 → 4.
pub trait Level: Sized + Clone + Copy {
    const DEBUG_NAME: &'static str;

    /// Bit width of this level's universe.
    const BITS: u32;

    /// Number of addressable values at this level.
    const CAPACITY: usize = 1 << Self::BITS;

    /// Level of the high half: the summary universe and the child index
    /// space.
    type Hi: Level;

    /// Level of the low half: the universe of each child subtree.
    type Lo: Level;

    /// Subtree representation at this level. Naming the representation per
    /// level keeps the leaf/internal distinction fully static.
    type Repr: SubtreeRead<Self>
        + SubtreeWrite<Self>
        + Default
        + Debug
        + Clone
        + PartialEq
        + Eq;

    /// Primitive carrying values of this universe.
    type Value: num::PrimInt + AsPrimitive<usize> + TruncateFrom<usize> + Debug + Display;

    /// Splits a value into its high bits (child index) and low bits
    /// (position within the child).
    #[inline]
    fn split(value: Self::Value) -> (HiValue<Self>, LoValue<Self>) {
        let value: usize = value.as_();
        let hi = HiValue::<Self>::truncate_from(value >> <Self::Lo as Level>::BITS);
        let lo = LoValue::<Self>::truncate_from(value & (<Self::Lo as Level>::CAPACITY - 1));
        (hi, lo)
    }

    /// Inverse of [`split`](Level::split).
    #[inline]
    fn combine(hi: HiValue<Self>, lo: LoValue<Self>) -> Self::Value {
        Self::Value::truncate_from((hi.as_() << <Self::Lo as Level>::BITS) | lo.as_())
    }
}

/// Value type of a level's high half.
pub type HiValue<L> = <<L as Level>::Hi as Level>::Value;
/// Value type of a level's low half.
pub type LoValue<L> = <<L as Level>::Lo as Level>::Value;

/// The 16-bit root level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct High;

impl Level for High {
    const DEBUG_NAME: &'static str = "High";
    const BITS: u32 = 16;

    type Hi = Low;
    type Lo = Low;
    type Repr = Subtree<High>;
    type Value = u16;
}

/// The 8-bit intermediate level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Low;

impl Level for Low {
    const DEBUG_NAME: &'static str = "Low";
    const BITS: u32 = 8;

    type Hi = Block;
    type Lo = Block;
    type Repr = Subtree<Low>;
    type Value = u8;
}

/// The 4-bit base level, represented by a flat bit array.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Block;

impl Level for Block {
    const DEBUG_NAME: &'static str = "Block";
    const BITS: u32 = 4;

    type Hi = Never;
    type Lo = Never;
    type Repr = Leaf;
    type Value = u8;
}
