use crate::{
    level::Level,
    traits::{SubtreeRead, SubtreeWrite},
};

/// The Never type terminates the level chain below the base case. It is
/// never constructed or used; attempting to construct it via Default is a
/// runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

impl Default for Never {
    fn default() -> Self {
        unreachable!("Never::default")
    }
}

impl Level for Never {
    const DEBUG_NAME: &'static str = "Never";
    const BITS: u32 = 0;

    type Hi = Never;
    type Lo = Never;
    type Repr = Never;
    type Value = u8;
}

impl<L: Level> SubtreeRead<L> for Never {
    fn is_empty(&self) -> bool {
        unreachable!("Never::is_empty")
    }

    fn contains(&self, _value: L::Value) -> bool {
        unreachable!("Never::contains")
    }

    fn min(&self) -> Option<L::Value> {
        unreachable!("Never::min")
    }

    fn max(&self) -> Option<L::Value> {
        unreachable!("Never::max")
    }

    fn successor(&self, _value: L::Value) -> Option<L::Value> {
        unreachable!("Never::successor")
    }

    fn predecessor(&self, _value: L::Value) -> Option<L::Value> {
        unreachable!("Never::predecessor")
    }
}

impl<L: Level> SubtreeWrite<L> for Never {
    fn insert(&mut self, _value: L::Value) -> bool {
        unreachable!("Never::insert")
    }

    fn remove(&mut self, _value: L::Value) -> bool {
        unreachable!("Never::remove")
    }
}
