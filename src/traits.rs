use num::cast::AsPrimitive;

use crate::level::Level;

/// Read-side operations every subtree representation supports.
pub trait SubtreeRead<L: Level> {
    /// returns true if this subtree stores no values
    fn is_empty(&self) -> bool;

    /// returns true if this subtree contains the given value
    fn contains(&self, value: L::Value) -> bool;

    /// returns the smallest stored value
    fn min(&self) -> Option<L::Value>;

    /// returns the largest stored value
    fn max(&self) -> Option<L::Value>;

    /// returns the smallest stored value strictly greater than `value`
    fn successor(&self, value: L::Value) -> Option<L::Value>;

    /// returns the largest stored value strictly less than `value`
    fn predecessor(&self, value: L::Value) -> Option<L::Value>;
}

/// Write-side operations every subtree representation supports.
pub trait SubtreeWrite<L: Level> {
    /// Inserts the value into the subtree unless it already exists.
    /// Returns `true` if the insertion occurred, `false` otherwise.
    fn insert(&mut self, value: L::Value) -> bool;

    /// Removes the value from the subtree if it exists.
    /// Returns `true` if the removal occurred, `false` otherwise.
    fn remove(&mut self, value: L::Value) -> bool;
}

#[doc(hidden)]
pub trait TruncateFrom<T> {
    fn truncate_from(other: T) -> Self;
}

macro_rules! impl_truncate_from_usize {
    ($($ty:ty),*) => {
        $(
            impl TruncateFrom<usize> for $ty {
                #[inline(always)]
                fn truncate_from(other: usize) -> Self {
                    other.as_()
                }
            }
        )*
    };
}
impl_truncate_from_usize!(u16, u8);
