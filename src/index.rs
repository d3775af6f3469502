use std::fmt::{self, Binary, Debug, Display, LowerHex};

use serde::{Deserialize, Serialize};

use crate::{const_functions::clog2_len, signal::SignalValue};

#[inline(always)]
pub const fn idx_constr(n: usize) -> usize {
    clog2_len(n)
}

/// Index in `0..N`. Wraps to zero on [`Idx::succ`] past `N - 1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Idx<const N: usize>(usize);

impl<const N: usize> Debug for Idx<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<const N: usize> Display for Idx<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<const N: usize> Binary for Idx<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

impl<const N: usize> LowerHex for Idx<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl<const N: usize> Default for Idx<N> {
    fn default() -> Self {
        Self::min()
    }
}

impl<const N: usize> SignalValue for Idx<N> {}

impl<const N: usize> TryFrom<usize> for Idx<N> {
    type Error = String;

    fn try_from(val: usize) -> Result<Self, Self::Error> {
        Self::try_new(val).ok_or_else(|| format!("index {val} out of range 0..{N}"))
    }
}

impl<const N: usize> From<Idx<N>> for usize {
    fn from(idx: Idx<N>) -> Self {
        idx.0
    }
}

impl<const N: usize> Idx<N> {
    pub const BITS: usize = idx_constr(N);

    /// # Panics
    /// If `val >= N`.
    #[inline]
    pub const fn new(val: usize) -> Self {
        assert!(val < N, "index out of range");
        Self(val)
    }

    #[inline]
    pub const fn try_new(val: usize) -> Option<Self> {
        if val < N {
            Some(Self(val))
        } else {
            None
        }
    }

    #[inline]
    pub const fn min() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn max() -> Self {
        Self(N - 1)
    }

    #[inline]
    pub const fn val(self) -> usize {
        self.0
    }

    pub const fn succ(self) -> Self {
        if self.is_max() {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }

    #[inline]
    pub const fn is_max(&self) -> bool {
        self.0 == N - 1
    }

    #[inline]
    pub const fn is_min(&self) -> bool {
        self.0 == 0
    }

    /// All indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succ_wraps() {
        let idx = Idx::<3>::new(1);
        assert_eq!(idx.succ().val(), 2);
        assert_eq!(idx.succ().succ().val(), 0);
        assert!(idx.succ().is_max());
    }

    #[test]
    fn bounds() {
        assert!(Idx::<3>::min().is_min());
        assert!(Idx::<3>::max().is_max());
        assert_eq!(Idx::<3>::max().succ(), Idx::<3>::min());
    }

    #[test]
    fn bits() {
        assert_eq!(Idx::<34>::BITS, 6);
        assert_eq!(Idx::<240>::BITS, 8);
    }

    #[test]
    fn try_new() {
        assert_eq!(Idx::<34>::try_new(33), Some(Idx::new(33)));
        assert_eq!(Idx::<34>::try_new(34), None);
        assert!(Idx::<34>::try_from(40).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn out_of_range() {
        Idx::<34>::new(34);
    }

    #[test]
    fn all() {
        assert_eq!(Idx::<4>::all().map(Idx::val).collect::<Vec<_>>(), [0, 1, 2, 3]);
    }
}
