//! `SiteMask` — fixed-width bitset over compact distance-matrix indices.
//!
//! Bit `i` corresponds to compact index `i` of a [`DistanceMatrix`]
//! (bit 0 = the start site; bits 1..=k = the value-bearing sites).
//! Allowed-site sets, activated-site sets, and partition masks are all
//! `SiteMask`s.  Capacity is 64 compact sites — far above the tens of sites
//! real inputs carry; [`DistanceMatrix::build`] rejects anything larger.
//!
//! [`DistanceMatrix`]: crate::DistanceMatrix
//! [`DistanceMatrix::build`]: crate::DistanceMatrix::build

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A set of compact site indices, packed into a `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteMask(pub u64);

impl SiteMask {
    pub const EMPTY: SiteMask = SiteMask(0);

    /// Maximum number of compact indices a mask can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// The mask containing only compact index `i`.
    #[inline]
    pub fn single(i: usize) -> SiteMask {
        debug_assert!(i < Self::CAPACITY);
        SiteMask(1 << i)
    }

    #[inline]
    pub fn contains(self, i: usize) -> bool {
        self.0 & (1 << i) != 0
    }

    /// `self` with compact index `i` added.
    #[inline]
    pub fn with(self, i: usize) -> SiteMask {
        debug_assert!(i < Self::CAPACITY);
        SiteMask(self.0 | (1 << i))
    }

    /// `self` with compact index `i` removed.
    #[inline]
    pub fn without(self, i: usize) -> SiteMask {
        SiteMask(self.0 & !(1 << i))
    }

    /// The members of `universe` that are not in `self`.
    #[inline]
    pub fn complement_within(self, universe: SiteMask) -> SiteMask {
        SiteMask(universe.0 & !self.0)
    }

    /// Set difference: members of `self` not in `other`.
    #[inline]
    pub fn minus(self, other: SiteMask) -> SiteMask {
        SiteMask(self.0 & !other.0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the set compact indices in ascending order.
    #[inline]
    pub fn iter(self) -> Bits {
        Bits(self.0)
    }
}

impl BitAnd for SiteMask {
    type Output = SiteMask;
    #[inline]
    fn bitand(self, rhs: SiteMask) -> SiteMask {
        SiteMask(self.0 & rhs.0)
    }
}

impl BitOr for SiteMask {
    type Output = SiteMask;
    #[inline]
    fn bitor(self, rhs: SiteMask) -> SiteMask {
        SiteMask(self.0 | rhs.0)
    }
}

impl fmt::Debug for SiteMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteMask({:#b})", self.0)
    }
}

/// Ascending iterator over the set bits of a [`SiteMask`].
pub struct Bits(u64);

impl Iterator for Bits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1; // clear lowest set bit
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bits {}

impl IntoIterator for SiteMask {
    type Item = usize;
    type IntoIter = Bits;

    fn into_iter(self) -> Bits {
        self.iter()
    }
}
