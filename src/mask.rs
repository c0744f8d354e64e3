//! A fixed-size square bit-mask using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Masks are
//! represented as an `N×N` grid packed into an unsigned integer `T`. The
//! attack patterns use the concrete 5×5 instantiation.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Requested mask size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N mask stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the mask (`N * N`).
    const MASK_BITS: usize = N * N;

    /// Create a new empty mask (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        Mask { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, MaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::MASK_BITS > capacity {
            Err(MaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Mask { bits: T::zero() })
        }
    }

    /// Returns the number of set bits (affected cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MaskError> {
        if row >= N || col >= N {
            Err(MaskError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a mask from an iterator over `(row, col)` positions.
    #[inline]
    pub fn from_cells<I>(iter: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (r, c) in iter {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// Row-major iterator over the set bits of the mask.
    #[inline]
    pub fn iter_set(&self) -> SetCells<'_, T, N> {
        SetCells { mask: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a mask.
#[derive(Clone, Copy)]
pub struct SetCells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a Mask<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetCells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
