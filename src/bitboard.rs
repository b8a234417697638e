//! Packed cell masks for one side's grid.
//!
//! An `N×N` grid maps cell (row, col) to bit `row * N + col` of the
//! unsigned integer `T`. Bits at or above `N * N` are always zero.

use core::fmt;
use core::ops::{BitOr, Not};
use num_traits::{PrimInt, Unsigned};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitBoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// Set of cells on an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: PrimInt + Unsigned, const N: usize> {
    bits: T,
}

impl<T: PrimInt + Unsigned, const N: usize> BitBoard<T, N> {
    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row < N && col < N {
            Ok(T::one() << (row * N + col))
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    fn in_grid(bits: T) -> T {
        let cells = N * N;
        if cells >= T::zero().count_zeros() as usize {
            bits
        } else {
            bits & ((T::one() << cells) - T::one())
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(self.bits & Self::bit(row, col)? != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(row, col)?;
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits & !Self::bit(row, col)?;
        Ok(())
    }

    /// Set or clear (row, col). Callers must have checked the bounds.
    pub(crate) fn assign(&mut self, row: usize, col: usize, on: bool) {
        debug_assert!(row < N && col < N);
        let bit = T::one() << (row * N + col);
        self.bits = if on { self.bits | bit } else { self.bits & !bit };
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// Marked cells, row by row.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> {
        let bits = self.bits;
        (0..N * N)
            .filter(move |&i| (bits >> i) & T::one() != T::zero())
            .map(|i| (i / N, i % N))
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T: PrimInt + Unsigned, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;
    fn not(self) -> Self {
        Self {
            bits: Self::in_grid(!self.bits),
        }
    }
}

impl<T: PrimInt + Unsigned, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for cell in self.iter_set_bits() {
            list.entry(&cell);
        }
        list.finish()
    }
}
