use std::fmt::{self, Binary, Display};

use crate::{const_functions::mask, signal::SignalValue};

pub const MAX_WIDTH: u8 = 63;

pub fn unsigned_value(val: u64, width: u8) -> u64 {
    val & mask(width as u32)
}

/// Unsigned value with a width fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unsigned {
    width: u8,
    val: u64,
}

impl SignalValue for Unsigned {}

impl Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.val, f)
    }
}

impl Binary for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.val, width = self.width as usize)
    }
}

impl Unsigned {
    /// # Panics
    /// If `width` is not in `1..=MAX_WIDTH`.
    pub fn new(width: u8, val: u64) -> Self {
        assert!(
            (1..=MAX_WIDTH).contains(&width),
            "unsigned width {width} out of range"
        );
        Self {
            width,
            val: unsigned_value(val, width),
        }
    }

    #[inline]
    pub fn zero(width: u8) -> Self {
        Self::new(width, 0)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn val(&self) -> u64 {
        self.val
    }

    /// Wrapping increment.
    pub fn succ(self) -> Self {
        Self {
            width: self.width,
            val: unsigned_value(self.val + 1, self.width),
        }
    }

    #[inline]
    pub fn bit(&self, n: u8) -> bool {
        assert!(n < self.width);
        (self.val >> n) & 1 == 1
    }

    #[inline]
    pub fn msb(&self) -> bool {
        self.bit(self.width - 1)
    }

    /// Bits from the most significant one down.
    pub fn bits_msb_first(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).rev().map(|n| self.bit(n))
    }
}
