use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    module::Module,
    signal::{Reg, Reset, SignalValue},
    unsigned::Unsigned,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digit {
    Digit0,
    Digit1,
}

impl SignalValue for Digit {}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Digit0 => "digit0",
            Self::Digit1 => "digit1",
        })
    }
}

impl Digit {
    #[inline]
    pub fn from_sel(sel: bool) -> Self {
        if sel {
            Self::Digit1
        } else {
            Self::Digit0
        }
    }

    /// Digit-select line level.
    #[inline]
    pub fn sel(&self) -> bool {
        matches!(self, Self::Digit1)
    }

    #[inline]
    pub fn idx(&self) -> usize {
        self.sel() as usize
    }
}

/// Time-division multiplexer for the two digits, switching every
/// `2^(width - 1)` cycles.
#[derive(Debug, Clone)]
pub struct DigitMux {
    cnt: Reg<Unsigned>,
}

impl DigitMux {
    pub fn new(width: u8) -> Self {
        Self {
            cnt: Reg::new(Unsigned::zero(width)),
        }
    }

    #[inline]
    pub fn cnt(&self) -> Unsigned {
        self.cnt.val()
    }

    #[inline]
    pub fn digit(&self) -> Digit {
        Digit::from_sel(self.cnt.get().msb())
    }
}

impl Module for DigitMux {
    type Input = Reset;
    type Output = Digit;

    fn logic(&mut self, rst: Self::Input) -> Self::Output {
        self.cnt.reg(rst, Unsigned::succ);
        self.digit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        let mut mux = DigitMux::new(3);
        let digits = (0..16).map(|_| mux.logic(false).idx()).collect::<Vec<_>>();
        assert_eq!(digits, [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn width_one_toggles() {
        let mut mux = DigitMux::new(1);
        let digits = (0..4).map(|_| mux.logic(false)).collect::<Vec<_>>();
        assert_eq!(
            digits,
            [Digit::Digit1, Digit::Digit0, Digit::Digit1, Digit::Digit0]
        );
    }

    #[test]
    fn reset_selects_digit0() {
        let mut mux = DigitMux::new(2);
        mux.logic(false);
        mux.logic(false);
        assert_eq!(mux.digit(), Digit::Digit1);
        assert_eq!(mux.logic(true), Digit::Digit0);
        assert_eq!(mux.cnt().val(), 0);
    }
}
