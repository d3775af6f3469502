use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::const_functions::div_round;

pub const SECOND: u64 = 1_000_000_000_000;
pub const MILLISECOND: u64 = 1_000_000_000;
pub const MICROSECOND: u64 = 1_000_000;
pub const NANOSECOND: u64 = 1_000;
pub const PICOSECOND: u64 = 1;

pub const fn hz_to_period(freq: u64) -> u64 {
    assert!(SECOND >= freq);
    SECOND / freq
}

/// Clock cycles between two events of an event stream running at `rate` Hz.
pub const fn rate_divider(freq: u64, rate: u64) -> u64 {
    assert!(freq >= rate);
    div_round(freq, rate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ActiveHigh => "active-high",
            Self::ActiveLow => "active-low",
        })
    }
}

impl Polarity {
    /// Maps a line level to "active" and back.
    pub fn bool(&self, b: bool) -> bool {
        match self {
            Self::ActiveHigh => b,
            Self::ActiveLow => !b,
        }
    }
}

pub trait ClockDomain: 'static {
    /// In hertz
    const FREQ: u64;
    /// In picoseconds
    const PERIOD: u64 = hz_to_period(Self::FREQ);
    /// Reset Polarity
    const RST_POLARITY: Polarity = Polarity::ActiveLow;
}

/// 50 MHz oscillator found on most entry-level FPGA boards.
pub struct Board50MHz;

impl ClockDomain for Board50MHz {
    const FREQ: u64 = 50_000_000;
}

/// 12 MHz oscillator (iCE40 boards).
pub struct Board12MHz;

impl ClockDomain for Board12MHz {
    const FREQ: u64 = 12_000_000;
}

pub struct TestDomain<const N: u64>;

impl<const N: u64> ClockDomain for TestDomain<N> {
    const FREQ: u64 = N;
}

pub type TD400 = TestDomain<400>;
pub type TD1K = TestDomain<1_000>;
pub type TD2K = TestDomain<2_000>;
