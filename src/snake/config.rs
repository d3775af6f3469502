use serde::{Deserialize, Serialize};

use crate::{
    domain::{hz_to_period, rate_divider, ClockDomain, Polarity, SECOND},
    unsigned::MAX_WIDTH,
};

/// Rate of the animation timebase.
pub const TICK_HZ: u64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("clock frequency {0} Hz is below the {} Hz tick rate", TICK_HZ)]
    ClockTooSlow(u64),
    #[error("clock frequency {0} Hz exceeds {} Hz", SECOND)]
    ClockTooFast(u64),
    #[error("mux counter width {0} is not in 1..={}", MAX_WIDTH)]
    InvalidMuxWidth(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnakeConfig {
    /// Clock frequency in hertz
    pub clk_hz: u64,
    /// Width of the digit multiplexer counter
    pub mux_width: u8,
    /// Polarity of the external reset line
    pub rst_polarity: Polarity,
    /// Polarity of the segment lines
    pub out_polarity: Polarity,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            clk_hz: 50_000_000,
            mux_width: 16,
            rst_polarity: Polarity::ActiveLow,
            out_polarity: Polarity::ActiveHigh,
        }
    }
}

impl SnakeConfig {
    pub fn for_domain<D: ClockDomain>() -> Self {
        Self {
            clk_hz: D::FREQ,
            rst_polarity: D::RST_POLARITY,
            ..Default::default()
        }
    }

    pub fn with_mux_width(mut self, mux_width: u8) -> Self {
        self.mux_width = mux_width;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clk_hz < TICK_HZ {
            return Err(ConfigError::ClockTooSlow(self.clk_hz));
        }
        if self.clk_hz > SECOND {
            return Err(ConfigError::ClockTooFast(self.clk_hz));
        }
        if !(1..=MAX_WIDTH).contains(&self.mux_width) {
            return Err(ConfigError::InvalidMuxWidth(self.mux_width));
        }

        Ok(())
    }

    /// Terminal count of the tick generator (`round(clk_hz / 400) - 1`).
    pub fn tick_max(&self) -> u64 {
        rate_divider(self.clk_hz, TICK_HZ) - 1
    }

    /// Clock period in picoseconds.
    pub fn period(&self) -> u64 {
        hz_to_period(self.clk_hz)
    }

    /// Digit multiplex rate in hertz.
    pub fn refresh_hz(&self) -> f64 {
        self.clk_hz as f64 / (1_u64 << self.mux_width) as f64
    }
}
